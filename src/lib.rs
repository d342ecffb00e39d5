//! A chocolate factory that exists at most once per process.
//!
//! The only way to reach it is [`ChocolateFactory::get_instance`], which builds
//! the factory on first use and hands out the same `&'static` reference ever
//! after. The storage behind it is the generic [`lock::InstanceHolder`].
pub mod factory;
pub mod lock;

pub use factory::ChocolateFactory;

/// Errors returned while obtaining a shared instance
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// The instance could not be built. The holder stays empty so the next
    /// call tries again.
    #[error("could not construct the instance: {reason}")]
    #[diagnostic(
        code(chocolate_factory::construction_failed),
        help("the next call to the accessor retries the construction")
    )]
    ConstructionFailed { reason: String },
}
