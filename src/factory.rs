use std::fmt;

use crate::lock::InstanceHolder;
use crate::Error;

static INSTANCE: InstanceHolder<ChocolateFactory> = InstanceHolder::new(ChocolateFactory::build);

/// The one and only chocolate factory of the process
///
/// It cannot be built outside of this module:
///
/// ```compile_fail
/// let factory = chocolate_factory::ChocolateFactory { _seal: 0 };
/// ```
///
/// Its textual representation is its identity, so two references to it always
/// print the same:
///
/// ```
/// use chocolate_factory::ChocolateFactory;
///
/// # fn main() -> Result<(), chocolate_factory::Error> {
/// let first = ChocolateFactory::get_instance()?;
/// let second = ChocolateFactory::get_instance()?;
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(first.to_string(), second.to_string());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ChocolateFactory {
    // Sized so that every factory occupies its own address.
    _seal: u8,
}

impl ChocolateFactory {
    fn build() -> Result<Self, Error> {
        Ok(Self { _seal: 0 })
    }

    /// Returns the shared factory, building it on the first call
    pub fn get_instance() -> Result<&'static Self, Error> {
        INSTANCE.get()
    }

    /// Whether the factory has been built yet
    pub fn is_built() -> bool {
        INSTANCE.get_initialized().is_some()
    }

    /// How many times the factory has been built, never more than once
    pub fn constructions() -> usize {
        INSTANCE.constructions()
    }

    /// Address of this factory, stable for the lifetime of the process
    pub fn identity(&self) -> usize {
        self as *const Self as usize
    }
}

impl fmt::Display for ChocolateFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChocolateFactory@{:#x}", self.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::ChocolateFactory;

    #[test]
    fn separately_built_factories_have_distinct_identities() {
        let first = Box::new(ChocolateFactory::build().unwrap());
        let second = Box::new(ChocolateFactory::build().unwrap());

        assert!(std::mem::size_of::<ChocolateFactory>() > 0);
        assert!(!std::ptr::eq(&*first, &*second));
        assert_ne!(first.identity(), second.identity());
        assert_ne!(first.to_string(), second.to_string());
    }

    #[test]
    fn accessor_returns_the_same_factory() {
        let first = ChocolateFactory::get_instance().unwrap();
        let second = ChocolateFactory::get_instance().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.identity(), second.identity());
        assert!(ChocolateFactory::is_built());
        assert_eq!(ChocolateFactory::constructions(), 1);
    }

    #[test]
    fn built_once_after_many_calls() {
        for _ in 0..100 {
            ChocolateFactory::get_instance().unwrap();
        }

        assert_eq!(ChocolateFactory::constructions(), 1);
    }

    #[test]
    fn display_is_the_identity() {
        let factory = ChocolateFactory::get_instance().unwrap();
        let rendered = factory.to_string();

        assert_eq!(rendered, format!("ChocolateFactory@{:#x}", factory.identity()));
        assert_eq!(
            rendered,
            ChocolateFactory::get_instance().unwrap().to_string()
        );
    }

    #[test]
    fn shared_across_threads() {
        let identities = std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| scope.spawn(|| ChocolateFactory::get_instance().unwrap().identity()))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });

        let expected = ChocolateFactory::get_instance().unwrap().identity();
        assert!(identities.iter().all(|&identity| identity == expected));
        assert_eq!(ChocolateFactory::constructions(), 1);
    }
}
