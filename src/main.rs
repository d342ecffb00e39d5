use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use chocolate_factory::ChocolateFactory;

mod cli;

use cli::{Args, INSTANCE_LABEL, STATIC_METHOD_LABEL};

fn main() -> miette::Result<()> {
    let args = Args::parse();
    let format = args.format();
    miette::set_hook(format.into_error_hook())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut stdout = std::io::stdout().lock();

    tracing::debug!(built = ChocolateFactory::is_built(), "requesting the factory");
    let factory = ChocolateFactory::get_instance()?;
    format
        .write_line(&mut stdout, INSTANCE_LABEL, factory)
        .into_diagnostic()?;

    format
        .write_line(
            &mut stdout,
            STATIC_METHOD_LABEL,
            ChocolateFactory::get_instance()?,
        )
        .into_diagnostic()?;
    tracing::debug!(
        constructions = ChocolateFactory::constructions(),
        "factory requested twice"
    );

    Ok(())
}
