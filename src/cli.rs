use std::io::Write;

use chocolate_factory::ChocolateFactory;

pub const INSTANCE_LABEL: &str = "Instance reference";
pub const STATIC_METHOD_LABEL: &str = "Static method reference";

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum Format {
    #[default]
    Long,
    Json,
}

#[derive(serde::Serialize)]
struct Line<'a> {
    label: &'a str,
    instance: String,
}

impl Format {
    pub fn into_error_hook(self) -> miette::ErrorHook {
        match self {
            Self::Long => Box::new(|_| Box::new(miette::GraphicalReportHandler::new())),
            Self::Json => Box::new(|_| Box::new(miette::JSONReportHandler::new())),
        }
    }

    /// Writes one labelled reference to the factory, followed by a newline
    pub fn write_line(
        self,
        mut out: impl Write,
        label: &str,
        factory: &ChocolateFactory,
    ) -> std::io::Result<()> {
        match self {
            Self::Long => writeln!(out, "{label}: {factory}"),
            Self::Json => {
                let line = Line {
                    label,
                    instance: factory.to_string(),
                };
                serde_json::to_writer(&mut out, &line)?;
                writeln!(out)
            }
        }
    }
}

#[derive(clap::Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// Render style for the references and errors
    #[arg(long, value_enum, ignore_case = true, default_value("long"))]
    format: Format,
}

impl Args {
    pub fn format(&self) -> Format {
        self.format
    }
}
