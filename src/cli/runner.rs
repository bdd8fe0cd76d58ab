//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ExportConfig;
use crate::error::{Error, Result, ResultExt};
use crate::loader::load_records;
use crate::output::{ExportReport, Exporter};
use crate::record::FieldSpec;
use crate::types::OutputFormat;
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Export {
                input,
                output_dir,
                fields,
                formats,
            } => self.export(input, output_dir.as_ref(), fields.as_deref(), formats),
            Commands::Formats => {
                self.list_formats();
                Ok(())
            }
        }
    }

    /// Load the config file, if any, then apply command-line overrides
    fn build_config(
        &self,
        output_dir: Option<&PathBuf>,
        fields: Option<&str>,
        formats: &[OutputFormat],
    ) -> Result<ExportConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExportConfig::from_file(path)?,
            None => ExportConfig::default(),
        };

        if let Some(dir) = output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if let Some(list) = fields {
            config = config.with_fields(FieldSpec::parse(list));
        }
        if !formats.is_empty() {
            config = config.with_formats(formats.to_vec());
        }

        config.validate()?;
        Ok(config)
    }

    fn export(
        &self,
        input: &Path,
        output_dir: Option<&PathBuf>,
        fields: Option<&str>,
        formats: &[OutputFormat],
    ) -> Result<()> {
        let config = self.build_config(output_dir, fields, formats)?;
        let records = load_records(input).context("Failed to load input")?;

        tracing::info!(
            input = %input.display(),
            records = records.len(),
            output_dir = %config.output_dir.display(),
            "exporting"
        );

        let exporter = Exporter::new(config.output_dir.clone());
        let reports = exporter.export_all(&config.encoders(), &records);
        print_reports(&reports);

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 {
            return Err(Error::Other(format!(
                "{failed} of {} formats failed",
                reports.len()
            )));
        }
        Ok(())
    }

    fn list_formats(&self) {
        for format in OutputFormat::ALL {
            println!("{:<16} {}", format.name(), format.default_file_name());
        }
    }
}

fn print_reports(reports: &[ExportReport]) {
    for report in reports {
        match &report.result {
            Ok(bytes) => println!(
                "{:<16} {} ({bytes} bytes)",
                report.format.name(),
                report.path.display()
            ),
            Err(e) => println!("{:<16} failed: {e}", report.format.name()),
        }
    }
}
