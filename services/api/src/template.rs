use clap::Args;
use ecomap::directory::{build_template, TemplateOptions};
use ecomap::error::AppError;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct TemplateArgs {
    /// Where to write the generated workbook
    #[arg(long, default_value = "Startup_Template.xlsx")]
    pub(crate) output: PathBuf,
}

/// Write the bulk-upload template to disk with the static option lists.
pub(crate) fn run_template(args: TemplateArgs) -> Result<(), AppError> {
    let bytes = build_template(&TemplateOptions::default())?;
    std::fs::write(&args.output, &bytes)?;
    info!(path = %args.output.display(), size = bytes.len(), "template written");
    println!("Template written to {}", args.output.display());
    Ok(())
}
