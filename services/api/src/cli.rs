use crate::server;
use crate::template::{run_template, TemplateArgs};
use clap::{Args, Parser, Subcommand};
use ecomap::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Ecosystem Mapping Portal",
    about = "Serve and administer the startup directory from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate the bulk-upload Excel template
    Template(TemplateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Template(args) => run_template(args),
    }
}
