use crate::report::{run_assessment, run_conditions, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use healthsync::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HealthSync",
    about = "Run the HealthSync assessment service or evaluate a questionnaire from the command line",
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
    /// Assess questionnaire answers and print the report without storing it
    Assess(AssessArgs),
    /// Print the chronic disease reference catalog
    Conditions,
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
        Command::Assess(args) => run_assessment(args),
        Command::Conditions => {
            run_conditions();
            Ok(())
        }
    }
}
