use crate::demo::{run_completion_report, run_demo, CompletionReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nutricoach::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "NutriCoach Profile Service",
    about = "Run the profile completion service and tooling from the command line",
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
    /// Work with stored and exported profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Run an end-to-end CLI demo covering intake, scoring, and milestones
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Score a profile JSON export or a patient roster CSV
    Completion(CompletionReportArgs),
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
        Command::Profile {
            command: ProfileCommand::Completion(args),
        } => run_completion_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
