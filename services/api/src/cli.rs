use crate::demo::{run_demo, run_policy_generate, DemoArgs, PolicyGenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use policy_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Governance Policy Service",
    about = "Generate and serve AI governance policy documents from the command line",
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
    /// Work with policy documents directly from the terminal
    Policy {
        #[command(subcommand)]
        command: PolicyCommand,
    },
    /// Run an end-to-end CLI demo covering generation, storage, and retrieval
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PolicyCommand {
    /// Generate a policy from questionnaire answers supplied as flags
    Generate(PolicyGenerateArgs),
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
        Command::Policy {
            command: PolicyCommand::Generate(args),
        } => run_policy_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}
