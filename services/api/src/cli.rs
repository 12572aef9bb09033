use crate::generate::{run_generate, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fantasy_salary::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fantasy Salary Service",
    about = "Generate performance-based fantasy cricket salaries from match scorecards",
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
    /// Salary generation utilities
    Salary {
        #[command(subcommand)]
        command: SalaryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SalaryCommand {
    /// Run the scorecard pipeline once and print the resulting salaries
    Generate(GenerateArgs),
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
        Command::Salary {
            command: SalaryCommand::Generate(args),
        } => run_generate(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["fantasy-salary-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_requires_a_source() {
        assert!(Cli::try_parse_from(["fantasy-salary-api", "salary", "generate"]).is_err());
        assert!(Cli::try_parse_from([
            "fantasy-salary-api",
            "salary",
            "generate",
            "--match-url",
            "https://www.espncricinfo.com/m",
            "--html-file",
            "page.html",
        ])
        .is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["fantasy-salary-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8080)),
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
