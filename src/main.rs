use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use pr_github::{EnvCredentialResolver, PullRequestSpec, RepositoryCoordinates};
use pr_submit::commands::validators;
use pr_submit::config::{ClientSettings, Config};
use pr_submit::github::Submission;
use pr_submit::utils::{exit_codes, filesystem};
use pr_submit::{commands::*, constants};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pr-submit")]
#[command(about = "Create GitHub pull requests from plain data")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit pull requests defined in the configuration file
    Submit {
        /// Names of the pull requests to submit (if not provided, submits all)
        names: Vec<String>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,

        /// Submit pull requests concurrently
        #[arg(short, long)]
        parallel: bool,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Submit a single pull request described on the command line
    Create {
        /// Target repository as owner/repo or a GitHub URL
        #[arg(long)]
        repository: String,

        /// Title for the pull request
        #[arg(long)]
        title: String,

        /// Branch containing the changes
        #[arg(long)]
        head: String,

        /// Branch to merge into
        #[arg(long, default_value_t = constants::git::DEFAULT_BASE_BRANCH.to_string())]
        base: String,

        /// Body text for the pull request
        #[arg(long)]
        body: Option<String>,

        /// File containing the body text
        #[arg(long)]
        body_file: Option<String>,

        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Args)]
struct ApiArgs {
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// GitHub API root (e.g. for GitHub Enterprise)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match execute_command(cli.command).await {
        Ok(submissions) => exit_codes::exit_code_for_all(submissions.iter().map(|s| &s.result)),
        Err(e) => {
            let code = exit_codes::exit_code_for_error(&e);
            eprintln!(
                "{}",
                format!(
                    "Error: {e:#} ({})",
                    exit_codes::get_exit_code_description(code)
                )
                .red()
            );
            code
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(constants::config::VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_env(constants::config::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(constants::config::DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn execute_command(command: Commands) -> Result<Vec<Submission>> {
    match command {
        Commands::Submit {
            names,
            config,
            parallel,
            api,
        } => {
            let config = Config::load(&config)?;

            // Validate submit command arguments using centralized validators
            validators::validate_pull_request_names(&names)?;
            validators::validate_timeout(&api.timeout)?;
            validators::validate_api_url(&api.api_url)?;

            let settings =
                ClientSettings::from_config(&config).with_overrides(api.api_url, api.timeout);
            let context = build_context(&settings)?;

            SubmitCommand {
                config,
                names,
                parallel,
            }
            .execute(&context)
            .await
        }
        Commands::Create {
            repository,
            title,
            head,
            base,
            body,
            body_file,
            api,
        } => {
            // Validate create command arguments using centralized validators
            validators::validate_body_args(&body, &body_file)?;
            validators::validate_timeout(&api.timeout)?;
            validators::validate_api_url(&api.api_url)?;

            let body = match body_file {
                Some(path) => filesystem::read_body_file(&path, None)?,
                None => body.unwrap_or_default(),
            };
            let coords = RepositoryCoordinates::parse(&repository)?;
            let spec = PullRequestSpec::new(title, head, base, body)?;

            let settings = ClientSettings::default().with_overrides(api.api_url, api.timeout);
            let context = build_context(&settings)?;

            CreateCommand { coords, spec }.execute(&context).await
        }
    }
}

fn build_context(settings: &ClientSettings) -> Result<CommandContext> {
    Ok(CommandContext {
        client: settings.build_client()?,
        resolver: Arc::new(EnvCredentialResolver::new()),
    })
}
