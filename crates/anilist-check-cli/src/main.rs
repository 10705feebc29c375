use clap::{ArgAction, Parser, Subcommand};
use commands::{check, config, lists};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "anilist-check")]
#[command(about = "Check whether an AniList user is watching, has paused or plans to watch a show")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Config file (defaults to $ANILIST_CHECK_CONFIG or the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file, rotated daily
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check by show title
    #[command(long_about = "Check whether the user tracks a show by title. Titles are compared against every localized variant with whitespace and punctuation ignored. If AniList cannot be reached the answer is 'tracking'.")]
    Name {
        /// Show title, any punctuation or spacing
        show_name: String,

        /// AniList user name (defaults to default_user from the config)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Check by AniList media id
    #[command(long_about = "Check whether the user tracks a show by AniList media id. An id that is not an integer answers 'not tracking' without contacting AniList.")]
    Id {
        /// AniList media id
        show_id: String,

        /// AniList user name (defaults to default_user from the config)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show the user's watching, paused and planning lists
    Lists {
        /// AniList user name (defaults to default_user from the config)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

/// Tracking → 0, not tracking → 1, usage or config problems → 2
fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("{}", e);
    }

    let cli = Cli::parse();
    let output = output::Output::new(cli.output, cli.quiet);

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone()) {
        output.error(format!("Failed to initialize logging: {}", e));
        return ExitCode::from(2);
    }

    match run(cli, &output) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            output.error(format!("{:?}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, output: &output::Output) -> color_eyre::Result<bool> {
    let config_file = commands::config_path(cli.config);
    debug!(config_file = %config_file.display(), "Resolved configuration path");

    match cli.command {
        Commands::Name { show_name, user } => {
            debug!(show_name = %show_name, "Running name check");
            let config = commands::load_config(&config_file)?;
            let user = commands::resolve_user(user, &config)?;
            Ok(check::run_check_name(&config, &user, &show_name, output))
        }
        Commands::Id { show_id, user } => {
            debug!(show_id = %show_id, "Running id check");
            let config = commands::load_config(&config_file)?;
            let user = commands::resolve_user(user, &config)?;
            Ok(check::run_check_id(&config, &user, &show_id, output))
        }
        Commands::Lists { user } => {
            debug!("Fetching lists");
            let config = commands::load_config(&config_file)?;
            let user = commands::resolve_user(user, &config)?;
            lists::run_lists(&config, &user, output)?;
            Ok(true)
        }
        Commands::Config { cmd } => {
            config::run_config(cmd, config_file, output)?;
            Ok(true)
        }
    }
}
