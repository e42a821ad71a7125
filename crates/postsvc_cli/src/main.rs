//! Prints one post as JSON.
//!
//! Passing `--log-dir` (or `POSTSVC_LOG_DIR`) turns on file logging.

use clap::Parser;
use log::LevelFilter;
use postsvc_core::{default_log_level, init_logging, PostService};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "postsvc", version, about = "Look up a post by id")]
struct Cli {
    /// Post identifier; any string is accepted.
    #[arg(default_value = "1")]
    id: String,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "POSTSVC_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error|off
    #[arg(long, env = "POSTSVC_LOG_LEVEL")]
    log_level: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.unwrap_or_else(default_log_level);
        if let Err(err) = init_logging(level, dir) {
            eprintln!("postsvc: logging disabled: {err}");
        }
    }

    let post = PostService::new().get_post(&cli.id);
    match serde_json::to_string(&post) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("postsvc: failed to encode post: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use log::LevelFilter;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn id_defaults_to_one() {
        let cli = Cli::try_parse_from(["postsvc"]).unwrap();
        assert_eq!(cli.id, "1");
    }

    #[test]
    fn empty_id_and_log_flags_parse() {
        let cli = Cli::try_parse_from([
            "postsvc",
            "",
            "--log-dir",
            "/var/log/postsvc",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.id, "");
        assert_eq!(cli.log_level, Some(LevelFilter::Warn));
        assert_eq!(cli.log_dir.unwrap().to_str(), Some("/var/log/postsvc"));
    }

    #[test]
    fn unknown_level_is_a_usage_error() {
        assert!(Cli::try_parse_from(["postsvc", "--log-level", "loud"]).is_err());
    }
}
