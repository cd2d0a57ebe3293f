use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Miller Columns - render folder columns the way a column browser shows them
#[derive(Parser, Debug)]
#[command(name = "miller-columns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "MILLER_COLUMNS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the column for a folder
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Vault-relative folder path
    #[arg(default_value = "/")]
    pub path: String,

    /// Directory used as the vault root
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Render every column from the vault root down to PATH
    #[arg(short, long)]
    pub trail: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Use icon names instead of symbols
    #[arg(long)]
    pub ascii: bool,

    /// Show each item's vault path
    #[arg(long)]
    pub paths: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show_defaults() {
        let cli = Cli::parse_from(["miller-columns", "show"]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.path, "/");
                assert_eq!(args.root, PathBuf::from("."));
                assert!(!args.trail);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parse_show_with_options() {
        let cli = Cli::parse_from([
            "miller-columns",
            "show",
            "--root",
            "/vault",
            "--trail",
            "--ascii",
            "notes/daily",
        ]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.path, "notes/daily");
                assert_eq!(args.root, PathBuf::from("/vault"));
                assert!(args.trail);
                assert!(args.ascii);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["miller-columns", "-vvv", "show"]);
        assert_eq!(cli.verbose, 3);
    }
}
