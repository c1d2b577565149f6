use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};
use ride_club::Category;

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ride-club` binary.
#[derive(Parser, Debug)]
#[command(
    name = "ride-club",
    version,
    long_version = long_version(),
    about = "Look up Ride Club pickup and drop-off locations",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "RIDE_CLUB_CONFIG",
        action = ArgAction::Append,
        global = true,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        global = true,
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help = "Load locations from a TOML catalog instead of the built-in one"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        global = true,
        help = "Diagnostic log filter, e.g. debug (default: warn, or RIDE_CLUB_LOG)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        global = true,
        help = "Print the resolved configuration to stderr before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        global = true,
        help = "Choose how to print results (default: plain)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Lookups offered by the binary.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Rank locations matching a free-text query (at most 8)
    Search {
        /// Query words; joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,
    },
    /// List every location of one category in catalog order
    Category {
        /// city, airport, transit, mall or university
        #[arg(value_name = "CATEGORY")]
        category: Category,
    },
    /// List every location of one province or territory in catalog order
    Region {
        /// Region code such as ON or QC
        #[arg(value_name = "REGION")]
        region: String,
    },
    /// Show a single location by id
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List the location categories with their sizes
    Categories,
    /// Read queries from stdin, one per line, and print suggestions for each
    Interactive,
}
