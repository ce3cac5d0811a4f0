use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Datastore filename used when neither the command line nor the config file
/// names one. Resolved relative to the working directory.
pub const DEFAULT_STORE_FILENAME: &str = "fossAdditionalAttributes.csv";

/// Directory the report lands in when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "target";

/// Filename of the exported report inside the output directory.
pub const REPORT_FILENAME: &str = "dependency-report.csv";

/// Maintain a supplemental FOSS attribute datastore and export combined
/// dependency reports
#[derive(Parser, Debug)]
#[command(name = "dep-report")]
#[command(version)]
#[command(
    about = "Augment a component inventory with supplemental FOSS attributes kept in a CSV datastore",
    long_about = None
)]
pub struct Cli {
    /// Path of the datastore file (overrides the config file)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the datastore from a datafile, replacing any existing data
    Create {
        /// Path of the datafile to load (heading row plus one row per component)
        #[arg(short, long)]
        datafile: PathBuf,
    },

    /// Merge a datafile into the existing datastore
    Update {
        /// Path of the datafile to merge; its headings must match the datastore
        #[arg(short, long)]
        datafile: PathBuf,

        /// Overwrite attributes of components already in the datastore
        /// (without this flag existing components keep their current values)
        #[arg(long = "override")]
        override_existing: bool,
    },

    /// Delete the datastore file and forget all stored attributes
    Clear,

    /// Export the combined dependency report for a component inventory
    Export {
        /// Path of the component inventory file (column 0 = component identifier)
        #[arg(short, long)]
        inventory: PathBuf,

        /// Directory the report file is written to (default: target)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the report to the console
        #[arg(long)]
        console: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from(["dep-report", "create", "--datafile", "attrs.csv"]).unwrap();
        match cli.command {
            Command::Create { datafile } => assert_eq!(datafile, PathBuf::from("attrs.csv")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_create_requires_datafile() {
        let result = Cli::try_parse_from(["dep-report", "create"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_update_defaults_to_no_override() {
        let cli = Cli::try_parse_from(["dep-report", "update", "-d", "attrs.csv"]).unwrap();
        match cli.command {
            Command::Update {
                override_existing, ..
            } => assert!(!override_existing),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_with_override() {
        let cli =
            Cli::try_parse_from(["dep-report", "update", "-d", "attrs.csv", "--override"]).unwrap();
        match cli.command {
            Command::Update {
                override_existing, ..
            } => assert!(override_existing),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["dep-report", "clear", "--store", "my.csv"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("my.csv")));
    }

    #[test]
    fn test_parse_store_defaults_to_none() {
        let cli = Cli::try_parse_from(["dep-report", "clear"]).unwrap();
        assert!(cli.store.is_none());
    }

    #[test]
    fn test_parse_export_output_optional() {
        let cli = Cli::try_parse_from(["dep-report", "export", "-i", "inventory.csv"]).unwrap();
        match cli.command {
            Command::Export {
                inventory,
                output,
                console,
            } => {
                assert_eq!(inventory, PathBuf::from("inventory.csv"));
                assert!(output.is_none());
                assert!(!console);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_with_output_dir_and_console() {
        let cli = Cli::try_parse_from([
            "dep-report",
            "export",
            "-i",
            "inventory.csv",
            "-o",
            "build/reports",
            "--console",
        ])
        .unwrap();
        match cli.command {
            Command::Export {
                output, console, ..
            } => {
                assert_eq!(output, Some(PathBuf::from("build/reports")));
                assert!(console);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_subcommand_fails() {
        let result = Cli::try_parse_from(["dep-report", "frobnicate"]);
        assert!(result.is_err());
    }
}
