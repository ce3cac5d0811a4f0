use std::path::{Path, PathBuf};
use std::process;

use dep_report::adapters::outbound::filesystem::{CsvCodec, FileSystemWriter, StdoutPresenter};
use dep_report::cli::{Cli, Command, DEFAULT_OUTPUT_DIR, DEFAULT_STORE_FILENAME, REPORT_FILENAME};
use dep_report::config;
use dep_report::datastore::AttributeStore;
use dep_report::ports::outbound::OutputPresenter;
use dep_report::report::{Inventory, ReportExporter};
use dep_report::shared::error::{DatastoreError, ExitCode};
use dep_report::shared::Result;

fn main() {
    let args = Cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Cli) -> Result<()> {
    let config = config::discover_config(Path::new("."))?.unwrap_or_default();

    let store_path = args
        .store
        .or_else(|| config.store.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILENAME));
    eprintln!("Datastore located at {}", store_path.display());

    let mut store = AttributeStore::open(CsvCodec::new(), store_path)?;

    match args.command {
        Command::Create { datafile } => {
            ensure_file_exists(&datafile)?;
            store.create(&datafile)?;
            eprintln!("✅ Datastore created from {}", datafile.display());
        }

        Command::Update {
            datafile,
            override_existing,
        } => {
            ensure_file_exists(&datafile)?;
            store.update(&datafile, override_existing)?;
            eprintln!("✅ Datastore updated from {}", datafile.display());
        }

        Command::Clear => {
            if store.clear()? {
                eprintln!("✅ Datastore cleared");
            } else {
                eprintln!("Datastore was already empty");
            }
        }

        Command::Export {
            inventory,
            output,
            console,
        } => {
            ensure_file_exists(&inventory)?;
            let inventory = Inventory::load(&CsvCodec::new(), &inventory)?;
            let rows = ReportExporter::combine(&inventory, &store);
            let content = CsvCodec::encode(&rows);

            if console || config.console.unwrap_or(false) {
                StdoutPresenter::new().present(&content)?;
            }

            let output_dir = output
                .or_else(|| config.output.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
            FileSystemWriter::new(output_dir.join(REPORT_FILENAME)).present(&content)?;
        }
    }

    Ok(())
}

/// Caller-side argument validation: operations only act on a path that is
/// known to exist, mirroring the distinct "cannot be located" failure.
fn ensure_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DatastoreError::DatafileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
