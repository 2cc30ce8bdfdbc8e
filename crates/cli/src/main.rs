// Roster CLI - headless check-in sheet preparation

mod config;
mod edit;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use roster_engine::{find_duplicates, ingest, reconcile, remove, stats, Cell, Record};

use config::SheetConfig;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "meibo")]
#[command(about = "Turn a messy reservation roster into a printable check-in sheet")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grouped check-in sheet for a roster file
    #[command(after_help = "\
Examples:
  meibo sheet reservations.csv
  meibo sheet reservations.xlsx --config sheet.toml
  meibo sheet reservations.csv --ids
  meibo sheet reservations.csv --edit 'row-0-4f2 reading=たなか'
  meibo sheet reservations.csv --edit 'row-3-9ab reading=すずき,count=2' --delete row-7-c01")]
    Sheet {
        /// Input roster (.csv, .tsv, .xlsx, .xls, .xlsb, .ods)
        input: PathBuf,

        /// Sheet settings (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Apply an edit before rendering: 'ID field=value[,field=value]'
        /// with fields name, reading, count. Repeatable, applied in order.
        #[arg(long, value_name = "EDIT")]
        edit: Vec<String>,

        /// Delete a record by id before rendering. Repeatable.
        #[arg(long, value_name = "ID")]
        delete: Vec<String>,

        /// Show record ids (targets for --edit / --delete)
        #[arg(long)]
        ids: bool,
    },

    /// Export the normalized roster
    #[command(after_help = "\
Examples:
  meibo export reservations.csv -o roster.csv
  meibo export reservations.xlsx -o roster.xlsx
  meibo export reservations.csv --edit 'row-0-4f2 reading=たなか' -o roster.csv")]
    Export {
        /// Input roster (.csv, .tsv, .xlsx, .xls, .xlsb, .ods)
        input: PathBuf,

        /// Output file (.csv or .xlsx)
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Apply an edit before exporting. Repeatable, applied in order.
        #[arg(long, value_name = "EDIT")]
        edit: Vec<String>,
    },

    /// Report registrations sharing a display name
    Duplicates {
        /// Input roster
        input: PathBuf,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Group and attendee totals
    Stats {
        /// Input roster
        input: PathBuf,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug)]
enum CliError {
    Usage(String),
    Failed(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_USAGE)
        }
        Err(CliError::Failed(msg)) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Sheet {
            input,
            config,
            edit,
            delete,
            ids,
        } => {
            let config = load_config(config.as_deref())?;
            let records = load_records(&input, &edit, &delete)?;
            print!("{}", render::sheet(&records, &config, ids));
            Ok(())
        }
        Commands::Export {
            input,
            output,
            edit,
        } => {
            let records = load_records(&input, &edit, &[])?;
            let ext = extension(&output);
            match ext.as_str() {
                "csv" => roster_io::export::write_csv(&records, &output),
                "xlsx" => roster_io::export::write_xlsx(&records, &output),
                other => {
                    return Err(CliError::Usage(format!(
                        "unsupported export format: .{other} (expected .csv or .xlsx)"
                    )))
                }
            }
            .map_err(|e| CliError::Failed(e.to_string()))?;
            eprintln!("exported {} records to {}", records.len(), output.display());
            Ok(())
        }
        Commands::Duplicates { input, json } => {
            let records = load_records(&input, &[], &[])?;
            let groups = find_duplicates(&records);
            if json {
                let out = serde_json::to_string_pretty(&groups)
                    .map_err(|e| CliError::Failed(e.to_string()))?;
                println!("{out}");
            } else if groups.is_empty() {
                println!("重複はありません");
            } else {
                println!("重複している名前 ({}件)", groups.len());
                for group in &groups {
                    println!(
                        "\n{}  合計 {}名 / {}件",
                        group.display_name,
                        group.total_count,
                        group.members.len()
                    );
                    for member in &group.members {
                        println!("  {}名  [{}]", member.count, member.id);
                    }
                }
            }
            Ok(())
        }
        Commands::Stats { input, json } => {
            let records = load_records(&input, &[], &[])?;
            let totals = stats(&records);
            if json {
                let out = serde_json::to_string_pretty(&totals)
                    .map_err(|e| CliError::Failed(e.to_string()))?;
                println!("{out}");
            } else {
                println!("登録グループ数: {}組", totals.groups);
                println!("参加者合計: {}名", totals.attendees);
            }
            Ok(())
        }
    }
}

/// Load, ingest, then apply edits and deletions in argument order.
fn load_records(
    input: &Path,
    edits: &[String],
    deletions: &[String],
) -> Result<Vec<Record>, CliError> {
    let rows = load_rows(input)?;
    let mut records = ingest(&rows);

    for spec in edits {
        let (id, update) = edit::parse_edit(spec).map_err(CliError::Usage)?;
        if !records.iter().any(|r| r.id == id) {
            eprintln!("warning: no record with id '{id}', edit skipped");
        }
        records = reconcile(records, &id, &update);
    }

    for id in deletions {
        if !records.iter().any(|r| r.id == *id) {
            eprintln!("warning: no record with id '{id}', delete skipped");
        }
        records = remove(records, id);
    }

    Ok(records)
}

fn load_rows(path: &Path) -> Result<Vec<Vec<Cell>>, CliError> {
    let rows = match extension(path).as_str() {
        "csv" | "tsv" | "txt" => roster_io::csv::load(path),
        "xlsx" | "xls" | "xlsb" | "ods" => roster_io::xlsx::load(path),
        other => {
            return Err(CliError::Usage(format!(
                "unsupported input format: .{other}"
            )))
        }
    };
    rows.map_err(|e| CliError::Failed(e.to_string()))
}

fn load_config(path: Option<&Path>) -> Result<SheetConfig, CliError> {
    match path {
        None => Ok(SheetConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                CliError::Failed(format!("cannot read {}: {e}", path.display()))
            })?;
            SheetConfig::from_toml(&text)
                .map_err(|e| CliError::Failed(format!("{}: {e}", path.display())))
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
