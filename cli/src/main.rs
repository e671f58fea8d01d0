mod history;
mod stats;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use frontdesk_core::time::long_date;
use frontdesk_core::usecase::{report, transfer};
use frontdesk_core::{
    apply_args, init_logging, parse_day, today, Config, EntryFields, Error, FileLedgerRepository,
    FrontDesk, RoomStatus, Section, Verbosity,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(version, about = "Daily front-desk log: check-ins, stays and check-outs", long_about = None)]
struct Cli {
    /// Path to a custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the ledger (overrides the configuration)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show today's entries
    List,
    /// Add an entry (usage: add checkin 101 guest:"John Doe" pax:2 note:late)
    Add {
        /// checkin, staying or checkout
        #[arg(value_parser = parse_section)]
        section: Section,
        /// Room and fields as key:value (room, guest, pax, note)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Change fields of an entry, keeping the ones not given
    Edit {
        #[arg(value_parser = parse_section)]
        section: Section,
        /// Entry number as shown by `list`
        number: usize,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete an entry
    Rm {
        #[arg(value_parser = parse_section)]
        section: Section,
        /// Entry number as shown by `list`
        number: usize,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Check whether a room is free today
    Available { room: String },
    /// Occupancy and guest counts
    Stats {
        /// Open the chart dashboard
        #[arg(long)]
        chart: bool,
    },
    /// Show the entries of another day (YYYY-MM-DD, yesterday, -3d, ...)
    Day { date: String },
    /// Search every day for a room, guest or note
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Write the whole ledger to a backup file
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Replace the whole ledger with a backup file
    Import { file: PathBuf },
    /// Write today's plain-text report
    Report {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn parse_section(s: &str) -> Result<Section, String> {
    s.parse::<Section>().map_err(|e| e.to_string())
}

/// Exit status for mistakes in what was typed.
const EXIT_USER_ERROR: u8 = 1;
/// Exit status for storage, configuration and other environment failures.
const EXIT_FAILURE: u8 = 2;

fn to_index(number: usize) -> frontdesk_core::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| Error::validation("entry numbers start at 1"))
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_user_error() => EXIT_USER_ERROR,
        _ => EXIT_FAILURE,
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            // User mistakes get one line; anything else shows its causes.
            if code == EXIT_USER_ERROR {
                eprintln!("error: {}", err);
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_from(cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let repo = FileLedgerRepository::new(Some(config.data_dir()?))?;
    debug!(path = %repo.path().display(), "using ledger");

    let mut desk = FrontDesk::open(repo, today());

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            let title = format!("Today, {}", long_date(desk.today()));
            history::show_day(&title, desk.record());
        }
        Commands::Add { section, args } => {
            let fields = apply_args(EntryFields::default(), &args)?;
            let text = desk.add(section, &fields)?;
            println!("{} added: {}", section, text);
        }
        Commands::Edit {
            section,
            number,
            args,
        } => {
            let index = to_index(number)?;
            let fields = apply_args(desk.entry_fields(section, index)?, &args)?;
            let text = desk.update(section, index, &fields)?;
            println!("{} #{} updated: {}", section, number, text);
        }
        Commands::Rm {
            section,
            number,
            yes,
        } => {
            let index = to_index(number)?;
            let shown = desk.entry(section, index)?.to_string();
            if !yes && !confirm(&format!("Delete {} #{} ({})?", section, number, shown))? {
                println!("Nothing deleted.");
                return Ok(());
            }
            desk.remove(section, index)?;
            println!("Deleted {} #{}: {}", section, number, shown);
        }
        Commands::Available { room } => match desk.room_status(&room) {
            RoomStatus::Available => println!("Room {} is available.", room.trim().to_uppercase()),
            RoomStatus::Occupied => println!("Room {} is occupied.", room.trim().to_uppercase()),
        },
        Commands::Stats { chart } => {
            if chart {
                stats::run(&desk, &config.stats)?;
            } else {
                stats::print_summary(&desk, &config.stats);
            }
        }
        Commands::Day { date } => {
            let date = parse_day(&date, desk.today())?;
            match desk.day(date) {
                Some(record) => history::show_day(&format!("Records of {}", long_date(date)), record),
                None => println!("No records for {}.", long_date(date)),
            }
        }
        Commands::Search { query } => {
            let query = query.join(" ");
            let hits = desk.search(&query)?;
            history::show_search(&query, &hits);
        }
        Commands::Export { output } => {
            if desk.ledger().is_empty() {
                println!("No data to export.");
                return Ok(());
            }
            let path = output.unwrap_or_else(|| PathBuf::from(transfer::backup_file_name(desk.today())));
            fs::write(&path, desk.export_all()?)
                .with_context(|| format!("writing backup to {}", path.display()))?;
            println!("Backup written to {} ({} days).", path.display(), desk.ledger().len());
        }
        Commands::Import { file } => {
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let days = desk.import_all(&bytes)?;
            println!("Imported {} days from {}.", days, file.display());
        }
        Commands::Report { output } => {
            let text = report::render_report(&config.report.hotel_name, desk.today(), desk.record());
            let path = output.unwrap_or_else(|| PathBuf::from(report::report_file_name(desk.today())));
            fs::write(&path, text).with_context(|| format!("writing report to {}", path.display()))?;
            println!("Report written to {}.", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_fields() {
        let cli = Cli::try_parse_from([
            "frontdesk", "add", "checkin", "101", "guest:John Doe", "pax:2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { section, args }) => {
                assert_eq!(section, Section::Checkin);
                assert_eq!(args, vec!["101", "guest:John Doe", "pax:2"]);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_rm_with_global_flags() {
        let cli = Cli::try_parse_from([
            "frontdesk", "rm", "out", "2", "--yes", "-vv", "--data-dir", "/tmp/desk",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/desk")));
        assert!(matches!(
            cli.command,
            Some(Commands::Rm { section: Section::Checkout, number: 2, yes: true })
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(Cli::try_parse_from(["frontdesk", "add", "lobby", "1"]).is_err());
    }

    #[test]
    fn test_entry_numbers_are_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert!(matches!(to_index(0), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_exit_code_separates_user_errors() {
        let user: anyhow::Error = Error::DuplicateRoom { room: "101".into() }.into();
        assert_eq!(exit_code(&user), EXIT_USER_ERROR);

        let storage: anyhow::Error = Error::StorageUnavailable {
            path: PathBuf::from("/srv/desk/ledger.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(exit_code(&storage), EXIT_FAILURE);

        let io_err = anyhow::Error::new(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .context("reading backup.json");
        assert_eq!(exit_code(&io_err), EXIT_FAILURE);
    }
}
