//! Report the tilt of one or more selections of a system relative to the z-axis, for every
//! frame of a trajectory.
use std::ffi::OsString;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use protein_tilt::backend::{ChemfilesSystem, ChemfilesTrajectory};
use protein_tilt::logging::setup_logging;
use protein_tilt::{tilt, RecordWriter, Result, StructureSource};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

/// Print the tilt of the summed principal axes of the selections, frame by frame.
#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// System path, providing the topology the selections are evaluated against.
    #[arg(allow_hyphen_values = true)]
    system: PathBuf,

    /// Trajectory path.
    #[arg(allow_hyphen_values = true)]
    trajectory: PathBuf,

    /// Selections in the chemfiles selection language, such as `resid <= 24`.
    ///
    /// The orientation vector of each selection is assumed to point in the +z direction.
    #[arg(required = true, allow_hyphen_values = true)]
    selections: Vec<String>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} system trajectory selection1 [selection2...]\n       \
         Prints the average of the orientation vectors of the\n       \
         individual selections, assuming each individual vector\n       \
         points in the +z direction"
    )
}

fn wants_usage(argv: &[OsString]) -> bool {
    argv.len() < 4 || argv[1] == "-h" || argv[1] == "--help"
}

fn main() -> ExitCode {
    // Paths need not be valid unicode, so the arguments are taken as they are.
    let argv: Vec<OsString> = std::env::args_os().collect();
    run(argv)
}

fn run(argv: Vec<OsString>) -> ExitCode {
    let command_line: Vec<String> = argv
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = command_line.first().map_or("protein-tilt", String::as_str);
    if wants_usage(&argv) {
        println!("{}", usage(program));
        return ExitCode::SUCCESS;
    }
    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(_) => {
            println!("{}", usage(program));
            return ExitCode::SUCCESS;
        }
    };

    if let Err(err) = setup_logging(LevelFilter::WARN) {
        eprintln!("{err}");
    }

    let stdout = std::io::stdout().lock();
    let mut records = RecordWriter::new(BufWriter::new(stdout));
    match tilt_trajectory(&command_line, &args, &mut records) {
        Ok(nframes) => {
            info!(nframes, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Whatever was written so far should still end up in the output.
            let _ = records.flush();
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn tilt_trajectory<W: std::io::Write>(
    command_line: &[String],
    args: &Args,
    records: &mut RecordWriter<W>,
) -> Result<usize> {
    records.write_command_line(command_line)?;

    let system = ChemfilesSystem::open(&args.system)?;
    let mut trajectory = ChemfilesTrajectory::open(&args.trajectory, &system)?;
    let selections = system.select_all(&args.selections)?;

    records.write_header()?;
    let nframes = tilt::run(&mut trajectory, &selections, records)?;
    records.flush()?;
    Ok(nframes)
}
