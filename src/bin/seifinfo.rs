//! Print the header and chunk table of a SEIF file, then decode it.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, info};
use zenseif::{DecodeRequest, ImageInfo, Limits, Unstoppable};

fn create_cmd_args() -> Command {
    Command::new("seifinfo")
        .about("Inspect and decode a SEIF image")
        .arg(
            Arg::new("file")
                .help("SEIF file to read")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only report errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log parser diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-pixels")
                .long("max-pixels")
                .help("Refuse images with more pixels than this")
                .value_parser(value_parser!(u64)),
        )
}

fn setup_logger(args: &ArgMatches) {
    let level = if args.get_flag("debug") {
        Level::Trace
    } else {
        Level::Warn
    };
    // Only fails if a logger is already installed.
    let _ = simple_logger::init_with_level(level);
}

fn run(args: &ArgMatches) -> Result<(), String> {
    let Some(path) = args.get_one::<PathBuf>("file") else {
        return Err("missing input file".into());
    };
    let limits = Limits {
        max_pixels: args.get_one::<u64>("max-pixels").copied(),
        ..Default::default()
    };

    let data =
        std::fs::read(path).map_err(|e| format!("could not open {}: {e}", path.display()))?;
    info!("read {} bytes from {}", data.len(), path.display());

    let stdout = io::stdout();
    inspect(&data, &limits, args.get_flag("quiet"), &mut stdout.lock())
}

/// Print what the header and chunk table say, then decode.
///
/// The listing is diagnostics only: the decode result decides success, so a
/// multi-chunk file is still reported as such when its chunk table is cut short.
fn inspect(data: &[u8], limits: &Limits, quiet: bool, out: &mut impl Write) -> Result<(), String> {
    let write_err = |e: io::Error| format!("could not write report: {e}");

    let probed = ImageInfo::from_bytes(data).map_err(|e| e.to_string())?;
    if !quiet {
        writeln!(out, "{probed}").map_err(write_err)?;
    }

    let images = DecodeRequest::new(data)
        .with_limits(limits)
        .decode(Unstoppable)
        .map_err(|e| e.to_string())?;
    if !quiet {
        for (index, image) in images.iter().enumerate() {
            writeln!(
                out,
                "decoded chunk {index}: {}x{} RGBA8, {} bytes",
                image.width,
                image.height,
                image.pixels().len()
            )
            .map_err(write_err)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = create_cmd_args().get_matches();
    setup_logger(&args);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
