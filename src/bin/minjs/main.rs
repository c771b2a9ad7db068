use std::path::Path;
use clap::{Arg, ArgMatches, Command};
use clap::error::ErrorKind as ClapErrorKind;
use std::process::exit;
use log::{debug, LevelFilter};
use env_logger::Builder;
use core::str::FromStr;
use minjs::errors::ErrorKind as LibErrorKind;
use minjs::{OxcMinifier, MINIFY_OPTIONS};

mod errors;

use crate::errors::*;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Main for minjs binary - call `run()` and report any error that results, exit 1 on error
pub fn main() {
    let matches = match get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("{}", Error::from(ErrorKind::Usage(PROGRAM.into())));
            exit(1);
        }
    };

    let default = String::from("error");
    let verbosity = matches.get_one::<String>("verbosity").unwrap_or(&default);
    let level = LevelFilter::from_str(verbosity).unwrap_or(LevelFilter::Error);
    let mut builder = Builder::from_default_env();
    builder.filter_level(level).init();

    let input = matches.get_one::<String>("input-file").cloned().unwrap_or_default();

    match run(&matches) {
        Err(ref e) => {
            report(e, &input);
            exit(1);
        }
        Ok(_) => exit(0),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (input, output) = match (path_arg(matches, "input-file"), path_arg(matches, "output-file")) {
        (Some(input), Some(output)) => (input, output),
        _ => bail!(ErrorKind::Usage(PROGRAM.into())),
    };

    let summary = minjs::minify_file(&OxcMinifier, Path::new(input), Path::new(output),
                                     &MINIFY_OPTIONS)?;
    debug!("Saved {} bytes", summary.bytes_saved());
    println!("✓ Minified: {input} -> {output}");

    Ok(())
}

fn path_arg<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name)
        .map(String::as_str)
        .filter(|path| !path.is_empty())
}

// Translate the error taxonomy into the message users see on stderr
fn diagnostic(e: &Error, input: &str) -> String {
    match e.kind() {
        ErrorKind::Usage(_) => e.to_string(),
        ErrorKind::Lib(LibErrorKind::Transform(diagnostic)) => {
            format!("Error minifying {input}: {diagnostic}")
        }
        ErrorKind::Lib(LibErrorKind::Read(_)
                       | LibErrorKind::Write(_)
                       | LibErrorKind::Io(_)
                       | LibErrorKind::MinifierPanicked(_)) => {
            format!("Error processing {input}: {}", root_cause(e))
        }
        _ => {
            let cause = root_cause(e);
            if cause == e.to_string() {
                format!("Fatal error: {e}")
            } else {
                format!("Fatal error: {e}: {cause}")
            }
        }
    }
}

fn root_cause(e: &Error) -> String {
    e.iter().last().map(|cause| cause.to_string()).unwrap_or_else(|| e.to_string())
}

fn report(e: &Error, input: &str) {
    eprintln!("{}", diagnostic(e, input));

    for e in e.iter().skip(1) {
        debug!("caused by: {e}");
    }

    // The backtrace is generated if env var `RUST_BACKTRACE` is set to `1` or `full`
    if let Some(backtrace) = e.backtrace() {
        eprintln!("backtrace: {backtrace:?}");
    }
}

// Parse the command line arguments using clap
fn get_matches() -> std::result::Result<ArgMatches, clap::Error> {
    let app = Command::new(PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::new("verbosity")
            .short('v')
            .long("verbosity")
            .num_args(1)
            .value_name("VERBOSITY_LEVEL")
            .help("Set verbosity level for output (trace, debug, info, warn, default: error)"))
        .arg(Arg::new("input-file")
            .index(1)
            .num_args(1)
            .help("the file path of the JavaScript file to minify"))
        .arg(Arg::new("output-file")
            .index(2)
            .num_args(1)
            .help("the file path to write the minified JavaScript to"));

    app.try_get_matches()
}
