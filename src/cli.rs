// Command-line inspector for DEO files.
//
// Flags mirror the classic inspector: `-i` input, `-l` log file, `-d`
// verbosity, and independent `--header` / `--directory` dump switches.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueHint};
use log::{LevelFilter, debug, error};

use crate::deo::DeoFile;
use crate::dump;
use crate::io::{IoError, parse_file};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Parse and dump DEO object containers.
#[derive(Parser, Debug)]
#[command(
    name = "deoparse",
    version,
    about = "Parse and dump DEO object containers",
    arg_required_else_help = true
)]
struct Cli {
    /// File to parse.
    #[arg(
        short = 'i',
        long,
        value_hint = ValueHint::FilePath,
        conflicts_with = "input_pos",
        required_unless_present = "input_pos"
    )]
    input: Option<PathBuf>,

    /// File to parse (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Write log lines to this file instead of stderr.
    #[arg(short = 'l', long = "log", value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,

    /// More verbose logging (-d for info, -dd for debug).
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    verbose: u8,

    /// Dump header contents to stdout.
    #[arg(long = "header")]
    dump_header: bool,

    /// Dump directory contents to stdout.
    #[arg(long = "directory")]
    dump_directory: bool,

    /// Emit dumps as a single JSON document.
    #[arg(long = "json")]
    json_output: bool,
}

// ---------------------------------------------------------------------------
// Resolved options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Options {
    input_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    verbose: u8,
    dump_header: bool,
    dump_directory: bool,
    json_output: bool,
}

fn resolve_options(cli: Cli) -> Options {
    Options {
        input_file: cli.input.or(cli.input_pos),
        log_file: cli.log_file,
        verbose: cli.verbose.min(2),
        dump_header: cli.dump_header,
        dump_directory: cli.dump_directory,
        json_output: cli.json_output,
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("deoparse".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_logging(opts: &Options) -> io::Result<()> {
    let default = level_filter(opts.verbose).as_str().to_ascii_lowercase();
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default));
    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}", buf.timestamp_seconds(), record.args())
    });

    if let Some(path) = &opts.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Dump
// ---------------------------------------------------------------------------

fn write_text<W: Write>(w: &mut W, file: &DeoFile, opts: &Options) -> io::Result<()> {
    if opts.dump_header {
        dump::write_header(w, &file.header)?;
    }
    if opts.dump_directory {
        dump::write_directory(w, &file.directory)?;
    }
    Ok(())
}

fn write_json<W: Write>(w: &mut W, file: &DeoFile, opts: &Options) -> io::Result<()> {
    let mut doc = serde_json::Map::new();
    if opts.dump_header {
        doc.insert("header".into(), dump::header_json(&file.header));
    }
    if opts.dump_directory {
        doc.insert("directory".into(), dump::directory_json(&file.directory));
    }
    serde_json::to_writer_pretty(&mut *w, &serde_json::Value::Object(doc))?;
    writeln!(w)
}

fn cmd_inspect(opts: &Options) -> i32 {
    let Some(path) = &opts.input_file else {
        error!("an input file is required");
        return 1;
    };

    let (file, stats) = match parse_file(path) {
        Ok(parsed) => parsed,
        Err(IoError::Decode(e)) => {
            error!("File is invalid type or malformed: {e}");
            return 1;
        }
        Err(IoError::Io(e)) => {
            error!("{}: {e}", path.display());
            return 1;
        }
    };
    debug!("{stats:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if opts.json_output {
        write_json(&mut out, &file, opts)
    } else {
        write_text(&mut out, &file, opts)
    };
    if let Err(e) = result.and_then(|()| out.flush()) {
        error!("failed to write dump: {e}");
        return 1;
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, decodes, dumps.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    if let Err(e) = init_logging(&opts) {
        let log = opts.log_file.as_deref().unwrap_or(std::path::Path::new("-"));
        eprintln!("deoparse: {}: {e}", log.display());
        process::exit(1);
    }

    process::exit(cmd_inspect(&opts));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
