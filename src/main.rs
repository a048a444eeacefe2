mod selftest;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use ini::{Document, Group};
use thiserror::Error;

#[derive(Parser)]
#[command(version, about = "Parse an INI file and print what was read", long_about = None)]
struct Arguments {
    /// INI file to parse.
    path: Option<PathBuf>,

    /// Print only this section, or look up `--key` in it.
    #[arg(short, long)]
    section: Option<String>,

    /// Print only the value of this key.
    #[arg(short, long)]
    key: Option<String>,

    /// Run the built-in parse checks and exit.
    #[arg(long, alias = "test")]
    self_test: bool,

    /// Raise log verbosity; repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all logging.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("could not open {path:?}")]
    FileOpen { path: PathBuf, source: io::Error },
    #[error("failed to read input")]
    Read(#[from] ini::Error),
    #[error("self-test {name:?} failed")]
    SelfTest { name: &'static str },
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match *self {
            Self::Usage(_) => 1,
            Self::FileOpen { .. } => 2,
            Self::Read(_) => 3,
            Self::SelfTest { .. } => 4,
        }
    }

    fn report(&self) {
        match *self {
            // clap renders its own `error:` prefix and usage line.
            Self::Usage(ref err) => {
                _ = err.print();
            }
            Self::FileOpen { ref source, .. } => eprintln!("error: {self}: {source}"),
            Self::Read(ini::Error::Read { ref source }) => eprintln!("error: {self}: {source}"),
            _ => eprintln!("error: {self}"),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        // `--help` and `--version` also arrive as errors, but are not failures.
        Err(err) if !err.use_stderr() => {
            _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(usize::from(args.verbose))
        .init()
    {
        eprintln!("warning: failed to initialize logging: {err}");
    }

    if args.self_test {
        return selftest::run()
            .map(|_| ())
            .map_err(|name| CliError::SelfTest { name });
    }

    let Some(path) = args.path else {
        return Err(Arguments::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  <PATH>",
            )
            .into());
    };

    let file = open_file(&path)?;
    log::debug!("parsing {}", path.display());
    let document = Document::from_reader(file)?;

    print_document(&document, args.section.as_deref(), args.key.as_deref());
    Ok(())
}

/// Open `path` for parsing. A directory opens fine on some platforms but cannot be read, so it
/// is rejected here rather than surfacing later as a read failure.
fn open_file(path: &Path) -> Result<fs::File, CliError> {
    let open_error = |source| CliError::FileOpen {
        path: path.to_owned(),
        source,
    };

    let file = fs::File::open(path).map_err(open_error)?;
    if file.metadata().map_err(open_error)?.is_dir() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::IsADirectory,
            "is a directory",
        )));
    }

    Ok(file)
}

/// Lookups that miss print nothing, the same way the parser drops what it does not recognize.
fn print_document(document: &Document, section: Option<&str>, key: Option<&str>) {
    let group = match section {
        Some(name) => document.section(name),
        None => Some(document.default_group()),
    };
    let Some(group) = group else {
        log::info!("section {:?} not found", section.unwrap_or_default());
        return;
    };

    match (section, key) {
        (_, Some(key)) => match group.get(key) {
            Some(value) => println!("{value}"),
            None => log::info!("key {key:?} not found"),
        },
        (Some(_), None) => print_group(group),
        (None, None) => print!("{document}"),
    }
}

fn print_group(group: &Group) {
    for (key, value) in group {
        println!("{key}={value}");
    }
}
