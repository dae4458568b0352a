//! Titlecaps CLI - converts titles to title case, one title per line.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use similar::TextDiff;
use titlecaps::config::{Config, ConfigError};
use titlecaps::{Style, TitleCaser, title_case_lines};

/// Converts titles to title case in the Associated Press or Chicago styles.
///
/// Every line of input is treated as a separate title.
#[derive(Parser, Debug)]
#[command(name = "titlecaps")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) to convert.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Capitalization style: literal, ap4, ap5, chicago, or a mode number 1-4.
    #[arg(short, long, value_name = "STYLE")]
    style: Option<Style>,

    /// Write converted output back to the input file(s).
    #[arg(short, long)]
    write: bool,

    /// Check if files are already in title case (exit 1 if not).
    #[arg(short, long)]
    check: bool,

    /// Print a unified diff instead of the converted text.
    #[arg(short, long)]
    diff: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Convert stdin line by line as it is typed; `:style STYLE` switches
    /// the style and `:reset` forgets the remembered first line.
    #[arg(short, long, conflicts_with_all = ["files", "write", "check", "diff"])]
    interactive: bool,

    /// Use this configuration file instead of searching for one.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore configuration files.
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging.
    #[arg(short, long)]
    quiet: bool,
}

/// A file read and converted, waiting to be reported.
struct Converted {
    path: PathBuf,
    input: String,
    output: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let (config_path, config) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let style = args.style.unwrap_or(config.style);
    log::info!("using style {}", style);

    if args.interactive {
        return match run_interactive(style) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let files = if args.files.is_empty() && !args.stdin {
        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        match config.collect_files(&base_dir) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error collecting files: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.files.clone()
    };

    if args.stdin || files.is_empty() {
        run_stdin(style, &args)
    } else {
        run_files(&files, style, &args)
    }
}

/// Initialize logging based on verbosity level.
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Load the configuration named on the command line, or discover one from
/// the current directory.
fn load_config(args: &Args) -> Result<(Option<PathBuf>, Config), ConfigError> {
    if args.no_config {
        return Ok((None, Config::default()));
    }
    if let Some(path) = &args.config {
        let config = Config::from_file(path)?;
        return Ok((Some(path.clone()), config));
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("cannot determine current directory: {}", e);
            return Ok((None, Config::default()));
        }
    };
    Ok(match Config::discover(&cwd)? {
        Some((path, config)) => (Some(path), config),
        None => (None, Config::default()),
    })
}

fn run_stdin(style: Style, args: &Args) -> ExitCode {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let output = title_case_lines(&input, style);
    if args.check {
        if input != output {
            eprintln!("<stdin>: not in title case");
            return ExitCode::FAILURE;
        }
    } else if args.diff {
        print!("{}", unified_diff(&input, &output, "<stdin>"));
    } else {
        print!("{}", output);
    }
    ExitCode::SUCCESS
}

fn run_files(files: &[PathBuf], style: Style, args: &Args) -> ExitCode {
    let results: Vec<Result<Converted, (PathBuf, io::Error)>> = files
        .par_iter()
        .map(|path| convert_file(path, style))
        .collect();

    let mut all_converted = true;

    for result in results {
        let converted = match result {
            Ok(converted) => converted,
            Err((path, e)) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
        let changed = converted.input != converted.output;

        if args.check {
            if changed {
                eprintln!("{}: not in title case", converted.path.display());
                all_converted = false;
            }
        } else if args.write {
            if changed {
                if let Err(e) = fs::write(&converted.path, &converted.output) {
                    eprintln!("Error writing {}: {}", converted.path.display(), e);
                    return ExitCode::FAILURE;
                }
                log::info!("wrote {}", converted.path.display());
            }
        } else if args.diff {
            if changed {
                let name = converted.path.display().to_string();
                print!("{}", unified_diff(&converted.input, &converted.output, &name));
            }
        } else {
            print!("{}", converted.output);
        }
    }

    if args.check && !all_converted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert_file(path: &Path, style: Style) -> Result<Converted, (PathBuf, io::Error)> {
    let input = fs::read_to_string(path).map_err(|e| (path.to_path_buf(), e))?;
    let output = title_case_lines(&input, style);
    log::debug!("converted {}", path.display());
    Ok(Converted {
        path: path.to_path_buf(),
        input,
        output,
    })
}

fn unified_diff(input: &str, output: &str, name: &str) -> String {
    let diff = TextDiff::from_lines(input, output);
    let old_header = format!("{} (original)", name);
    let new_header = format!("{} (title case)", name);
    diff.unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string()
}

/// Behave like a text field bound to a [`TitleCaser`]: every line is the new
/// field value and is echoed back converted.
fn run_interactive(style: Style) -> io::Result<()> {
    let mut caser = TitleCaser::new(style);
    let mut last_input: Option<String> = None;
    let mut stdout = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line?;

        if let Some(value) = line.strip_prefix(":style") {
            let style = value.trim().parse().unwrap_or_else(|e| {
                log::warn!("{}; using chicago", e);
                Style::ChicagoManual
            });
            caser.set_style(style);
            if let Some(text) = &last_input {
                writeln!(stdout, "{}", caser.transform(text))?;
                stdout.flush()?;
            }
            continue;
        }
        if line == ":reset" {
            caser.clear_original();
            continue;
        }

        writeln!(stdout, "{}", caser.transform(&line))?;
        stdout.flush()?;
        last_input = Some(line);
    }

    Ok(())
}
