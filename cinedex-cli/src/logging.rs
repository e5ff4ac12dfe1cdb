//! Logger setup: `log` records go to stdout, optionally teed to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Writes to stdout and to a log file, with ANSI escapes removed from the
/// file copy.
struct TeeWriter {
    stdout: io::Stdout,
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.file.flush()
    }
}

/// Install the global logger.
///
/// `quiet` keeps only warnings and errors; `verbose` enables debug records
/// with timestamps. `RUST_LOG` overrides both.
pub(crate) fn init_logging(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => format!("{} ", "error:".if_supports_color(Stdout, |t| t.red())),
            Level::Warn => format!("{} ", "warning:".if_supports_color(Stdout, |t| t.yellow())),
            Level::Info => String::new(),
            Level::Debug | Level::Trace => format!("[{}] ", record.level()),
        };
        if verbose {
            let ts = buf.timestamp_millis();
            writeln!(buf, "{} {}{}", ts, prefix, record.args())
        } else {
            writeln!(buf, "{}{}", prefix, record.args())
        }
    });

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::logging(format!("cannot open {}: {}", path.display(), e))
            })?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
                stdout: io::stdout(),
                file,
            })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
