use std::{
  io::{self, IsTerminal, Read, Write},
  path::PathBuf,
  process::ExitCode,
};

use clap::{CommandFactory, Parser};
use pngscan::{
  png::PngReader,
  report::{write_report, ReportConfig, ScanMode},
};

/// Lists the chunks of PNG files, and optionally decodes their fields.
///
/// With no files given, reads a PNG from standard input.
#[derive(Parser, Debug)]
#[command(name = "pngscan", version)]
struct Cli {
  /// List every chunk's type and length.
  #[arg(short, long)]
  scan: bool,

  /// Decode the fields of every supported chunk type (implies --scan).
  #[arg(short, long)]
  deep: bool,

  /// In deep mode, also inflate compressed text and ICC profiles.
  #[arg(short = 'z', long)]
  inflate: bool,

  /// Most entries printed for palettes and histograms.
  #[arg(long, default_value_t = 16)]
  max_entries: usize,

  /// More log output (repeat for even more).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  files: Vec<PathBuf>,
}
impl Cli {
  fn report_config(&self) -> ReportConfig {
    let mode = if self.deep {
      ScanMode::Deep
    } else if self.scan {
      ScanMode::Scan
    } else {
      ScanMode::Summary
    };
    ReportConfig { mode, decompress_text: self.inflate, max_entries: self.max_entries }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  let level = match cli.verbose {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(level).parse_default_env().init();

  let config = cli.report_config();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut failures = 0_usize;

  if cli.files.is_empty() {
    if io::stdin().is_terminal() {
      // nothing piped in, and nothing named
      if let Err(e) = Cli::command().print_help() {
        eprintln!("{e}");
      }
      return ExitCode::FAILURE;
    }
    let ok = match PngReader::stdin() {
      Ok(mut reader) => process(&mut out, &mut reader, &config),
      Err(e) => {
        eprintln!("<stdin>: {e}");
        false
      }
    };
    failures += usize::from(!ok);
  }

  for path in &cli.files {
    log::info!("opening {}", path.display());
    let ok = match PngReader::open(path) {
      Ok(mut reader) => process(&mut out, &mut reader, &config),
      Err(e) => {
        eprintln!("{}: {e}", path.display());
        false
      }
    };
    failures += usize::from(!ok);
  }

  if let Err(e) = out.flush() {
    eprintln!("{e}");
    return ExitCode::FAILURE;
  }
  if failures == 0 {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

/// Reports one file, giving `true` if it was read without problems.
fn process<W: Write, R: Read>(
  out: &mut W, reader: &mut PngReader<R>, config: &ReportConfig,
) -> bool {
  match write_report(out, reader, config) {
    Ok(outcome) => {
      log::debug!("{} bytes read", reader.bytes_read());
      outcome.stream_error.is_none()
    }
    Err(e) => {
      eprintln!("{}: {e}", reader.name().unwrap_or("<stdin>"));
      false
    }
  }
}
