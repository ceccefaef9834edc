use airfoil_geom::airfoil::Orientation;
use airfoil_geom::interpolate::{InterpolationParams, SpanInterpolator, SpanMethod};
use airfoil_geom::io::{load, save, save_dust};
use airfoil_geom::{Airfoil, AirfoilError};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "airfoil-geom")]
#[command(about = "Analyze, transform and interpolate airfoil sections")]
#[command(after_help = "Files are read and written as .dat, .csv or .json by extension. \
Set AIRFOIL_LOG=debug for more detail.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON summary of each airfoil
    Info {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Write the airfoil at unit chord with its leading edge at the origin
    Normalize { input: PathBuf, output: PathBuf },

    /// Write the airfoil in the DUST solver layout
    Dust { input: PathBuf, output: PathBuf },

    /// Interpolate airfoils at new span stations, writing interpolation_<k>.dat files
    Interpolate {
        method: Method,

        /// Comma separated span coordinates to produce
        #[arg(allow_hyphen_values = true, value_parser = parse_targets)]
        targets: Targets,

        output_dir: PathBuf,

        /// Input stations as <span>=<file>
        #[arg(required = true, value_parser = parse_station)]
        stations: Vec<(f64, PathBuf)>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Method {
    Pchip,
    Akima,
}

impl From<Method> for SpanMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Pchip => SpanMethod::Pchip,
            Method::Akima => SpanMethod::Akima,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Targets(Vec<f64>);

fn parse_targets(text: &str) -> Result<Targets, String> {
    text.split(',')
        .map(|t| {
            t.trim()
                .parse()
                .map_err(|_| format!("invalid span coordinate {:?}", t))
        })
        .collect::<Result<Vec<f64>, _>>()
        .map(Targets)
}

fn parse_station(text: &str) -> Result<(f64, PathBuf), String> {
    let (span, file) = text
        .split_once('=')
        .ok_or_else(|| format!("expected <span>=<file>, got {:?}", text))?;
    let span = span
        .trim()
        .parse()
        .map_err(|_| format!("invalid span coordinate {:?}", span))?;
    Ok((span, PathBuf::from(file)))
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("AIRFOIL_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn info(files: &[PathBuf]) -> bool {
    let mut ok = true;
    for file in files {
        let result = load(file).and_then(|airfoil| {
            if airfoil.orientation() == Orientation::Clockwise {
                log::warn!(
                    "{}: points run clockwise, upper and lower surfaces are swapped",
                    file.display()
                );
            }
            Ok(serde_json::to_string_pretty(&airfoil.summary()?)?)
        });

        match result {
            Ok(text) => println!("{}", text),
            Err(e) => {
                log::error!("{}: {}", file.display(), e);
                ok = false;
            }
        }
    }
    ok
}

fn normalize(input: &Path, output: &Path) -> Result<(), AirfoilError> {
    let mut airfoil = load(input)?;
    airfoil.normalize()?;
    save(&airfoil, output)
}

fn dust(input: &Path, output: &Path) -> Result<(), AirfoilError> {
    save_dust(&load(input)?, output)
}

fn interpolate(
    method: Method,
    targets: &[f64],
    output_dir: &Path,
    stations: &[(f64, PathBuf)],
) -> Result<(), AirfoilError> {
    let spans: Vec<f64> = stations.iter().map(|(span, _)| *span).collect();
    let airfoils = stations
        .iter()
        .map(|(_, file)| load(file))
        .collect::<Result<Vec<Airfoil>, _>>()?;

    let params = InterpolationParams::new(method.into());
    let interpolator = SpanInterpolator::new(&airfoils, &spans, &params)?;
    log::info!(
        "interpolating {} points at {} stations",
        interpolator.point_count(),
        targets.len()
    );

    for (k, airfoil) in interpolator.evaluate(targets)?.iter().enumerate() {
        let path = output_dir.join(format!("interpolation_{}.dat", k));
        save(airfoil, &path)?;
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Info { files } => {
            if info(files) {
                Ok(())
            } else {
                return ExitCode::FAILURE;
            }
        }
        Command::Normalize { input, output } => normalize(input, output),
        Command::Dust { input, output } => dust(input, output),
        Command::Interpolate {
            method,
            targets,
            output_dir,
            stations,
        } => interpolate(*method, &targets.0, output_dir, stations),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if log::log_enabled!(Level::Error) {
                log::error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
