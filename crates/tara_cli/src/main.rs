mod input;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tara_catalog::{
    ObjectSelector, RunContext, VISIBILITY_THRESHOLD_DEG, apparent_position, observe,
};
use tara_frames::{Equatorial, Sexagesimal, TrackedPosition, apply_precession};
use tracing_subscriber::EnvFilter;

use crate::input::{TimeSource, load_catalog, resolve_observer};
use crate::report::{ObservationText, PositionText, TimeReport, track_line};

#[derive(Parser)]
#[command(name = "tara", about = "Point at catalog stars near the zenith")]
struct Cli {
    /// Observer latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// JSON observer file with latitude_deg / longitude_deg (flags win)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TimeArgs {
    /// UTC instant (YYYY-MM-DDThh:mm:ssZ or YYYYMMDDhhmmss); default now
    #[arg(long)]
    date: Option<String>,
    /// Restore a saved sidereal snapshot (Y|M|D|h|m|s|LST|diff|JD|T)
    #[arg(long, conflicts_with = "date")]
    snapshot: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a visible catalog object and compute its apparent place
    Observe {
        /// Catalog JSON (name -> {RA, DEC, NDEC})
        catalog: PathBuf,
        #[command(flatten)]
        time: TimeArgs,
        /// Minimum altitude in degrees
        #[arg(long, default_value_t = VISIBILITY_THRESHOLD_DEG)]
        min_alt: f64,
        /// Examine at most this many entries
        #[arg(long)]
        max_scan: Option<usize>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Julian Date, GMST, LST and a restorable snapshot
    Time {
        #[command(flatten)]
        time: TimeArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apparent place of an explicit J2000 position
    Position {
        /// Right ascension, HHMMSS.ss
        ra: String,
        /// Declination, ±DDMMSS
        #[arg(allow_hyphen_values = true)]
        dec: String,
        #[command(flatten)]
        time: TimeArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Follow a J2000 position as sidereal time advances
    Track {
        /// Right ascension, HHMMSS.ss
        ra: String,
        /// Declination, ±DDMMSS
        #[arg(allow_hyphen_values = true)]
        dec: String,
        #[command(flatten)]
        time: TimeArgs,
        /// Total clock seconds to follow
        #[arg(long, default_value_t = 3600.0)]
        duration: f64,
        /// Clock seconds between lines
        #[arg(long, default_value_t = 600.0)]
        step: f64,
    },
    /// Convert decimal degrees (or hours) to sexagesimal
    Dms {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Treat the value as hours
        #[arg(long)]
        hours: bool,
    },
}

fn parse_j2000(ra: &str, dec: &str) -> Result<Equatorial> {
    let ra = Sexagesimal::parse_compact_hms(ra).context("invalid RA")?;
    let dec = Sexagesimal::parse_compact_dms(dec).context("invalid Dec")?;
    Ok(Equatorial::new(ra.to_decimal() * 15.0, dec.to_decimal()))
}

fn run_context(cli: &Cli, time: &TimeArgs) -> Result<(RunContext, TimeSource)> {
    let observer = resolve_observer(cli.config.as_deref(), cli.lat, cli.lon)?;
    let source = TimeSource::from_args(time.date.as_deref(), time.snapshot.as_deref())?;
    let sidereal = source.sidereal_time(observer.longitude_deg);
    Ok((RunContext::from_sidereal(observer, sidereal), source))
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Observe {
            catalog,
            time,
            min_alt,
            max_scan,
            json,
        } => {
            let catalog = load_catalog(catalog)?;
            let (ctx, _) = run_context(cli, time)?;
            let selector = ObjectSelector {
                min_altitude_deg: *min_alt,
                max_scan: *max_scan,
            };
            let obs = observe(&catalog, &ctx, &selector)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&obs)?);
            } else {
                print!("{}", ObservationText(&obs));
            }
        }

        Commands::Time { time, json } => {
            let (ctx, source) = run_context(cli, time)?;
            let report = TimeReport::new(ctx.time, &source.snapshot(&ctx.time));
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }

        Commands::Position {
            ra,
            dec,
            time,
            json,
        } => {
            let j2000 = parse_j2000(ra, dec)?;
            let (ctx, _) = run_context(cli, time)?;
            let pos = apparent_position(j2000, &ctx)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&pos)?);
            } else {
                print!("{}", PositionText(&pos));
            }
        }

        Commands::Track {
            ra,
            dec,
            time,
            duration,
            step,
        } => {
            let (duration, step) = (*duration, *step);
            if step <= 0.0 {
                anyhow::bail!("--step must be positive");
            }
            let j2000 = parse_j2000(ra, dec)?;
            let (ctx, _) = run_context(cli, time)?;
            let target = apply_precession(j2000, ctx.precession_year());
            let mut pos = TrackedPosition::new(target, ctx.latitude_deg(), ctx.lst_deg());
            let mut elapsed = 0.0;
            println!("{}", track_line(elapsed, &pos));
            while elapsed + step <= duration {
                pos.advance(step);
                elapsed += step;
                println!("{}", track_line(elapsed, &pos));
            }
        }

        Commands::Dms { value, hours } => {
            let s = Sexagesimal::from_decimal(*value);
            if *hours {
                println!("{}", s.format_hms());
            } else {
                println!("{s}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}
