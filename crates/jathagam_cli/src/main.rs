//! `jathagam` command-line tool.
//!
//! Locator and dasha utilities work from plain numbers. Chart and match
//! commands read positions from a JSON table (see `demos/sample_table.json`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use jathagam_base::{
    MoonSign, Nakshatra, Rashi, antardashas, classify, nakshatra_from_longitude,
    rashi_from_longitude, to_sidereal, vimshottari_mahadashas,
};
use jathagam_chart::{
    BirthInfo, ChartConfig, TablePositionProvider, build_chart, compatibility,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "jathagam", about = "Vedic birth chart and porutham calculator")]
struct Cli {
    /// Chart configuration JSON (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ayanamsa at a Julian Day
    Ayanamsa {
        #[arg(long)]
        jd: f64,
    },
    /// Convert a tropical longitude to sidereal and classify it
    Sidereal {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        tropical: f64,
        #[arg(long)]
        jd: f64,
    },
    /// Vimshottari mahadashas from the Moon's sidereal longitude
    Dasha {
        /// Moon sidereal longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Birth instant (RFC 3339, e.g. 1990-05-15T04:30:00Z)
        #[arg(long)]
        birth: DateTime<Utc>,
        /// Also list antardashas
        #[arg(long)]
        antar: bool,
    },
    /// List the 12 rashis with lords
    Signs,
    /// List the 27 nakshatras with lords
    Nakshatras,
    /// Build a full chart from a position table
    Chart {
        /// Position table JSON
        #[arg(long)]
        table: PathBuf,
        /// Birth instant (RFC 3339)
        #[arg(long)]
        at: DateTime<Utc>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        place: Option<String>,
    },
    /// Porutham report for two births from a position table
    Match {
        /// Position table JSON covering both births
        #[arg(long)]
        table: PathBuf,
        #[arg(long)]
        male_at: DateTime<Utc>,
        #[arg(long, allow_hyphen_values = true)]
        male_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        male_lon: f64,
        #[arg(long)]
        female_at: DateTime<Utc>,
        #[arg(long, allow_hyphen_values = true)]
        female_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        female_lon: f64,
    },
    /// Porutham report from two Moon sidereal longitudes
    Porutham {
        #[arg(long)]
        male_moon: f64,
        #[arg(long)]
        female_moon: f64,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig> {
    match path {
        Some(path) => ChartConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ChartConfig::default()),
    }
}

fn load_table(path: &PathBuf) -> Result<TablePositionProvider> {
    let table = TablePositionProvider::from_json_file(path)
        .with_context(|| format!("loading position table {}", path.display()))?;
    info!(instants = table.len(), path = %path.display(), "loaded position table");
    Ok(table)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "chart config");

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}, {}) - {} ({:.4} deg in rashi), lord {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi.tamil_name(),
                info.dms,
                info.degrees_in_rashi,
                info.rashi.lord()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} ({}) #{} - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {}",
                info.nakshatra.name(),
                info.nakshatra.tamil_name(),
                info.nakshatra.number(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.nakshatra.lord()
            );
        }

        Commands::Ayanamsa { jd } => {
            println!("{:.6}", config.ayanamsa.at_jd(jd));
        }

        Commands::Sidereal { tropical, jd } => {
            let aya = config.ayanamsa.at_jd(jd);
            let pos = classify(to_sidereal(tropical, aya));
            println!(
                "{:.6} deg (ayanamsa {:.6}) - {} {}, {} pada {}",
                pos.longitude,
                aya,
                pos.rashi.name(),
                pos.dms,
                pos.nakshatra.name(),
                pos.pada
            );
        }

        Commands::Dasha { moon, birth, antar } => {
            let periods = vimshottari_mahadashas(moon, birth)?;
            for period in &periods {
                println!(
                    "{:<8} {} -> {}  ({:.3} y)",
                    period.ruler.english_name(),
                    period.start.format("%Y-%m-%d"),
                    period.end.format("%Y-%m-%d"),
                    period.years
                );
                if antar {
                    for sub in antardashas(period) {
                        println!(
                            "    {:<8} {} -> {}",
                            sub.ruler.english_name(),
                            sub.start.format("%Y-%m-%d"),
                            sub.end.format("%Y-%m-%d")
                        );
                    }
                }
            }
        }

        Commands::Signs => {
            for rashi in Rashi::all() {
                println!(
                    "{:>2}  {:<10} {:<12} {:<12} lord {}",
                    rashi.number(),
                    rashi.name(),
                    rashi.western_name(),
                    rashi.tamil_name(),
                    rashi.lord()
                );
            }
        }

        Commands::Nakshatras => {
            for nakshatra in Nakshatra::all() {
                println!(
                    "{:>2}  {:<18} {:<14} {:>8.4} deg  lord {}",
                    nakshatra.number(),
                    nakshatra.name(),
                    nakshatra.tamil_name(),
                    nakshatra.start_deg(),
                    nakshatra.lord()
                );
            }
        }

        Commands::Chart {
            table,
            at,
            lat,
            lon,
            name,
            place,
        } => {
            let provider = load_table(&table)?;
            let birth = BirthInfo {
                instant: at,
                latitude: lat,
                longitude: lon,
                name,
                place,
            };
            let chart = build_chart(&provider, birth, &config)?;
            info!(
                ascendant = chart.ascendant.position.rashi.name(),
                moon = chart.moon().position.nakshatra.name(),
                yogas = chart.yogas.len(),
                doshas = chart.doshas.len(),
                "chart built"
            );
            print_json(&chart)?;
        }

        Commands::Match {
            table,
            male_at,
            male_lat,
            male_lon,
            female_at,
            female_lat,
            female_lon,
        } => {
            let provider = load_table(&table)?;
            let male = build_chart(&provider, BirthInfo::new(male_at, male_lat, male_lon), &config)
                .context("building male chart")?;
            let female = build_chart(
                &provider,
                BirthInfo::new(female_at, female_lat, female_lon),
                &config,
            )
            .context("building female chart")?;
            let report = compatibility(&male, &female);
            info!(
                total = report.total_points,
                percentage = report.percentage,
                band = report.band.name(),
                "match scored"
            );
            print_json(&report)?;
        }

        Commands::Porutham {
            male_moon,
            female_moon,
        } => {
            let male = MoonSign::from(&classify(male_moon));
            let female = MoonSign::from(&classify(female_moon));
            print_json(&jathagam_base::porutham(male, female))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "jathagam",
            "chart",
            "--table",
            "t.json",
            "--at",
            "1990-05-15T04:30:00Z",
            "--lat",
            "-33.87",
            "--lon",
            "-70.65",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { lat, lon, at, .. } => {
                assert_eq!(lat, -33.87);
                assert_eq!(lon, -70.65);
                assert_eq!(at.to_rfc3339(), "1990-05-15T04:30:00+00:00");
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jathagam", "signs", "--verbose", "--config", "c.json"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }
}
