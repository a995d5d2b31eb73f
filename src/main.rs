//! Racquet Score CLI
//!
//! Parses, formats and complements scores from the command line, printing
//! JSON on stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use racquet_score::{
    format::presets::PRESET_NAMES, format_sets_for, ComplementRequest, MatchFormat, ParserConfig,
    ScoreParser, SetScore, Side, SmartComplement, VERSION,
};

#[derive(Parser)]
#[command(name = "racquet-score")]
#[command(about = "Racquet-sport score notation tools", version)]
struct Args {
    /// Named match format
    #[arg(long, env = "SCORE_PRESET", default_value = "standard")]
    preset: String,

    /// Match format as a JSON descriptor (overrides --preset)
    #[arg(long, value_name = "FILE")]
    format_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a score string
    Parse {
        /// Score as typed, e.g. "6-4 3-6 7-6(5)"
        score: String,
    },
    /// Render set records back into notation
    Format {
        /// JSON file holding an array of set records
        sets: PathBuf,
        /// List side 2's scores first
        #[arg(long)]
        side2: bool,
    },
    /// Predict the companion score for a typed digit
    Complement {
        /// Value typed into one side's field
        digit: u32,
        /// Zero-based set index
        #[arg(long, default_value_t = 0)]
        set_index: usize,
        /// Field typed into (1 or 2)
        #[arg(long, default_value_t = 1)]
        side: u8,
        /// Alternate entry: swap the fields
        #[arg(long)]
        shift: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("racquet_score=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Racquet Score v{}", VERSION);

    let format = load_format(&args)?;
    debug!(?format, "match format");

    let output = match args.command {
        Command::Parse { score } => {
            let parser = ScoreParser::new(ParserConfig::from_env());
            serde_json::to_string_pretty(&parser.parse(&score, &format))?
        }
        Command::Format { sets, side2 } => {
            let raw = fs::read_to_string(&sets)
                .with_context(|| format!("reading {}", sets.display()))?;
            let records: Vec<SetScore> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing set records in {}", sets.display()))?;
            let perspective = if side2 { Side::Two } else { Side::One };
            serde_json::to_string_pretty(&format_sets_for(&records, perspective))?
        }
        Command::Complement {
            digit,
            set_index,
            side,
            shift,
        } => {
            let side = Side::try_from(side).map_err(anyhow::Error::msg)?;
            let request = ComplementRequest {
                set_index,
                digit,
                side,
                opponent_value: 0,
                history: &[],
                shift,
            };
            serde_json::to_string_pretty(&SmartComplement::default().advise(&request, &format))?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_format(args: &Args) -> Result<MatchFormat> {
    let format = match &args.format_file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing match format in {}", path.display()))?
        }
        None => match MatchFormat::preset(&args.preset) {
            Some(format) => format,
            None => bail!(
                "unknown preset '{}', expected one of: {}",
                args.preset,
                PRESET_NAMES.join(", ")
            ),
        },
    };
    format.validate()?;
    Ok(format)
}
