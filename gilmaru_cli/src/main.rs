// CLI entry point for Gilmaru.
//
// Prints the phrase for a coordinate, decodes a grid code back to its cell
// and phrase, or audits a word corpus. The library does all the work; this
// file only parses arguments, reads files, and formats output.
//
// Usage:
//   gilmaru [OPTIONS] <COMMAND>
//     --corpus <FILE>     Word corpus JSON (default: embedded corpus)
//     --config <FILE>     Grid config JSON, partial allowed (default: built-in grid)
//     -v, -vv             Log at debug / trace level (stderr)
//
//   gilmaru locate <LAT> <LNG> [--html] [--json]
//   gilmaru decode <CODE> [--html] [--json]
//   gilmaru audit

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gilmaru_lang::{Coordinate, Emphasis, GridConfig, Phrase, PhraseGenerator, WordCorpus, default_corpus};
use serde::Serialize;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "gilmaru", version, about = "Every place on Earth has its own phrase")]
struct Cli {
    /// Word corpus JSON with keys "A", "B", "C", "D".
    #[arg(long, global = true, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Grid config JSON. Missing fields keep their defaults.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the phrase for a coordinate.
    Locate {
        /// Latitude in degrees.
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees.
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decode a grid code (e.g. X583.Y906.C223.D112) to its cell and phrase.
    Decode {
        code: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check the corpus for overlaps, duplicates, and sort order.
    Audit,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Emphasise words with HTML spans instead of Markdown bold.
    #[arg(long)]
    html: bool,
    /// Print the phrase as JSON.
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn emphasis(&self) -> Emphasis {
        if self.html { Emphasis::Html } else { Emphasis::Markdown }
    }
}

/// A decoded grid code: the cell geometry plus its phrase.
#[derive(Debug, Serialize)]
struct DecodedCell {
    center: Coordinate,
    /// South-west and north-east corners.
    bounds: [Coordinate; 2],
    phrase: Phrase,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let corpus = load_corpus(cli.corpus.as_deref())?;
    let grid = load_grid(cli.config.as_deref())?;

    match &cli.command {
        Command::Locate { lat, lng, output } => {
            anyhow::ensure!(
                lat.is_finite() && lng.is_finite(),
                "coordinates must be finite numbers"
            );
            let generator = PhraseGenerator::new(&corpus)
                .with_grid(grid)
                .with_emphasis(output.emphasis());
            let phrase = generator
                .generate(*lat, *lng)
                .with_context(|| format!("generating phrase for ({lat}, {lng})"))?;
            print_phrase(&phrase, output.json)?;
        }
        Command::Decode { code, output } => {
            let cell = decode_cell(&corpus, grid, code, output.emphasis())?;
            if output.json {
                println!("{}", serde_json::to_string_pretty(&cell)?);
            } else {
                let [sw, ne] = cell.bounds;
                println!("Center: {:.6}, {:.6}", cell.center.lat, cell.center.lng);
                println!(
                    "Bounds: ({:.6}, {:.6}) - ({:.6}, {:.6})",
                    sw.lat, sw.lng, ne.lat, ne.lng
                );
                print_phrase(&cell.phrase, false)?;
            }
        }
        Command::Audit => return Ok(print_audit(&corpus)),
    }

    Ok(ExitCode::SUCCESS)
}

fn load_corpus(path: Option<&Path>) -> Result<WordCorpus> {
    let Some(path) = path else {
        return Ok(default_corpus());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    WordCorpus::from_json(&json).with_context(|| format!("loading corpus {}", path.display()))
}

fn load_grid(path: Option<&Path>) -> Result<GridConfig> {
    let Some(path) = path else {
        return Ok(GridConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading grid config {}", path.display()))?;
    let grid = GridConfig::from_json(&json)
        .with_context(|| format!("loading grid config {}", path.display()))?;
    if grid != GridConfig::default() {
        tracing::warn!("non-default grid config; phrases will differ from the standard grid");
    }
    Ok(grid)
}

fn decode_cell(corpus: &WordCorpus, grid: GridConfig, code: &str, emphasis: Emphasis) -> Result<DecodedCell> {
    let address = grid.parse_code(code)?;
    let (sw, ne) = grid.cell_bounds(&address);
    let center = grid.cell_center(&address);
    let phrase = PhraseGenerator::new(corpus)
        .with_grid(grid)
        .with_emphasis(emphasis)
        .generate_at(address)
        .with_context(|| format!("generating phrase for {code}"))?;
    Ok(DecodedCell {
        center,
        bounds: [sw, ne],
        phrase,
    })
}

fn print_phrase(phrase: &Phrase, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(phrase)?);
    } else {
        println!("Code: {}", phrase.code);
        println!("Words: {}", phrase.words.join(", "));
        println!("Sentence: {}", phrase.sentence);
    }
    Ok(())
}

fn print_audit(corpus: &WordCorpus) -> ExitCode {
    let report = corpus.audit();
    let [a, b, c, d] = report.counts;
    println!("Word counts: A={a}, B={b}, C={c}, D={d}");

    for overlap in &report.overlaps {
        println!(
            "[Overlap between {} and {}]: {} words",
            overlap.first,
            overlap.second,
            overlap.words.len()
        );
        println!("  {}", overlap.words.join(", "));
    }
    for dup in &report.duplicates {
        println!("[Self-duplication in {}]: {}", dup.label, dup.words.join(", "));
    }
    for unsorted in &report.unsorted {
        println!(
            "[{} is not sorted]: {} > {} at index {}",
            unsorted.label, unsorted.before, unsorted.after, unsorted.index
        );
    }

    if report.is_clean() {
        println!("No duplicates found. All clean.");
        ExitCode::SUCCESS
    } else {
        println!("Duplicates found as listed above.");
        ExitCode::FAILURE
    }
}
