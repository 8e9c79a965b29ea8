use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use midi_file::MidiFile;

use midi2notes::formatter::{JsonFormatter, NoteFormatter, TextFormatter};
use midi2notes::{loader, output, reconstruct_with, TempoMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TempoArg {
    /// First tempo event for the whole file
    First,
    /// Follow every tempo change
    Map,
}

impl From<TempoArg> for TempoMode {
    fn from(arg: TempoArg) -> Self {
        match arg {
            TempoArg::First => TempoMode::First,
            TempoArg::Map => TempoMode::Map,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(short, long)]
    midi_file: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[arg(
        short,
        long,
        value_enum,
        default_value_t = TempoArg::First,
        help = "How tempo events map ticks to seconds"
    )]
    tempo: TempoArg,

    #[arg(short, long, help = "Write to this file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("MIDI FILE: {}", args.midi_file.display());

    let file = MidiFile::load(&args.midi_file).context("load midi file")?;
    let decoded = loader::decode(&file).context("decode midi file")?;

    let notes = reconstruct_with(&decoded, args.tempo.into());
    log::info!("reconstructed {} notes", notes.len());

    let formatter: Box<dyn NoteFormatter> = match args.format {
        OutputFormat::Json => Box::new(JsonFormatter::new(args.pretty)),
        OutputFormat::Text => Box::new(TextFormatter::new()),
    };
    output::write_notes(&notes, formatter.as_ref(), args.output.as_deref())
        .context("write notes")?;

    Ok(())
}
