use chordkeys::{
    render_keyboard, render_summary, show_chord, ChordType, Config, OutputFormat,
    PITCH_CLASS_NAMES,
};
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "chordkeys")]
#[command(about = "Show a chord on a two-octave piano keyboard (C3-C5)", long_about = None)]
struct Args {
    /// Root note: C, C#, D, D#, E, F, F#, G, G#, A, A#, B
    #[arg(required_unless_present = "list")]
    root: Option<String>,

    /// Chord type, e.g. major, min7, dim7, maj9 (see --list)
    #[arg(required_unless_present = "list")]
    chord: Option<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Octave the root is anchored at (3-5), overrides the config
    #[arg(short, long)]
    base_octave: Option<u8>,

    /// Print the chord as JSON
    #[arg(long)]
    json: bool,

    /// Hide note labels under the keyboard
    #[arg(long)]
    no_labels: bool,

    /// List supported roots and chord types
    #[arg(short, long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        print_tables();
        return;
    }

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(base_octave) = args.base_octave {
        config.base_octave = base_octave;
    }
    if args.no_labels {
        config.labels = false;
    }
    if args.json {
        config.format = OutputFormat::Json;
    }

    let resolver = match config.resolver() {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // clap guarantees both are present unless --list was given
    let root = args.root.as_deref().unwrap_or_default();
    let chord_type = args.chord.as_deref().unwrap_or_default();

    let (chord, keyboard) = match show_chord(&resolver, root, chord_type) {
        Ok(shown) => shown,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match config.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&chord) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing chord: {}", e);
                process::exit(1);
            }
        },
        OutputFormat::Text => {
            println!("{}", render_summary(&chord));
            println!();
            println!("{}", render_keyboard(&keyboard, config.labels));
        }
    }
}

fn print_tables() {
    println!("Roots: {}", PITCH_CLASS_NAMES.join(" "));
    println!("Chord types:");
    for chord_type in ChordType::ALL {
        let intervals: Vec<String> = chord_type.intervals().iter().map(u8::to_string).collect();
        println!("  {:<10} {}", chord_type.id(), intervals.join(" "));
    }
}
