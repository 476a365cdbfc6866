use std::env;
use std::fs;
use std::process;

use chordkit::{Chart, ChartError, Engine, Song};

const USAGE: &str = "Usage: chordkit transpose <chart> <key> [output]
       chordkit numbers <chart> [output]
       chordkit chords <chart> [output]
       chordkit leader <song.json> <name> [output]
       chordkit keys";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn read_input(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn write_output(output: &str, path: Option<&String>) {
    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote {}", path);
        }
        None => print!("{}", output),
    }
}

fn run_chart(
    path: &str,
    op: impl Fn(&Chart) -> Result<Chart, ChartError>,
) -> Result<String, ChartError> {
    let chart = Chart::parse(&read_input(path))?;
    op(&chart)?.render()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let engine = Engine::shared();
    let command = args[1].as_str();

    if command == "keys" {
        println!("{}", engine.all_keys().join(" "));
        return;
    }

    let (result, output_path) = match (command, args.len()) {
        ("transpose", 4..=5) => (
            run_chart(&args[2], |chart| chart.transpose_to(engine, &args[3])),
            args.get(4),
        ),
        ("numbers", 3..=4) => (
            run_chart(&args[2], |chart| chart.to_numbers(engine)),
            args.get(3),
        ),
        ("chords", 3..=4) => (
            run_chart(&args[2], |chart| chart.to_chords(engine)),
            args.get(3),
        ),
        ("leader", 4..=5) => {
            let result = Song::from_json(&read_input(&args[2]))
                .and_then(|song| song.for_leader(engine, &args[3]))
                .and_then(|song| song.to_json())
                .map(|json| json + "\n");
            (result, args.get(4))
        }
        _ => usage(),
    };

    match result {
        Ok(output) => write_output(&output, output_path),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
