//! Validate a UMF file against a built-in preset
//!
//! Usage: `cargo run --example validate_umf -- <anime|music> <file.umf>`
//!
//! Set `RUST_LOG=umfkit=debug` to see parser and validation events.

use std::env;
use std::fs;

use tracing_subscriber::EnvFilter;
use umfkit::presets::{ANIME, MUSIC};
use umfkit::Metadata;

fn validate_file() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Expected: preset_name input_file
    let args: Vec<String> = env::args().collect();
    let (preset_name, input_path) = match args.len() {
        3 => Ok((&args[1], &args[2])),
        n => Err(format!(
            "expected 2 arguments (anime|music input_file), got {} arguments",
            n - 1
        )),
    }?;

    let preset = match preset_name.as_str() {
        "anime" => &*ANIME,
        "music" => &*MUSIC,
        other => return Err(format!("unknown preset '{}'", other).into()),
    };

    let text = fs::read_to_string(input_path)?;
    let meta: Metadata = text.parse()?;

    println!("Media: {}", meta.media_name());
    for (header, name, value) in meta.fields() {
        match header {
            Some(header) => println!("  [{}] {} = {}", header, name, value),
            None => println!("  {} = {}", name, value),
        }
    }

    preset.validate(&meta)?;
    println!("OK: valid {} metadata", preset_name);
    Ok(())
}

fn main() {
    if let Err(e) = validate_file() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
