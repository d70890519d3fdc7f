//! Place a logo on the Blobby base illustration with default settings.
//!
//! Usage:
//! ```sh
//! cargo run --example overlay_logo -- og_blobby.png logo.png output.png
//! ```

use std::env;
use std::path::Path;
use std::process;

use blobby_logo_generator::{OverlayEngine, ProcessingSettings};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <base> <logo> <output>", args[0]);
        process::exit(1);
    }

    let engine =
        OverlayEngine::from_path(Path::new(&args[1])).expect("failed to load base image");
    let logo_bytes = std::fs::read(&args[2]).expect("failed to read logo");

    let result = engine
        .generate(&logo_bytes, &ProcessingSettings::default())
        .expect("failed to generate");
    result.image.save(&args[3]).expect("failed to save output");

    println!("Done: {}", result.steps.join(", "));
}
