use std::path::PathBuf;
use std::process;

use clap::Parser;

use blobby_logo_generator::{
    encode_png, fetch, publish, Error, OverlayEngine, ProcessingSettings,
};

#[derive(Parser)]
#[command(
    name = "blobby-logo",
    about = "Place a company logo on Blobby's hat",
    version,
    after_help = "Simple usage: blobby-logo https://example.com/logo.png\n\n\
                  The logo's background is removed automatically; pass --tolerance 0 to keep it.\n\
                  Set GITHUB_TOKEN and pass --publish owner/repo to get a public URL back."
)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Logo image: a URL (http/https) or a local file path
    input: String,

    /// Base illustration to composite onto
    #[arg(short, long, default_value = "og_blobby.png")]
    base: PathBuf,

    /// Output PNG path (default: blobby_with_logo_{timestamp}.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Background removal tolerance (Manhattan color distance, 0 disables)
    #[arg(short, long, default_value = "25")]
    tolerance: u32,

    /// Contrast factor (1.0 preserves the original colors exactly)
    #[arg(short, long, default_value = "1.0")]
    contrast: f32,

    /// Disable content-aware cropping
    #[arg(long)]
    no_smart_crop: bool,

    /// Soften cutout edges with a subtle alpha blur
    #[arg(long)]
    smooth_edges: bool,

    /// Square working-canvas size (300 = faster, 600 = higher quality)
    #[arg(long, default_value = "600")]
    canvas_size: u32,

    /// Horizontal center of the logo on the base image
    #[arg(long, default_value = "550")]
    anchor_x: i32,

    /// Vertical center of the logo on the base image
    #[arg(long, default_value = "175")]
    anchor_y: i32,

    /// Final logo width in pixels
    #[arg(long, default_value = "100")]
    logo_width: u32,

    /// Final logo height in pixels
    #[arg(long, default_value = "100")]
    logo_height: u32,

    /// Publish the result to "owner/repo" on GitHub (requires GITHUB_TOKEN)
    #[arg(long, value_name = "OWNER/REPO")]
    publish: Option<String>,

    /// Directory inside the repository for published images
    #[arg(long, default_value = "generated_images")]
    publish_dir: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.contrast <= 0.0 {
        eprintln!("Error: Contrast factor must be positive");
        process::exit(1);
    }
    if cli.canvas_size == 0 || cli.logo_width == 0 || cli.logo_height == 0 {
        eprintln!("Error: Canvas size and logo dimensions must be positive");
        process::exit(1);
    }

    let settings = ProcessingSettings {
        bg_tolerance: cli.tolerance,
        contrast_factor: cli.contrast,
        smart_crop: !cli.no_smart_crop,
        edge_smoothing: cli.smooth_edges,
        canvas_size: cli.canvas_size,
        anchor_x: cli.anchor_x,
        anchor_y: cli.anchor_y,
        logo_width: cli.logo_width,
        logo_height: cli.logo_height,
    };

    let engine = match OverlayEngine::from_path(&cli.base) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Fatal: Failed to load base image {}: {e}", cli.base.display());
            process::exit(1);
        }
    };

    let logo_bytes = match load_logo(&cli.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[FAIL] {}: {e}", cli.input);
            process::exit(1);
        }
    };

    let result = match engine.generate(&logo_bytes, &settings) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[FAIL] {}: {e}", cli.input);
            process::exit(1);
        }
    };

    if !cli.quiet {
        let (w, h) = result.original_dimensions;
        eprintln!("[OK] processed {w}x{h} logo:");
        for step in &result.steps {
            eprintln!("  - {step}");
        }
    }

    let png = match encode_png(&result.image) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[FAIL] {e}");
            process::exit(1);
        }
    };

    let output = cli.output.clone().unwrap_or_else(default_output_path);
    if let Err(e) = std::fs::write(&output, &png) {
        eprintln!("[FAIL] Failed to write {}: {e}", output.display());
        process::exit(1);
    }
    if !cli.quiet {
        eprintln!("[OK] wrote {}", output.display());
    }

    if let Some(repo_spec) = &cli.publish {
        publish_result(&cli, repo_spec, &output, &png);
    }
}

fn load_logo(input: &str) -> Result<Vec<u8>, Error> {
    if input.starts_with("http://") || input.starts_with("https://") {
        fetch::fetch_image(input)
    } else {
        Ok(std::fs::read(input)?)
    }
}

fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("blobby_with_logo_{timestamp}.png"))
}

fn publish_result(cli: &Cli, repo_spec: &str, output: &std::path::Path, png: &[u8]) {
    let Some((owner, repo)) = repo_spec.split_once('/') else {
        eprintln!("Error: --publish expects OWNER/REPO, got \"{repo_spec}\"");
        process::exit(1);
    };
    let Ok(token) = std::env::var("GITHUB_TOKEN") else {
        eprintln!("Error: --publish requires the GITHUB_TOKEN environment variable");
        process::exit(1);
    };

    let target = publish::GithubRepo {
        owner: owner.to_string(),
        repo: repo.to_string(),
        token,
    };
    let filename = output
        .file_name()
        .map_or_else(|| "blobby_with_logo.png".to_string(), |f| f.to_string_lossy().to_string());
    let dest_path = format!("{}/{filename}", cli.publish_dir.trim_end_matches('/'));

    match publish::upload_png(&target, &dest_path, png) {
        Ok(url) => {
            if !cli.quiet {
                eprintln!("[OK] published to {repo_spec}");
            }
            println!("{url}");
        }
        Err(e) => {
            eprintln!("[FAIL] {e}");
            process::exit(1);
        }
    }
}
