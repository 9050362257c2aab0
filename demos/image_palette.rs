//! Print the dominant colors of an image file.

use std::{error::Error, path::PathBuf};
use clap::Parser;
use rgb::RGBA8;
use chameleon::{Extract, RGBColor, DEFAULT_MAX_SAMPLES};

#[derive(Parser)]
struct Args {
    /// Image file (PNG or JPEG).
    path: PathBuf,
    /// Replace the colors by their nearest flat colors.
    #[arg(long)]
    flat: bool,
    /// Maximum number of pixels to sample.
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let img = image::open(&args.path)?.to_rgba8();
    log::info!("loaded {}: {}x{}", args.path.display(), img.width(), img.height());
    let pixels: Vec<RGBA8> = img.pixels()
        .map(|p| RGBA8::new(p[0], p[1], p[2], p[3]))
        .collect();
    let extract = Extract::new(&pixels).flat(args.flat)
        .max_samples(args.max_samples);
    for (i, c) in extract.palette().iter().enumerate() {
        let (flat, shade) = c.nearest_flat();
        println!("{i}: {}  text {}  ({} {shade:?})", c.to_hex(),
                 c.contrast(true).to_hex(), flat.name());
    }
    println!("average: {}", extract.average().to_hex());
    Ok(())
}
