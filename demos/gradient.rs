use std::{io::{BufWriter, Write},
          fs::File,
          path::{Path, PathBuf},
          error::Error};
use clap::Parser;
use rgb::{RGB8, RGBA8};
use chameleon::{ColorRange, ColorSchemeRule, FlatColor, GradientSpec,
                GradientStyle, Interpolation, Palette, RGBColor, Shade};

type Err = Box<dyn Error>;

/// Write an HTML page of flat colors, schemes and gradients, and PNG
/// files of the gradient styles.
#[derive(Parser)]
struct Args {
    /// Directory receiving `gradient.html` and the PNG files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Side of the PNG gradients, in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().to_hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn range(fh: &mut impl Write, range: &impl ColorRange<RGB8>, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    table_of_colors(fh, &range.sample(n), width, comment)
}

fn gradient(fh: &mut impl Write, c0: FlatColor, c1: FlatColor, n: usize,
            width: u32) -> Result<(), Err> {
    let c0: RGB8 = c0.light();
    let c1: RGB8 = c1.light();
    range(fh, &c0.gradient(&c1), n, width, "")
}

fn write_png(path: &Path, spec: &GradientSpec<RGBA8>) -> Result<(), Err> {
    let img = spec.build()?;
    let bytes = img.pixels().iter().flat_map(|c| [c.r, c.g, c.b, c.a]).collect();
    let buf = image::RgbaImage::from_raw(img.width(), img.height(), bytes)
        .ok_or("pixel buffer does not match the image size")?;
    buf.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let args = Args::parse();
    let html = args.out_dir.join("gradient.html");
    let mut fh = BufWriter::new(File::create(&html)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Chameleon: flat colors</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Flat colors</h3>")?;
    for shade in [Shade::Light, Shade::Dark] {
        let colors: Vec<RGB8> = FlatColor::ALL.iter()
            .map(|c| c.color(shade)).collect();
        table_of_colors(&mut fh, &colors, 30, &format!("{shade:?}"))?;
    }

    writeln!(fh, "<h3>Color schemes</h3>")?;
    let seed: RGB8 = FlatColor::Plum.light();
    for rule in ColorSchemeRule::ALL {
        for flat in [false, true] {
            let p = Palette::from_seed(&seed, rule, flat);
            let comment = format!("{rule:?}{}", if flat { " (flat)" } else { "" });
            table_of_colors(&mut fh, p.colors(), 40, &comment)?;
        }
    }

    writeln!(fh, "<h3>Gradients</h3>")?;
    gradient(&mut fh, FlatColor::Plum, FlatColor::Sand, 10, 43)?;
    gradient(&mut fh, FlatColor::Plum, FlatColor::Sand, 150, 1)?;
    gradient(&mut fh, FlatColor::Red, FlatColor::Blue, 150, 1)?;
    gradient(&mut fh, FlatColor::Black, FlatColor::White, 150, 1)?;
    gradient(&mut fh, FlatColor::NavyBlue, FlatColor::PowderBlue, 150, 1)?;

    writeln!(fh, "<h3>Scheme gradients</h3>")?;
    for rule in ColorSchemeRule::ALL {
        let p = Palette::from_seed(&seed, rule, true);
        range(&mut fh, &p.gradient(), 128, 1, &format!("{rule:?}"))?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    log::info!("wrote {}", html.display());

    let colors: Vec<RGBA8> = [FlatColor::Plum, FlatColor::Watermelon,
                              FlatColor::Sand]
        .iter().map(|c| c.light()).collect();
    for (name, style) in [("horizontal", GradientStyle::Horizontal),
                          ("vertical", GradientStyle::Vertical),
                          ("diagonal", GradientStyle::Diagonal),
                          ("radial", GradientStyle::Radial)] {
        let spec = GradientSpec::new(style, args.size, args.size, colors.clone());
        write_png(&args.out_dir.join(format!("{name}.png")), &spec)?;
        let spec = spec.interpolation(Interpolation::Perceptual);
        write_png(&args.out_dir.join(format!("{name}-lch.png")), &spec)?;
    }
    Ok(())
}
