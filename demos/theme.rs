//! Resolve the application theme once at launch and print it.

use std::error::Error;
use clap::{Parser, ValueEnum};
use chameleon::{Color, ContentStyle, FlatColor, RGBColor, Theme};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    Contrast,
    Light,
    Dark,
}

impl From<Style> for ContentStyle {
    fn from(s: Style) -> Self {
        match s {
            Style::Contrast => ContentStyle::Contrast,
            Style::Light => ContentStyle::Light,
            Style::Dark => ContentStyle::Dark,
        }
    }
}

#[derive(Parser)]
struct Args {
    /// Bar color as `#rrggbb` (flat plum by default).
    #[arg(long)]
    primary: Option<String>,
    /// Control tint as `#rrggbb` (flat blue by default).
    #[arg(long)]
    secondary: Option<String>,
    #[arg(long, value_enum, default_value_t = Style::Contrast)]
    content_style: Style,
}

fn color_or(hex: Option<&str>, default: FlatColor) -> Result<Color, chameleon::Error> {
    match hex {
        Some(hex) => Color::from_hex(hex),
        None => Ok(default.light()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let primary = color_or(args.primary.as_deref(), FlatColor::Plum)?;
    let secondary = color_or(args.secondary.as_deref(), FlatColor::Blue)?;
    let theme = Theme::new(&primary, &secondary, args.content_style.into());
    let appearance = theme.resolve();
    for (name, c) in [("bar tint", appearance.bar_tint),
                      ("bar content", appearance.bar_content),
                      ("tint", appearance.tint),
                      ("tint content", appearance.tint_content),
                      ("background", appearance.background),
                      ("text", appearance.text)] {
        let (flat, shade) = c.nearest_flat();
        println!("{name:>12}: {} ({} {shade:?})", c.to_hex(), flat.name());
    }
    Ok(())
}
