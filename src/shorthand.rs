//! Free functions for the most common operations.
//!
//! They are thin wrappers around [`RGBColor`], [`FlatColor`],
//! [`Palette`] and [`GradientSpec`] for callers preferring a flat API.

use rand::thread_rng;
use rgb::RGBA;
use crate::{Color, ColorSchemeRule, Extract, FlatColor, GradientSpec,
            GradientStyle, Palette, RGBColor, Raster, Result, Shade};

/// The flat color `color` in the given shade.
#[inline]
pub fn flat<C: RGBColor>(color: FlatColor, shade: Shade) -> C {
    color.color(shade)
}

/// The flat color nearest to the complement of `color`.
pub fn complementary_flat_color_of<C: RGBColor>(color: &C) -> C {
    color.complement().to_flat()
}

/// A random flat color, light or dark.
pub fn random_flat_color<C: RGBColor>() -> C {
    let mut rng = thread_rng();
    let color = FlatColor::random(&mut rng);
    color.color(Shade::random(&mut rng))
}

/// A random flat color in the given shade.
pub fn random_flat_color_with_shade<C: RGBColor>(shade: Shade) -> C {
    FlatColor::random(&mut thread_rng()).color(shade)
}

/// Black or white (flat versions if `flat`) depending on which is
/// readable on `background`.
#[inline]
pub fn contrast_color_of<C: RGBColor>(background: &C, flat: bool) -> C {
    background.contrast(flat)
}

/// Rasterize a linear gradient through `colors`.
pub fn gradient_color<C: RGBColor>(style: GradientStyle, width: u32, height: u32,
                                   colors: Vec<C>) -> Result<Raster<C>> {
    GradientSpec::new(style, width, height, colors).build()
}

/// Parse a hex color and override its alpha.
pub fn hex_color(hex: &str, alpha: f64) -> Result<Color> {
    Color::from_hex(hex).map(|c| Color::from_rgba(RGBA { a: alpha, ..c }))
}

/// The mean color of an image, replaced by its nearest flat color if
/// `flat`.
pub fn average_color_from_image<C: RGBColor + Sync>(pixels: &[C], flat: bool) -> C {
    Extract::new(pixels).flat(flat).average()
}

/// Five colors built around `color` following `rule`.
pub fn color_scheme_of<C: RGBColor>(rule: ColorSchemeRule, color: &C,
                                    flat: bool) -> Palette<C> {
    Palette::from_seed(color, rule, flat)
}

/// The five most frequent colors of an image.
pub fn colors_from_image<C: RGBColor + Sync>(pixels: &[C], flat: bool) -> Palette<C> {
    Palette::from_image(pixels, flat)
}

/// The fully transparent color.
pub fn clear_color<C: RGBColor>() -> C {
    C::from_rgba(RGBA::new(0., 0., 0., 0.))
}
