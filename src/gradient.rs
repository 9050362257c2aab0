//! Multi-color gradients and their rasterization.

use log::trace;
use rgb::RGBA;
use crate::{ColorRange, Error, Gradient, RGBColor, Result};

/// Direction of a rasterized gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientStyle {
    /// From the left column to the right column.
    Horizontal,
    /// From the top row to the bottom row.
    Vertical,
    /// From the top left corner to the bottom right corner.
    Diagonal,
    /// From the center outwards; the last color is reached at half the
    /// larger side of the frame and continues to the corners.
    Radial,
}

/// How colors are blended between two stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Component-wise linear interpolation of red, green, blue and
    /// alpha.
    #[default]
    Linear,
    /// Interpolation in the CIE LCh color space, see
    /// [`RGBColor::gradient`].
    Perceptual,
}

enum Ramp<Color> {
    Solid(RGBA<f64>),
    Linear(Vec<RGBA<f64>>), // Invariant: length ≥ 2
    Perceptual(Vec<Gradient<Color>>), // Invariant: length ≥ 1
}

/// A gradient going through a list of colors, equally spaced on
/// \[0, 1\].  See the [`ColorRange`] trait for methods.
pub struct Stops<Color> {
    ramp: Ramp<Color>,
}

impl<Color: RGBColor> Stops<Color> {
    /// Return the gradient through `colors`, or `None` if `colors` is
    /// empty.  A single color gives a constant range.
    pub fn new(colors: &[Color], interpolation: Interpolation) -> Option<Self> {
        if colors.is_empty() { None }
        else { Some(Self::ramp(colors, interpolation)) }
    }

    /// Same as [`Stops::new`] with a transparent constant range for
    /// an empty list.
    pub(crate) fn ramp(colors: &[Color], interpolation: Interpolation) -> Self {
        let ramp = match (colors, interpolation) {
            ([], _) => Ramp::Solid(RGBA::new(0., 0., 0., 0.)),
            ([c], _) => Ramp::Solid(c.to_rgba()),
            (_, Interpolation::Linear) =>
                Ramp::Linear(colors.iter().map(|c| c.to_rgba()).collect()),
            (_, Interpolation::Perceptual) =>
                Ramp::Perceptual(colors.windows(2)
                                 .map(|c| c[0].gradient(&c[1]))
                                 .collect()),
        };
        Stops { ramp }
    }
}

#[inline]
fn lerp(c0: RGBA<f64>, c1: RGBA<f64>, t: f64) -> RGBA<f64> {
    RGBA { r: c0.r + t * (c1.r - c0.r), g: c0.g + t * (c1.g - c0.g),
           b: c0.b + t * (c1.b - c0.b), a: c0.a + t * (c1.a - c0.a) }
}

/// Split `t` ∈ \[0, 1\] among `n ≥ 1` segments: return the segment
/// index and the position in it.
#[inline]
fn segment(t: f64, n: usize) -> (usize, f64) {
    let tn = t * n as f64;
    let i = (tn.trunc() as usize).min(n - 1);
    (i, tn - i as f64)
}

impl<Color> ColorRange<Color> for Stops<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        match &self.ramp {
            Ramp::Solid(c) => Color::from_rgba(*c),
            Ramp::Linear(c) => {
                let (i, s) = segment(t, c.len() - 1);
                Color::from_rgba(lerp(c[i], c[i + 1], s))
            }
            Ramp::Perceptual(g) => {
                let (i, s) = segment(t, g.len());
                g[i].rgb_unchecked(s)
            }
        }
    }
}

/// A rectangular pixel buffer, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Raster<Color> {
    width: u32,
    height: u32,
    pixels: Vec<Color>, // Invariant: length = width * height
}

impl<Color> Raster<Color> {
    /// Number of columns.
    pub fn width(&self) -> u32 { self.width }

    /// Number of rows.
    pub fn height(&self) -> u32 { self.height }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[Color] { &self.pixels }

    /// Consume the raster, returning its pixels row by row.
    pub fn into_pixels(self) -> Vec<Color> { self.pixels }

    /// The pixel at column `x` and row `y`, if inside the raster.
    pub fn get(&self, x: u32, y: u32) -> Option<&Color> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Iterate over the rows of the raster.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Color> {
        self.pixels.chunks_exact(self.width as usize)
    }
}

/// Description of a rasterized gradient.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use chameleon::{GradientSpec, GradientStyle};
/// let red = RGB8::new(255, 0, 0);
/// let blue = RGB8::new(0, 0, 255);
/// let img = GradientSpec::new(GradientStyle::Horizontal, 3, 2,
///                             vec![red, blue]).build()?;
/// assert_eq!(img.get(0, 1), Some(&red));
/// assert_eq!(img.get(1, 0), Some(&RGB8::new(128, 0, 128)));
/// assert_eq!(img.get(2, 0), Some(&blue));
/// # Ok::<(), chameleon::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec<Color> {
    /// Direction along which the colors vary.
    pub style: GradientStyle,
    /// Width of the raster, in pixels.
    pub width: u32,
    /// Height of the raster, in pixels.
    pub height: u32,
    /// The colors, in order from the start to the end of the gradient.
    pub colors: Vec<Color>,
    /// How colors are blended between two consecutive stops.
    pub interpolation: Interpolation,
}

/// Position of `i` on \[0, 1\] when `0 ..= last` is mapped onto it.
#[inline]
fn ratio(i: u32, last: u32) -> f64 {
    if last == 0 { 0. } else { i as f64 / last as f64 }
}

impl GradientStyle {
    /// The gradient parameter of the pixel `(x, y)` in a `w`×`h` frame.
    fn param(self, x: u32, y: u32, w: u32, h: u32) -> f64 {
        match self {
            GradientStyle::Horizontal => ratio(x, w - 1),
            GradientStyle::Vertical => ratio(y, h - 1),
            GradientStyle::Diagonal => {
                let last = (w - 1) as u64 + (h - 1) as u64;
                if last == 0 { 0. } else { (x as u64 + y as u64) as f64 / last as f64 }
            }
            GradientStyle::Radial => {
                let dx = x as f64 - (w - 1) as f64 / 2.;
                let dy = y as f64 - (h - 1) as f64 / 2.;
                let radius = w.max(h) as f64 / 2.;
                (dx.hypot(dy) / radius).min(1.)
            }
        }
    }
}

impl<Color> GradientSpec<Color>
where Color: RGBColor {
    /// A gradient with [`Interpolation::Linear`].
    pub fn new(style: GradientStyle, width: u32, height: u32,
               colors: Vec<Color>) -> Self {
        GradientSpec { style, width, height, colors,
                       interpolation: Interpolation::Linear }
    }

    /// Set the interpolation between consecutive colors.
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Rasterize the gradient.
    ///
    /// Fails with [`Error::InvalidDimensions`] if the width or height
    /// is zero (or the buffer would not fit in memory) and with
    /// [`Error::NoColors`] if no color is given.
    pub fn build(&self) -> Result<Raster<Color>> {
        let (width, height) = (self.width, self.height);
        let invalid = Error::InvalidDimensions { width, height };
        if width == 0 || height == 0 { return Err(invalid) }
        let len = (width as usize).checked_mul(height as usize)
            .filter(|n| n.checked_mul(std::mem::size_of::<Color>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize))
            .ok_or(invalid)?;
        let stops = Stops::new(&self.colors, self.interpolation)
            .ok_or(Error::NoColors)?;
        trace!("rasterizing {:?} gradient {}x{} with {} colors",
               self.style, width, height, self.colors.len());
        let mut pixels = Vec::with_capacity(len);
        for y in 0 .. height {
            for x in 0 .. width {
                pixels.push(stops.rgb(self.style.param(x, y, width, height)));
            }
        }
        Ok(Raster { width, height, pixels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA8};

    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
    const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

    #[test]
    fn single_color_is_solid() {
        for style in [GradientStyle::Horizontal, GradientStyle::Vertical,
                      GradientStyle::Diagonal, GradientStyle::Radial] {
            let img = GradientSpec::new(style, 10, 10, vec![RED]).build().unwrap();
            assert_eq!((img.width(), img.height()), (10, 10));
            assert_eq!(img.pixels().len(), 100);
            assert!(img.pixels().iter().all(|&c| c == RED));
        }
    }

    #[test]
    fn invalid_dimensions() {
        let spec = GradientSpec::new(GradientStyle::Horizontal, 0, 10, vec![RED]);
        assert_eq!(spec.build(), Err(Error::InvalidDimensions { width: 0, height: 10 }));
        let spec = GradientSpec::new(GradientStyle::Radial, 10, 0, vec![RED]);
        assert!(matches!(spec.build(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn no_colors() {
        let spec = GradientSpec::<RGB8>::new(GradientStyle::Vertical, 4, 4, vec![]);
        assert_eq!(spec.build(), Err(Error::NoColors));
    }

    #[test]
    fn horizontal_and_vertical() {
        let img = GradientSpec::new(GradientStyle::Horizontal, 5, 3,
                                    vec![RED, GREEN, BLUE]).build().unwrap();
        for row in img.rows() {
            assert_eq!(row[0], RED);
            assert_eq!(row[2], GREEN);
            assert_eq!(row[4], BLUE);
            assert_eq!(row[1], RGB8::new(128, 128, 0));
        }
        let img = GradientSpec::new(GradientStyle::Vertical, 2, 3,
                                    vec![RED, BLUE]).build().unwrap();
        assert_eq!(img.get(1, 0), Some(&RED));
        assert_eq!(img.get(0, 2), Some(&BLUE));
        assert_eq!(img.get(2, 0), None);
    }

    #[test]
    fn diagonal_corners() {
        let img = GradientSpec::new(GradientStyle::Diagonal, 4, 7,
                                    vec![RED, BLUE]).build().unwrap();
        assert_eq!(img.get(0, 0), Some(&RED));
        assert_eq!(img.get(3, 6), Some(&BLUE));
        assert_eq!(img.get(3, 0), img.get(0, 3));
    }

    #[test]
    fn radial() {
        let img = GradientSpec::new(GradientStyle::Radial, 9, 9,
                                    vec![RED, BLUE]).build().unwrap();
        assert_eq!(img.get(4, 4), Some(&RED));
        assert_eq!(img.get(0, 0), Some(&BLUE));
        assert_eq!(img.get(0, 4), img.get(4, 8));
    }

    #[test]
    fn perceptual_ends() {
        let spec = GradientSpec::new(GradientStyle::Horizontal, 16, 1,
                                     vec![RED, BLUE])
            .interpolation(Interpolation::Perceptual);
        let img = spec.build().unwrap();
        assert_eq!(img.get(0, 0), Some(&RED));
        assert_eq!(img.get(15, 0), Some(&BLUE));
        // LCh goes through purple rather than a dull gray.
        let mid = img.get(8, 0).unwrap();
        assert!(mid.r > 0 && mid.b > 0);
    }

    #[test]
    fn alpha_is_interpolated() {
        let clear = RGBA8::new(255, 255, 255, 0);
        let img = GradientSpec::new(GradientStyle::Horizontal, 3, 1,
                                    vec![clear, RGBA8::new(255, 255, 255, 255)])
            .build().unwrap();
        let alphas: Vec<_> = img.pixels().iter().map(|c| c.a).collect();
        assert_eq!(alphas, vec![0, 128, 255]);
    }
}
