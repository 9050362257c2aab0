//! Flat colors, color schemes and gradients.
//!
//! - [`RGBColor`]: HSB view, complement, contrast and flat lookup for
//!   every pixel type of the [`rgb`] crate.
//! - [`FlatColor`]: the table of named flat colors.
//! - [`Palette`]: five colors derived from a seed color and a
//!   [`ColorSchemeRule`], or extracted from an image ([`Extract`]).
//! - [`GradientSpec`]: rasterized gradients.
//! - [`Theme`]: resolved once into the colors of an application.
//!
//! The [`shorthand`] module offers the same functionality as free
//! functions.

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod hsb;
mod contrast;
mod flat;
mod scheme;
mod extract;
mod gradient;
mod hex;
mod theme;
pub mod shorthand;

pub use error::{Error, Result};
pub use hsb::Hsb;
pub use contrast::{relative_luminance, LUMINANCE_THRESHOLD};
pub use flat::{FlatColor, Shade};
pub use scheme::{ColorSchemeRule, Palette, PALETTE_LEN};
pub use extract::{Extract, DEFAULT_MAX_SAMPLES, DEFAULT_MIN_ALPHA};
pub use gradient::{GradientSpec, GradientStyle, Interpolation, Raster, Stops};
pub use theme::{Appearance, ContentStyle, Theme};

use hsb::unit;

/// The canonical color: red, green, blue and alpha in \[0, 1\].
pub type Color = RGBA<f64>;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return `n` colors sampled uniformly, both ends included.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let colors = red.gradient(&blue).sample(5);
    /// assert_eq!(colors[0], red);
    /// assert_eq!(colors[4], blue);
    /// ```
    fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => vec![],
            1 => vec![self.rgb(0.)],
            _ => {
                let last = (n - 1) as f64;
                (0 .. n).map(|i| self.rgb(i as f64 / last)).collect()
            }
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
///
/// Integer encodings are scaled to \[0, 1\]; converting back rounds to
/// the nearest representable value, so that a color survives
/// `from_rgba(c.to_rgba())` unchanged.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    /// Components outside this range are clamped.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return the HSB view of the color.
    #[inline]
    fn to_hsb(&self) -> Hsb { Hsb::from_rgb(self.to_rgba()) }

    /// Create a color from its hue (in degrees), saturation,
    /// brightness and alpha.  Out of range values are wrapped (hue)
    /// or clamped (other components).
    #[inline]
    fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self::from_rgba(Hsb::new(h, s, b, a).to_rgb())
    }

    /// Return the complementary color: the hue is rotated by 180°,
    /// saturation, brightness and alpha are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::RGBColor;
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(red.complement(), RGB8::new(0, 255, 255));
    /// ```
    #[inline]
    fn complement(&self) -> Self {
        Self::from_rgba(self.to_hsb().complement().to_rgb())
    }

    /// Relative luminance of the color (in \[0, 1\]).
    #[inline]
    fn luminance(&self) -> f64 { relative_luminance(self.to_rgba()) }

    /// Return black or white, whichever is readable on top of `self`.
    /// With `flat`, the flat versions of black and white are used.
    /// The alpha of `self` is kept.
    #[inline]
    fn contrast(&self, flat: bool) -> Self { contrast::contrast(self, flat) }

    /// Return the nearest flat color and its shade.
    #[inline]
    fn nearest_flat(&self) -> (FlatColor, Shade) {
        flat::nearest(self.to_rgba())
    }

    /// Replace the color by the nearest flat color, keeping its alpha.
    #[inline]
    fn to_flat(&self) -> Self { Self::from_rgba(flat::to_flat(self.to_rgba())) }

    /// Return a gradient from color `c0` to color `c1`.  The
    /// interpolation is done in the CIE LCh color space so that the
    /// intermediate colors are perceptually evenly spaced.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Return the hexadecimal notation `#rrggbb` of the color, followed
    /// by the alpha byte when the color is not opaque.
    fn to_hex(&self) -> String { hex::format(self.to_rgba()) }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::RGBColor;
    /// assert_eq!(RGB8::from_hex("#ff8000"), Ok(RGB8::new(255, 128, 0)));
    /// assert!(RGB8::from_hex("orange").is_err());
    /// ```
    fn from_hex(s: &str) -> Result<Self> { hex::parse(s).map(Self::from_rgba) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

#[inline]
fn clamp_rgba(c: RGBA<f64>) -> RGBA<f64> {
    RGBA { r: unit(c.r), g: unit(c.g), b: unit(c.b), a: unit(c.a) }
}

#[inline]
fn to_u8(x: f64) -> u8 { (unit(x) * 255.).round() as u8 }

#[inline]
fn to_u16(x: f64) -> u16 { (unit(x) * 65535.).round() as u16 }

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { clamp_rgba(c) }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r, g: self.g, b: self.b, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB { r: unit(c.r), g: unit(c.g), b: unit(c.b) }
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b), a: to_u8(c.a) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: self.a as f64 / 65535. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b),
                 a: to_u16(c.a) }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r, g, b, a: self.a }
    }
}

/// Perceptual gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Copy, Debug)]
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    pub(crate) fn rgb_unchecked(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(clamp_rgba(lhc.to_rgb()))
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        self.rgb_unchecked(t)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(c0: RGBA<f64>, c1: RGBA<f64>, eps: f64) -> bool {
        (c0.r - c1.r).abs() <= eps && (c0.g - c1.g).abs() <= eps
            && (c0.b - c1.b).abs() <= eps && (c0.a - c1.a).abs() <= eps
    }

    #[test]
    fn integer_encodings_survive_conversion() {
        for x in [0u8, 1, 127, 128, 254, 255] {
            let c = RGBA8::new(x, 255 - x, x / 2, 200);
            assert_eq!(RGBA8::from_rgba(c.to_rgba()), c);
            let c = RGB16::new(x as u16 * 257, 1000, 65535);
            assert_eq!(RGB16::from_rgba(c.to_rgba()), c);
        }
    }

    #[test]
    fn hsb_round_trip() {
        for c in [RGBA::new(0.2, 0.4, 0.9, 1.), RGBA::new(1., 1., 1., 0.),
                  RGBA::new(0., 0., 0., 1.), RGBA::new(0.9, 0.1, 0.5, 0.3)] {
            let Hsb { h, s, b, a } = c.to_hsb();
            assert!(close(Color::from_hsb(h, s, b, a), c, 1e-3));
        }
    }

    #[test]
    fn complement_involution() {
        for c in [RGBA::new(0.2, 0.4, 0.9, 1.), RGBA::new(0.5, 0.5, 0.5, 1.),
                  RGBA::new(0.9, 0.8, 0.1, 0.4), RGBA::new(1., 0., 0., 1.)] {
            let cc = c.complement().complement();
            assert!(close(cc, c, 1e-3), "{cc:?} ≉ {c:?}");
        }
        let c = RGBA::new(0.9, 0.8, 0.1, 0.4);
        let (hsb, comp) = (c.to_hsb(), c.complement().to_hsb());
        assert!(((comp.h - hsb.h).rem_euclid(360.) - 180.).abs() < 1e-9);
        assert!((comp.s - hsb.s).abs() < 1e-9 && (comp.b - hsb.b).abs() < 1e-9);
        assert_eq!(comp.a, 0.4);
    }

    #[test]
    fn gradient_ends() {
        let c0 = RGBA::new(94. / 255., 0., 99. / 255., 1.);
        let c1 = RGBA::new(1., 235. / 255., 170. / 255., 1.);
        let g = c0.gradient(&c1);
        assert!(close(g.rgb(0.), c0, 1e-4));
        assert!(close(g.rgb(1.), c1, 1e-4));
        assert!(close(g.rgb(-3.), c0, 1e-4));
        for c in g.sample(11) {
            assert!(close(c, clamp_rgba(c), 0.));
        }
    }

    #[test]
    fn sample_counts() {
        let g = RGB8::new(0, 0, 0).gradient(&RGB8::new(255, 255, 255));
        assert!(g.sample(0).is_empty());
        assert_eq!(g.sample(1), vec![RGB8::new(0, 0, 0)]);
        assert_eq!(g.sample(7).len(), 7);
    }

    #[test]
    fn gray() {
        let g = RGB8::new(255, 0, 0).to_gray();
        assert_eq!((g.r, g.g, g.b), (76, 76, 76));
    }
}
