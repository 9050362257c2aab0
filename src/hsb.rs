//! Hue, saturation, brightness.

use rgb::RGBA;

/// A color in the HSB (aka HSV) color space with an alpha component.
///
/// Build it with [`Hsb::new`] or [`Hsb::from_rgb`] to get normalized
/// components; [`Hsb::to_rgb`] normalizes again so that a value with
/// out-of-range fields still converts to a valid color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    /// The hue in degrees, in \[0, 360).
    pub h: f64,
    /// The saturation, in \[0, 1\].
    pub s: f64,
    /// The brightness, in \[0, 1\].
    pub b: f64,
    /// Alpha component, in \[0, 1\].
    pub a: f64,
}

/// Clamp `x` to \[0, 1\], NaN being mapped to `0.`.
#[inline]
pub(crate) fn unit(x: f64) -> f64 {
    if x.is_nan() { 0. } else { x.clamp(0., 1.) }
}

/// Bring the angle `h` (in degrees) into \[0, 360).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() { return 0. }
    let h = h.rem_euclid(360.);
    // `rem_euclid` rounds tiny negative angles up to 360.
    if h >= 360. { 0. } else { h }
}

impl Hsb {
    /// Create a HSB color, wrapping the hue and clamping the other
    /// components.
    pub fn new(h: f64, s: f64, b: f64, a: f64) -> Hsb {
        Hsb { h: wrap_hue(h), s: unit(s), b: unit(b), a: unit(a) }
    }

    /// Convert a RGBA color with components in \[0, 1\].  Achromatic
    /// colors (grays, black, white) get a hue and saturation of `0.`.
    pub fn from_rgb(c: RGBA<f64>) -> Hsb {
        let (r, g, b) = (unit(c.r), unit(c.g), unit(c.b));
        let max = r.max(g).max(b);
        let delta = max - r.min(g).min(b);
        let s = if max > 0. { delta / max } else { 0. };
        let h = {
            if delta <= 0. { 0. }
            else if max == r { 60. * ((g - b) / delta) }
            else if max == g { 60. * ((b - r) / delta + 2.) }
            else { 60. * ((r - g) / delta + 4.) } };
        Hsb { h: wrap_hue(h), s, b: max, a: unit(c.a) }
    }

    /// Return the RGBA color, components in \[0, 1\].
    pub fn to_rgb(&self) -> RGBA<f64> {
        let h6 = wrap_hue(self.h) / 60.;
        let v = unit(self.b);
        let c = v * unit(self.s);
        let x = c * (1. - (h6 % 2. - 1.).abs());
        let m = v - c;
        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.),
            1 => (x, c, 0.),
            2 => (0., c, x),
            3 => (0., x, c),
            4 => (x, 0., c),
            _ => (c, 0., x),
        };
        RGBA { r: r + m, g: g + m, b: b + m, a: unit(self.a) }
    }

    /// Rotate the hue by `degrees`.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Hsb {
        Hsb { h: wrap_hue(self.h + degrees), ..self }
    }

    /// The color 180° away on the color wheel.
    #[inline]
    pub fn complement(self) -> Hsb { self.rotate(180.) }

    /// Cartesian coordinates in the HSB cone.  Unlike the raw
    /// components, distances there do not depend on the (meaningless)
    /// hue of dark or unsaturated colors.
    pub(crate) fn cone(&self) -> [f64; 3] {
        let radius = self.s * self.b;
        let angle = self.h.to_radians();
        [radius * angle.cos(), radius * angle.sin(), self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(c0: RGBA<f64>, c1: RGBA<f64>) -> bool {
        (c0.r - c1.r).abs() <= 1e-3 && (c0.g - c1.g).abs() <= 1e-3
            && (c0.b - c1.b).abs() <= 1e-3 && (c0.a - c1.a).abs() <= 1e-3
    }

    #[test]
    fn primaries() {
        let red = Hsb::from_rgb(RGBA::new(1., 0., 0., 1.));
        assert_eq!((red.h, red.s, red.b), (0., 1., 1.));
        let green = Hsb::from_rgb(RGBA::new(0., 1., 0., 1.));
        assert!((green.h - 120.).abs() < 1e-12);
        let blue = Hsb::from_rgb(RGBA::new(0., 0., 1., 0.5));
        assert!((blue.h - 240.).abs() < 1e-12);
        assert_eq!(blue.a, 0.5);
    }

    #[test]
    fn achromatic() {
        for x in [0., 0.25, 1.] {
            let hsb = Hsb::from_rgb(RGBA::new(x, x, x, 1.));
            assert_eq!((hsb.h, hsb.s, hsb.b), (0., 0., x));
        }
    }

    #[test]
    fn round_trip() {
        let steps = [0., 0.1, 0.33, 0.5, 0.77, 0.9, 1.];
        for r in steps { for g in steps { for b in steps {
            let c = RGBA::new(r, g, b, 0.8);
            let back = Hsb::from_rgb(c).to_rgb();
            assert!(close(c, back), "{c:?} ≉ {back:?}");
        }}}
    }

    #[test]
    fn out_of_range_is_clamped() {
        let hsb = Hsb::new(-90., 1.5, -0.2, 2.);
        assert_eq!(hsb, Hsb { h: 270., s: 1., b: 0., a: 1. });
        let c = Hsb { h: 720., s: 2., b: 2., a: f64::NAN }.to_rgb();
        assert!(close(c, RGBA::new(1., 0., 0., 0.)));
        let c = Hsb::from_rgb(RGBA::new(2., -1., f64::NAN, 1.));
        assert_eq!((c.h, c.s, c.b), (0., 1., 1.));
    }

    #[test]
    fn wrap() {
        assert_eq!(wrap_hue(360.), 0.);
        assert_eq!(wrap_hue(-1e-20), 0.);
        assert_eq!(wrap_hue(f64::INFINITY), 0.);
        assert!((Hsb::new(350., 1., 1., 1.).rotate(20.).h - 10.).abs() < 1e-12);
    }
}
