//! Five-color palettes.

use std::ops::Index;
use rgb::RGBA;
use crate::{extract::Extract, gradient::{Interpolation, Stops}, Hsb, RGBColor};

/// Number of colors in a [`Palette`].
pub const PALETTE_LEN: usize = 5;

/// Rule deriving a [`Palette`] from a seed color.
///
/// Every rule is a fixed list of five steps applied to the seed's hue,
/// saturation and brightness.  The seed itself is always the middle
/// color (index 2) of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSchemeRule {
    /// Neighbouring hues, 20° and 40° on each side of the seed.
    Analogous,
    /// The seed and its complement, each with a lighter or darker
    /// variant.
    Complementary,
    /// Three hues 120° apart.  The two non-seed hues are repeated with
    /// a darker variant to fill the palette.
    Triadic,
    /// The seed and the two hues adjacent to its complement (150° and
    /// 210°).
    SplitComplementary,
    /// Four hues 90° apart, the complement being repeated darker.
    Tetradic,
    /// The seed hue only, from darker and more saturated to lighter and
    /// less saturated.
    Monochromatic,
}

/// A step of a rule: hue offset in degrees, saturation and brightness
/// deltas.
#[derive(Clone, Copy, Debug)]
struct Step {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

const fn step(hue: f64, saturation: f64, brightness: f64) -> Step {
    Step { hue, saturation, brightness }
}

const SEED: Step = step(0., 0., 0.);

impl Step {
    fn apply(&self, seed: RGBA<f64>, hsb: Hsb) -> RGBA<f64> {
        if self.hue == 0. && self.saturation == 0. && self.brightness == 0. {
            return seed
        }
        Hsb::new(hsb.h + self.hue, hsb.s + self.saturation,
                 hsb.b + self.brightness, hsb.a).to_rgb()
    }
}

impl ColorSchemeRule {
    /// All rules.
    pub const ALL: [ColorSchemeRule; 6] = {
        use ColorSchemeRule::*;
        [Analogous, Complementary, Triadic, SplitComplementary, Tetradic,
         Monochromatic]
    };

    fn steps(self) -> [Step; PALETTE_LEN] {
        use ColorSchemeRule::*;
        match self {
            Analogous => [step(-40., 0., 0.), step(-20., 0., 0.), SEED,
                          step(20., 0., 0.), step(40., 0., 0.)],
            Complementary => [step(0., 0.1, -0.3), step(0., -0.1, 0.1), SEED,
                              step(180., 0., 0.), step(180., -0.1, 0.1)],
            Triadic => [step(120., -0.1, 0.), step(120., 0., -0.2), SEED,
                        step(240., 0., -0.2), step(240., -0.1, 0.)],
            SplitComplementary => [step(150., -0.1, 0.), step(150., 0., -0.2),
                                   SEED, step(210., 0., -0.2),
                                   step(210., -0.1, 0.)],
            Tetradic => [step(90., 0., 0.), step(180., 0., -0.2), SEED,
                         step(180., 0., 0.), step(270., 0., 0.)],
            Monochromatic => [step(0., 0.2, -0.4), step(0., 0.1, -0.2), SEED,
                              step(0., -0.15, 0.15), step(0., -0.3, 0.3)],
        }
    }
}

/// An ordered set of exactly [`PALETTE_LEN`] colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette<Color> {
    colors: [Color; PALETTE_LEN],
}

impl<Color> Palette<Color> {
    /// Create a palette from its colors.
    pub fn new(colors: [Color; PALETTE_LEN]) -> Self { Palette { colors } }

    /// Returns the number of colors in the palette, always
    /// [`PALETTE_LEN`].
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize { PALETTE_LEN }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[Color; PALETTE_LEN] { &self.colors }

    /// Iterate over the colors, from first to last.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }

    /// Consume the palette, returning its colors.
    pub fn into_colors(self) -> [Color; PALETTE_LEN] { self.colors }

    /// Apply `f` to each color.
    pub fn map<D>(self, f: impl FnMut(Color) -> D) -> Palette<D> {
        Palette { colors: self.colors.map(f) }
    }
}

impl<Color> Palette<Color>
where Color: RGBColor {
    /// Build the palette of `rule` around `seed` (placed at index 2).
    /// When `flat` is set, every color is replaced by its nearest flat
    /// color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::{ColorSchemeRule, Palette};
    /// let seed = RGB8::new(30, 120, 200);
    /// let p = Palette::from_seed(&seed, ColorSchemeRule::Triadic, false);
    /// assert_eq!(p.len(), 5);
    /// assert_eq!(p[2], seed);
    /// ```
    pub fn from_seed(seed: &Color, rule: ColorSchemeRule, flat: bool) -> Self {
        let rgba = seed.to_rgba();
        let hsb = Hsb::from_rgb(rgba);
        let colors = rule.steps().map(|s| {
            let c = Color::from_rgba(s.apply(rgba, hsb));
            if flat { c.to_flat() } else { c }
        });
        Palette { colors }
    }

    /// The five most frequent colors of an image, see [`Extract`] for
    /// the details and the tunable parameters.
    pub fn from_image(pixels: &[Color], flat: bool) -> Self
    where Color: Sync {
        Extract::new(pixels).flat(flat).palette()
    }

    /// Replace every color by its nearest flat color.
    pub fn to_flat(&self) -> Self {
        Palette { colors: std::array::from_fn(|i| self.colors[i].to_flat()) }
    }

    /// Convert the palette to another color encoding.
    pub fn convert<D: RGBColor>(&self) -> Palette<D> {
        Palette { colors: std::array::from_fn(
            |i| D::from_rgba(self.colors[i].to_rgba())) }
    }

    /// Returns a perceptual gradient going through the colors of the
    /// palette in order.
    pub fn gradient(&self) -> Stops<Color> {
        Stops::ramp(&self.colors, Interpolation::Perceptual)
    }
}

impl<Color> Index<usize> for Palette<Color> {
    type Output = Color;

    fn index(&self, i: usize) -> &Color { &self.colors[i] }
}

impl<Color> IntoIterator for Palette<Color> {
    type Item = Color;
    type IntoIter = std::array::IntoIter<Color, PALETTE_LEN>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl<'a, Color> IntoIterator for &'a Palette<Color> {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorRange, FlatColor};
    use rgb::{RGB8, RGBA8};

    const SEEDS: [RGB8; 5] = [RGB8 { r: 30, g: 120, b: 200 },
                              RGB8 { r: 0, g: 0, b: 0 },
                              RGB8 { r: 255, g: 255, b: 255 },
                              RGB8 { r: 128, g: 128, b: 128 },
                              RGB8 { r: 250, g: 40, b: 10 }];

    #[test]
    fn seed_in_the_middle() {
        for rule in ColorSchemeRule::ALL {
            for seed in SEEDS {
                let p = Palette::from_seed(&seed, rule, false);
                assert_eq!(p.iter().count(), PALETTE_LEN);
                assert_eq!(p[2], seed, "{rule:?}");
            }
        }
    }

    #[test]
    fn deterministic() {
        for rule in ColorSchemeRule::ALL {
            let seed = RGBA8::new(200, 150, 30, 128);
            assert_eq!(Palette::from_seed(&seed, rule, true),
                       Palette::from_seed(&seed, rule, true));
            assert!(Palette::from_seed(&seed, rule, false).iter()
                    .all(|c| c.a == 128));
        }
    }

    #[test]
    fn complementary_hues() {
        let seed = RGB8::new(250, 40, 10);
        let p = Palette::from_seed(&seed, ColorSchemeRule::Complementary, false);
        let h = seed.to_hsb().h;
        let hc = p[3].to_hsb().h;
        assert!(((hc - h).rem_euclid(360.) - 180.).abs() < 1.);
        assert!(p[0].to_hsb().b < seed.to_hsb().b);
    }

    #[test]
    fn analogous_hues() {
        let seed = RGBA::new(0.2, 0.4, 0.9, 1.);
        let p = Palette::from_seed(&seed, ColorSchemeRule::Analogous, false);
        let h = seed.to_hsb().h;
        for (i, dh) in [-40., -20., 0., 20., 40.].into_iter().enumerate() {
            let hi = p[i].to_hsb().h;
            let diff = (hi - h - dh).rem_euclid(360.);
            assert!(diff < 1e-3 || diff > 360. - 1e-3, "{i}: {hi} vs {h} + {dh}");
        }
    }

    #[test]
    fn flat_scheme() {
        let seed = RGB8::new(30, 120, 200);
        let p = Palette::from_seed(&seed, ColorSchemeRule::Tetradic, true);
        for c in &p {
            assert_eq!(c.to_flat(), *c);
        }
        assert_eq!(p, Palette::from_seed(&seed, ColorSchemeRule::Tetradic, false)
                   .to_flat());
    }

    #[test]
    fn palette_gradient() {
        let p = Palette::new([FlatColor::Red.light::<RGB8>(),
                              FlatColor::Orange.light(),
                              FlatColor::Yellow.light(),
                              FlatColor::Green.light(),
                              FlatColor::Blue.light()]);
        let g = p.gradient();
        assert_eq!(g.rgb(0.), p[0]);
        assert_eq!(g.rgb(0.5), p[2]);
        assert_eq!(g.rgb(1.), p[4]);
        let back: Palette<RGB8> = p.convert::<RGBA<f64>>().convert();
        assert_eq!(back, p);
    }
}
