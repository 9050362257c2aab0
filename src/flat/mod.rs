//! The flat color table and nearest flat color lookup.

use lazy_static::lazy_static;
use rand::Rng;
use rgb::RGBA;
use crate::{Hsb, RGBColor};

mod ty;
pub use ty::{FlatColor, Shade};

/// A row of the flat color table.
struct FlatEntry {
    color: FlatColor,
    shade: Shade,
    rgb: RGBA<f64>,
    cone: [f64; 3],
}

fn entry(color: FlatColor, shade: Shade) -> FlatEntry {
    let rgb = color.hsb(shade).to_rgb();
    // The cone position is computed from the RGB value so that looking
    // up a flat color finds that very entry.
    FlatEntry { color, shade, rgb, cone: Hsb::from_rgb(rgb).cone() }
}

lazy_static! {
    /// Light shades first, then dark ones, each in [`FlatColor::ALL`]
    /// order.  Ties in [`nearest`] are won by the earlier row.
    static ref FLAT_TABLE: Vec<FlatEntry> = {
        [Shade::Light, Shade::Dark].into_iter()
            .flat_map(|shade| FlatColor::ALL.into_iter()
                      .map(move |color| entry(color, shade)))
            .collect()
    };
}

fn distance2(p: &[f64; 3], q: &[f64; 3]) -> f64 {
    let (dx, dy, dz) = (p[0] - q[0], p[1] - q[1], p[2] - q[2]);
    dx * dx + dy * dy + dz * dz
}

fn nearest_entry(c: RGBA<f64>) -> &'static FlatEntry {
    let p = Hsb::from_rgb(c).cone();
    let mut best = &FLAT_TABLE[0];
    let mut best_d = distance2(&p, &best.cone);
    for e in FLAT_TABLE.iter().skip(1) {
        let d = distance2(&p, &e.cone);
        if d < best_d {
            best = e;
            best_d = d;
        }
    }
    best
}

/// Return the flat color nearest to `c` in the HSB cone.
pub(crate) fn nearest(c: RGBA<f64>) -> (FlatColor, Shade) {
    let e = nearest_entry(c);
    (e.color, e.shade)
}

/// Replace `c` by its nearest flat color, keeping the alpha of `c`.
pub(crate) fn to_flat(c: RGBA<f64>) -> RGBA<f64> {
    RGBA { a: c.a, ..nearest_entry(c).rgb }
}

impl FlatColor {
    /// The HSB value of the color in the given shade (opaque).
    pub fn hsb(self, shade: Shade) -> Hsb {
        let (light, dark) = self.hsb_data();
        let [h, s, b] = match shade { Shade::Light => light,
                                      Shade::Dark => dark };
        Hsb::new(h, s / 100., b / 100., 1.)
    }

    /// Return the color in the given shade.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chameleon::{FlatColor, Shade};
    /// let plum: RGB8 = FlatColor::Plum.color(Shade::Light);
    /// assert_eq!(plum, RGB8::new(94, 52, 94));
    /// ```
    #[inline]
    pub fn color<C: RGBColor>(self, shade: Shade) -> C {
        C::from_rgba(self.hsb(shade).to_rgb())
    }

    /// Return the light shade of the color.
    #[inline]
    pub fn light<C: RGBColor>(self) -> C { self.color(Shade::Light) }

    /// Return the dark shade of the color.
    #[inline]
    pub fn dark<C: RGBColor>(self) -> C { self.color(Shade::Dark) }

    /// Pick a flat color uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> FlatColor {
        FlatColor::ALL[rng.gen_range(0 .. FlatColor::ALL.len())]
    }
}

impl Shade {
    /// Pick a shade uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Shade {
        if rng.gen_bool(0.5) { Shade::Light } else { Shade::Dark }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rgb::{RGB8, RGBA8};

    #[test]
    fn table_is_complete() {
        assert_eq!(FLAT_TABLE.len(), 48);
        assert_eq!((FLAT_TABLE[0].color, FLAT_TABLE[0].shade),
                   (FlatColor::Black, Shade::Light));
        assert_eq!((FLAT_TABLE[47].color, FLAT_TABLE[47].shade),
                   (FlatColor::Yellow, Shade::Dark));
    }

    #[test]
    fn flat_colors_are_fixed_points() {
        for color in FlatColor::ALL {
            for shade in [Shade::Light, Shade::Dark] {
                let c: RGBA<f64> = color.color(shade);
                assert_eq!(c.nearest_flat(), (color, shade));
                assert_eq!(c.to_flat(), c);
                let c8: RGB8 = color.color(shade);
                assert_eq!(c8.to_flat(), c8, "{}", color.name());
            }
        }
    }

    #[test]
    fn nearest_examples() {
        assert_eq!(RGB8::new(255, 0, 0).nearest_flat().0, FlatColor::Red);
        assert_eq!(RGB8::new(0, 0, 0).nearest_flat(),
                   (FlatColor::Black, Shade::Dark));
        assert_eq!(RGB8::new(255, 255, 255).nearest_flat(),
                   (FlatColor::White, Shade::Light));
        assert_eq!(RGB8::new(250, 220, 0).nearest_flat().0, FlatColor::Yellow);
        assert_eq!(RGB8::new(40, 160, 80).nearest_flat().0, FlatColor::Green);
    }

    #[test]
    fn to_flat_keeps_alpha() {
        let c = RGBA8::new(250, 10, 10, 40).to_flat();
        assert_eq!(c.a, 40);
        assert_eq!(RGB8::new(c.r, c.g, c.b), FlatColor::Red.light::<RGB8>());
    }

    #[test]
    fn random_is_reproducible() {
        let mut rng0 = StdRng::seed_from_u64(7);
        let mut rng1 = StdRng::seed_from_u64(7);
        let v0: Vec<_> = (0 .. 20).map(|_| FlatColor::random(&mut rng0)).collect();
        let v1: Vec<_> = (0 .. 20).map(|_| FlatColor::random(&mut rng1)).collect();
        assert_eq!(v0, v1);
        let mut rng = StdRng::seed_from_u64(1);
        let shades: Vec<_> = (0 .. 64).map(|_| Shade::random(&mut rng)).collect();
        assert!(shades.contains(&Shade::Light) && shades.contains(&Shade::Dark));
    }
}
