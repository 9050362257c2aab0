//! Black or white text on an arbitrary background.

use rgb::RGBA;
use crate::{hsb::unit, FlatColor, RGBColor, Shade};

/// Backgrounds whose [`relative_luminance`] is below this value get
/// white content, the others black content.
pub const LUMINANCE_THRESHOLD: f64 = 0.6;

/// Relative luminance of a color with components in \[0, 1\]:
/// `0.2126 R + 0.7152 G + 0.0722 B` on the encoded channels.
/// The alpha component is ignored.
#[inline]
pub fn relative_luminance(c: RGBA<f64>) -> f64 {
    0.2126 * unit(c.r) + 0.7152 * unit(c.g) + 0.0722 * unit(c.b)
}

pub(crate) fn contrast<C: RGBColor>(background: &C, flat: bool) -> C {
    let bg = background.to_rgba();
    let light_content = relative_luminance(bg) < LUMINANCE_THRESHOLD;
    let rgb = match (light_content, flat) {
        (true, false) => RGBA::new(1., 1., 1., 1.),
        (false, false) => RGBA::new(0., 0., 0., 1.),
        (true, true) => FlatColor::White.hsb(Shade::Light).to_rgb(),
        (false, true) => FlatColor::Black.hsb(Shade::Dark).to_rgb(),
    };
    C::from_rgba(RGBA { a: bg.a, ..rgb })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA8};

    #[test]
    fn luminance_weights() {
        assert_eq!(relative_luminance(RGBA::new(0., 0., 0., 1.)), 0.);
        assert!((relative_luminance(RGBA::new(1., 1., 1., 0.)) - 1.).abs() < 1e-12);
        assert!((relative_luminance(RGBA::new(0., 1., 0., 1.)) - 0.7152).abs() < 1e-12);
    }

    #[test]
    fn black_or_white() {
        let white = RGB8::new(255, 255, 255);
        let black = RGB8::new(0, 0, 0);
        assert_eq!(RGB8::new(0, 0, 128).contrast(false), white);
        assert_eq!(RGB8::new(255, 0, 0).contrast(false), white);
        assert_eq!(RGB8::new(255, 255, 0).contrast(false), black);
        assert_eq!(RGB8::new(240, 240, 240).contrast(false), black);
    }

    #[test]
    fn only_four_outcomes() {
        let flat_white: RGB8 = FlatColor::White.light();
        let flat_black: RGB8 = FlatColor::Black.dark();
        let allowed = [RGB8::new(0, 0, 0), RGB8::new(255, 255, 255),
                       flat_white, flat_black];
        for r in (0 ..= 255).step_by(15) {
            for g in (0 ..= 255).step_by(15) {
                for b in (0 ..= 255).step_by(51) {
                    let bg = RGB8::new(r, g, b);
                    for flat in [false, true] {
                        let c = bg.contrast(flat);
                        assert!(allowed.contains(&c), "{bg:?} → {c:?}");
                        let expected = if flat { &allowed[2 ..] }
                                       else { &allowed[.. 2] };
                        assert!(expected.contains(&c));
                    }
                }
            }
        }
    }

    #[test]
    fn keeps_alpha() {
        let c = RGBA8::new(10, 10, 10, 77).contrast(true);
        assert_eq!(c.a, 77);
        assert_eq!(RGBA8::new(c.r, c.g, c.b, 255), FlatColor::White.light::<RGBA8>());
    }
}
