//! Hexadecimal color notation.

use rgb::RGBA;
use crate::{hsb::unit, Error, Result};

pub(crate) fn parse(s: &str) -> Result<RGBA<f64>> {
    let invalid = || Error::InvalidHex(s.to_string());
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid())
    }
    // All characters are ASCII, byte slicing is safe.
    let byte = |i: usize, n: usize| {
        u8::from_str_radix(&digits[i .. i + n], 16).map_err(|_| invalid())
    };
    let [r, g, b, a] = match digits.len() {
        3 => [byte(0, 1)? * 17, byte(1, 1)? * 17, byte(2, 1)? * 17, 255],
        6 => [byte(0, 2)?, byte(2, 2)?, byte(4, 2)?, 255],
        8 => [byte(0, 2)?, byte(2, 2)?, byte(4, 2)?, byte(6, 2)?],
        _ => return Err(invalid()),
    };
    Ok(RGBA { r: r as f64 / 255., g: g as f64 / 255., b: b as f64 / 255.,
              a: a as f64 / 255. })
}

pub(crate) fn format(c: RGBA<f64>) -> String {
    let [r, g, b, a] = [c.r, c.g, c.b, c.a].map(|x| (unit(x) * 255.).round() as u8);
    if a == 255 { format!("#{r:02x}{g:02x}{b:02x}") }
    else { format!("#{r:02x}{g:02x}{b:02x}{a:02x}") }
}
