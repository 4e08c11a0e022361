//! Fill color parsing.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// An RGBA8 color parsed from a fill string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a fill string (`#rgb`, `#rrggbb`, `#rrggbbaa` or `transparent`).
///
/// Returns `None` for anything else; callers decide how to paint it.
pub fn parse_color(color: &str) -> Option<Rgba> {
    let color = color.trim();
    if color.eq_ignore_ascii_case("transparent") {
        return Some(Rgba::transparent());
    }

    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        3 => {
            // #rgb -> #rrggbb
            let r = channel(0..1)? * 17;
            let g = channel(1..2)? * 17;
            let b = channel(2..3)? * 17;
            Some(Rgba::new(r, g, b, 255))
        }
        6 => Some(Rgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some(Rgba::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}
