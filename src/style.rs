//! Colors: hex parsing, the default series palette and the fixed greys used in layer mode.
//!
//! Default colors are assigned deterministically: all series keys are sorted
//! and de-duplicated, and a key's position in that list picks a palette slot.
//! The same key set therefore always yields the same colors, whatever order
//! the series arrive in.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScatterError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = ScatterError;

    /// Accepts `#RRGGBB`, `RRGGBB` and the short `#RGB` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScatterError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize, w: usize| u8::from_str_radix(&hex[i..i + w], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb8::new(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            3 => {
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Ok(Rgb8::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ScatterError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// Microsoft Office (2013+) chart series palette.
pub const OFFICE10: [Rgb8; 10] = [
    Rgb8::new(68, 114, 196),  // blue
    Rgb8::new(237, 125, 49),  // orange
    Rgb8::new(165, 165, 165), // gray
    Rgb8::new(255, 192, 0),   // gold
    Rgb8::new(91, 155, 213),  // light blue
    Rgb8::new(112, 173, 71),  // green
    Rgb8::new(38, 68, 120),   // dark blue
    Rgb8::new(158, 72, 14),   // dark orange
    Rgb8::new(99, 99, 99),    // dark gray
    Rgb8::new(153, 115, 0),   // brownish
];

/// Fill for background markers/lines while something else is in focus.
pub const LAYER_GREY: Rgb8 = Rgb8::new(204, 204, 204);
/// Background label text.
pub const LABEL_GREY: Rgb8 = Rgb8::new(153, 153, 153);
/// Foreground year labels.
pub const LABEL_DARK: Rgb8 = Rgb8::new(51, 51, 51);

/// Palette color for slot `idx` (cycles).
#[inline]
pub fn palette_color(palette: &[Rgb8], idx: usize) -> Rgb8 {
    if palette.is_empty() {
        return OFFICE10[idx % OFFICE10.len()];
    }
    palette[idx % palette.len()]
}

/// Map every distinct key to a palette color by its rank in sorted key order.
pub fn assign_default_colors<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    palette: &[Rgb8],
) -> AHashMap<String, Rgb8> {
    let mut sorted: Vec<&str> = keys.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, k)| (k.to_string(), palette_color(palette, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#4472C4".parse::<Rgb8>().unwrap(), Rgb8::new(68, 114, 196));
        assert_eq!("fff".parse::<Rgb8>().unwrap(), Rgb8::new(255, 255, 255));
        assert!("#12345".parse::<Rgb8>().is_err());
        assert!("red".parse::<Rgb8>().is_err());
    }

    #[test]
    fn default_colors_ignore_input_order() {
        let a = assign_default_colors(["DEU", "USA", "FRA"], &OFFICE10);
        let b = assign_default_colors(["USA", "FRA", "DEU", "USA"], &OFFICE10);
        assert_eq!(a, b);
        assert_eq!(a["DEU"], OFFICE10[0]);
        assert_eq!(a["FRA"], OFFICE10[1]);
        assert_eq!(a["USA"], OFFICE10[2]);
    }

    #[test]
    fn hex_round_trips_through_serde() {
        let json = serde_json::to_string(&Rgb8::new(237, 125, 49)).unwrap();
        assert_eq!(json, "\"#ED7D31\"");
    }
}
