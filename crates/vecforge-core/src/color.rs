//! RGBA color value type.
//!
//! Colors are always stored as normalized RGBA components in `[0, 1]`.
//! Gray, RGB and HSB inputs take a caller-supplied `range` (e.g. `255.0` or
//! `100.0`) that is divided out before clamping. Hex strings, CSS names and
//! `rgb()` / `rgba()` notation are accepted as input only.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// An RGBA color with components in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn normalize(v: f64, range: f64) -> f64 {
    let range = if range > 0.0 { range } else { 1.0 };
    clamp01(v / range)
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a color from RGBA components in `[0, range]`.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64, range: f64) -> Self {
        Color {
            r: normalize(r, range),
            g: normalize(g, range),
            b: normalize(b, range),
            a: normalize(a, range),
        }
    }

    /// Creates an opaque color from RGB components in `[0, range]`.
    pub fn rgb(r: f64, g: f64, b: f64, range: f64) -> Self {
        let range = if range > 0.0 { range } else { 1.0 };
        Color::rgba(r, g, b, range, range)
    }

    /// Creates an opaque gray of value `v` in `[0, range]`.
    pub fn gray(v: f64, range: f64) -> Self {
        Color::rgb(v, v, v, range)
    }

    /// Creates an opaque color from hue, saturation and brightness in `[0, range]`.
    pub fn hsb(h: f64, s: f64, v: f64, range: f64) -> Self {
        let range = if range > 0.0 { range } else { 1.0 };
        Color::hsba(h, s, v, range, range)
    }

    /// Creates a color from HSBA components in `[0, range]`.
    ///
    /// A hue of 0 and a hue of `range` are both red.
    pub fn hsba(h: f64, s: f64, v: f64, a: f64, range: f64) -> Self {
        let h = normalize(h, range);
        let s = normalize(s, range);
        let v = normalize(v, range);
        let a = normalize(a, range);

        if s == 0.0 {
            return Color { r: v, g: v, b: v, a };
        }

        let sector = (h * 6.0) % 6.0;
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color { r, g, b, a }
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex {
            value: hex.to_string(),
        };
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let short = |i: usize| -> Result<f64, ColorError> {
            let v = u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid())?;
            Ok((v * 17) as f64 / 255.0)
        };
        let long = |i: usize| -> Result<f64, ColorError> {
            let v = u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())?;
            Ok(v as f64 / 255.0)
        };

        match digits.len() {
            3 => Ok(Color::rgba(short(0)?, short(1)?, short(2)?, 1.0, 1.0)),
            4 => Ok(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?, 1.0)),
            6 => Ok(Color::rgba(long(0)?, long(2)?, long(4)?, 1.0, 1.0)),
            8 => Ok(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?, 1.0)),
            _ => Err(invalid()),
        }
    }

    /// Looks up a CSS color name (case-insensitive).
    pub fn named(name: &str) -> Result<Self, ColorError> {
        let key = name.trim().to_ascii_lowercase();
        if key == "transparent" {
            return Ok(Color::TRANSPARENT);
        }
        named_colors()
            .get(key.as_str())
            .map(|&[r, g, b]| Color::rgb(r as f64, g as f64, b as f64, 255.0))
            .ok_or(ColorError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Parses a paint value as found in `fill` / `stroke` attributes.
    ///
    /// Returns `Ok(None)` for `none`, otherwise delegates to [`FromStr`].
    pub fn parse(value: &str) -> Result<Option<Self>, ColorError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        value.parse().map(Some)
    }

    fn from_function(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFunction {
            value: value.to_string(),
        };
        let open = value.find('(').ok_or_else(invalid)?;
        let inner = value[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }

        let channel = |s: &str| -> Result<f64, ColorError> {
            match s.strip_suffix('%') {
                Some(pct) => pct.parse::<f64>().map(|v| v / 100.0).map_err(|_| invalid()),
                None => s.parse::<f64>().map(|v| v / 255.0).map_err(|_| invalid()),
            }
        };
        let alpha = |s: &str| -> Result<f64, ColorError> {
            match s.strip_suffix('%') {
                Some(pct) => pct.parse::<f64>().map(|v| v / 100.0).map_err(|_| invalid()),
                None => s.parse::<f64>().map_err(|_| invalid()),
            }
        };

        let a = match parts.get(3) {
            Some(s) => alpha(s)?,
            None => 1.0,
        };
        Ok(Color::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
            1.0,
        ))
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(&self, a: f64) -> Self {
        Color {
            a: clamp01(a),
            ..*self
        }
    }

    /// Hue, saturation and brightness, each in `[0, 1]`.
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let v = max;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        if delta == 0.0 {
            return (0.0, s, v);
        }

        let h = if self.r == max {
            (self.g - self.b) / delta
        } else if self.g == max {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };
        let h = (h / 6.0).rem_euclid(1.0);
        (h, s, v)
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    pub fn to_hex(&self) -> String {
        let c = |v: f64| (v * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                c(self.r),
                c(self.g),
                c(self.b),
                c(self.a)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
        }
    }

    /// CSS `rgba(R, G, B, A)` with 0-255 channels, as handed to renderers.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            Color::from_hex(s)
        } else if s.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
            Color::from_function(s)
        } else {
            Color::named(s)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// The CSS named color table, built once and never mutated.
fn named_colors() -> &'static HashMap<&'static str, [u8; 3]> {
    static TABLE: OnceLock<HashMap<&'static str, [u8; 3]>> = OnceLock::new();
    TABLE.get_or_init(|| NAMED_COLORS.iter().copied().collect())
}

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];
