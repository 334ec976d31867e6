use serde::Serialize;
use std::fmt;
use thiserror::Error;

// Perceived luminance weights (green > red > blue).
const RED_WEIGHT: f64 = 0.241;
const GREEN_WEIGHT: f64 = 0.691;
const BLUE_WEIGHT: f64 = 0.068;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("hex color '{hex}' must have 6 digits, found {len}")]
    InvalidLength { hex: String, len: usize },

    #[error("hex color '{hex}' contains non-hex digits")]
    InvalidDigit { hex: String },
}

/// Parse `RRGGBB` (optionally `#RRGGBB`) into its three channels.
pub fn parse_hex_triplet(hex: &str) -> Result<(u8, u8, u8), ParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ParseError::InvalidLength {
            hex: hex.to_string(),
            len: digits.len(),
        });
    }
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidDigit {
            hex: hex.to_string(),
        });
    }

    // All six bytes are ASCII hex digits, so these slices and radix parses hold.
    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ParseError::InvalidDigit {
            hex: hex.to_string(),
        })
    };

    Ok((channel(0)?, channel(2)?, channel(4)?))
}

pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    (RED_WEIGHT * r * r + GREEN_WEIGHT * g * g + BLUE_WEIGHT * b * b).sqrt()
}

/// One parsed input color.
///
/// Everything except `name` is fixed at construction; the name is filled in
/// by the palette lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSample {
    hex_code: String,
    r: u8,
    g: u8,
    b: u8,
    brightness: f64,
    name: Option<String>,
}

impl ColorSample {
    pub fn parse(hex: &str) -> Result<Self, ParseError> {
        let (r, g, b) = parse_hex_triplet(hex)?;

        Ok(Self {
            hex_code: hex.to_uppercase(),
            r,
            g,
            b,
            brightness: brightness(r, g, b),
            name: None,
        })
    }

    /// The input as given, uppercased (a leading `#` is kept).
    pub fn hex_code(&self) -> &str {
        &self.hex_code
    }

    /// Uppercase digits without the `#`.
    pub fn normalized_hex(&self) -> &str {
        self.hex_code.strip_prefix('#').unwrap_or(&self.hex_code)
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Euclidean distance in RGB space.
    pub fn distance_to(&self, r: u8, g: u8, b: u8) -> f64 {
        let dr = self.r as f64 - r as f64;
        let dg = self.g as f64 - g as f64;
        let db = self.b as f64 - b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl std::str::FromStr for ColorSample {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (r={}, g={}, b={})",
            self.hex_code, self.r, self.g, self.b
        )?;
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => write!(f, ", called {name}"),
            _ => Ok(()),
        }
    }
}
