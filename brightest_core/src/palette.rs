use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sample::{ColorSample, parse_hex_triplet};

/// Name given when the palette could not be fetched at all.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One named reference color from the palette service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,

    /// "r,g,b" as sent by the service; not used for matching.
    #[serde(default)]
    pub rgb: Option<String>,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            rgb: None,
        }
    }

    /// None when the service sent a malformed hex value.
    ///
    /// Entries must be exactly six hex digits; unlike inputs, no `#` is allowed.
    pub fn channels(&self) -> Option<(u8, u8, u8)> {
        if self.hex.starts_with('#') {
            return None;
        }
        parse_hex_triplet(&self.hex).ok()
    }
}

/// A palette snapshot: either the fetched entries or the fact that the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    Available(Vec<PaletteEntry>),
    Unavailable,
}

impl Palette {
    pub fn entries(&self) -> Option<&[PaletteEntry]> {
        match self {
            Palette::Available(entries) => Some(entries),
            Palette::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Palette::Available(_))
    }
}

impl From<Vec<PaletteEntry>> for Palette {
    fn from(entries: Vec<PaletteEntry>) -> Self {
        Palette::Available(entries)
    }
}

/// Where palettes come from. Fetch failures are reported as
/// [`Palette::Unavailable`], never as errors.
pub trait PaletteSource {
    fn fetch_palette(&self) -> Palette;
}

/// Response body of the colors endpoint. Other top-level fields are ignored.
#[derive(Debug, Deserialize)]
struct ColorsResponse {
    colors: Vec<PaletteEntry>,
}

fn decode_colors(json: &str) -> serde_json::Result<Vec<PaletteEntry>> {
    serde_json::from_str::<ColorsResponse>(json).map(|body| body.colors)
}

/// Fetches the palette with one blocking GET per call.
#[derive(Debug, Clone)]
pub struct HttpPaletteSource {
    url: String,
}

impl HttpPaletteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.palette_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpPaletteSource {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PaletteSource for HttpPaletteSource {
    fn fetch_palette(&self) -> Palette {
        tracing::debug!("Fetching palette from {}", self.url);

        // Non-2xx statuses surface as Err from call().
        let mut response = match ureq::get(self.url.as_str()).call() {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Palette fetch from {} failed: {}", self.url, err);
                return Palette::Unavailable;
            }
        };

        let body = match response.body_mut().read_to_string() {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Palette body from {} unreadable: {}", self.url, err);
                return Palette::Unavailable;
            }
        };

        match decode_colors(&body) {
            Ok(entries) => {
                tracing::debug!("Fetched {} palette entries", entries.len());
                Palette::Available(entries)
            }
            Err(err) => {
                tracing::warn!("Palette body from {} is not valid: {}", self.url, err);
                Palette::Unavailable
            }
        }
    }
}

/// Always hands out the same palette.
#[derive(Debug, Clone)]
pub struct StaticPaletteSource {
    palette: Palette,
}

impl StaticPaletteSource {
    pub fn new(palette: impl Into<Palette>) -> Self {
        Self {
            palette: palette.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            palette: Palette::Unavailable,
        }
    }
}

impl PaletteSource for StaticPaletteSource {
    fn fetch_palette(&self) -> Palette {
        self.palette.clone()
    }
}

impl<S: PaletteSource + ?Sized> PaletteSource for &S {
    fn fetch_palette(&self) -> Palette {
        (**self).fetch_palette()
    }
}

/// Name of the palette entry closest to `sample`.
///
/// - Unavailable palette: `Some("Unknown")`.
/// - An entry whose hex equals the sample's: that entry, first one wins.
/// - Otherwise the entry at the smallest RGB distance; on a tie the earlier entry.
/// - No entry with a parseable hex: `None`.
pub fn find_nearest_name(sample: &ColorSample, palette: &Palette) -> Option<String> {
    let entries = match palette {
        Palette::Available(entries) => entries,
        Palette::Unavailable => return Some(UNKNOWN_NAME.to_string()),
    };

    let target = sample.normalized_hex();

    let mut best: Option<(f64, &PaletteEntry)> = None;
    for entry in entries {
        if entry.hex.eq_ignore_ascii_case(target) {
            tracing::debug!("Exact palette match for {}: {}", sample.hex_code(), entry.name);
            return Some(entry.name.clone());
        }

        let Some((r, g, b)) = entry.channels() else {
            tracing::trace!("Skipping palette entry '{}' with hex '{}'", entry.name, entry.hex);
            continue;
        };

        let distance = sample.distance_to(r, g, b);
        if best.is_none_or(|(min, _)| distance < min) {
            best = Some((distance, entry));
        }
    }

    match best {
        Some((distance, entry)) => {
            tracing::debug!(
                "Nearest palette entry for {}: {} (distance {:.2})",
                sample.hex_code(),
                entry.name,
                distance
            );
            Some(entry.name.clone())
        }
        None => {
            tracing::debug!("No usable palette entry for {}", sample.hex_code());
            None
        }
    }
}

/// Fetch a palette from `source` and give `sample` its nearest name.
pub fn name_sample(sample: &mut ColorSample, source: &impl PaletteSource) {
    let palette = source.fetch_palette();
    sample.set_name(find_nearest_name(sample, &palette));
}
