use crate::palette::{PaletteSource, name_sample};
use crate::sample::{ColorSample, ParseError};

/// Parse every hex string and return the brightest sample.
///
/// Fails on the first malformed input. Ties keep the earliest color.
pub fn select<I, S>(hex_list: I) -> Result<Option<ColorSample>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut samples = Vec::new();
    for hex in hex_list {
        samples.push(ColorSample::parse(hex.as_ref())?);
    }

    let mut brightest: Option<ColorSample> = None;
    for sample in samples {
        // strict '>' so the first maximum stays
        if brightest
            .as_ref()
            .is_none_or(|best| sample.brightness() > best.brightness())
        {
            brightest = Some(sample);
        }
    }

    if let Some(best) = &brightest {
        tracing::debug!(
            "Brightest color: {} (brightness {:.2})",
            best.hex_code(),
            best.brightness()
        );
    }

    Ok(brightest)
}

/// [`select`], then name the winner from `source`.
pub fn select_and_name<I, S>(
    hex_list: I,
    source: &impl PaletteSource,
) -> Result<Option<ColorSample>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut brightest = select(hex_list)?;
    if let Some(sample) = brightest.as_mut() {
        name_sample(sample, source);
    }
    Ok(brightest)
}

/// Holds the palette source used for naming.
#[derive(Debug, Clone)]
pub struct BrightestSelector<P> {
    source: P,
}

impl<P: PaletteSource> BrightestSelector<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn select<I, S>(&self, hex_list: I) -> Result<Option<ColorSample>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        select(hex_list)
    }

    pub fn select_and_name<I, S>(&self, hex_list: I) -> Result<Option<ColorSample>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        select_and_name(hex_list, &self.source)
    }
}
