pub mod config;
pub mod palette;
pub mod sample;
pub mod selector;

pub use config::Config;
pub use palette::{
    HttpPaletteSource, Palette, PaletteEntry, PaletteSource, StaticPaletteSource, UNKNOWN_NAME,
    find_nearest_name, name_sample,
};
pub use sample::{ColorSample, ParseError, brightness, parse_hex_triplet};
pub use selector::{BrightestSelector, select, select_and_name};

pub fn version() -> &'static str {
    "0.1.0"
}

/// Colors used when the caller supplies none.
pub const DEMO_COLORS: [&str; 5] = ["#AABBCC", "#154331", "#A0B1C2", "#000000", "#FFFFFF"];

/// The line printed for a selection result.
pub fn report(brightest: Option<&ColorSample>) -> String {
    match brightest {
        Some(sample) => format!("The brightest color is: {sample}"),
        None => "No colors provided".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() -> anyhow::Result<()> {
        assert_eq!(report(None), "No colors provided");

        let mut c = ColorSample::parse("#FFFFFF")?;
        c.set_name(Some("White".into()));
        assert_eq!(
            report(Some(&c)),
            "The brightest color is: #FFFFFF (r=255, g=255, b=255), called White"
        );
        Ok(())
    }

    #[test]
    fn demo_run_with_static_palette() -> anyhow::Result<()> {
        let source = StaticPaletteSource::new(vec![
            PaletteEntry::new("White", "FFFFFF"),
            PaletteEntry::new("Black", "000000"),
        ]);
        let best = select_and_name(DEMO_COLORS, &source)?;
        assert_eq!(
            report(best.as_ref()),
            "The brightest color is: #FFFFFF (r=255, g=255, b=255), called White"
        );
        Ok(())
    }
}
