//! Presets command implementation
//!
//! Lists the built-in parameter sets.

use std::io::Write;

use rate_models::curves::RateCurve;
use rate_models::presets::Preset;
use tracing::debug;

use crate::Result;

/// Run the presets command
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<12} {:<20} {:<8} Description", "Name", "Kind", "Kinks")?;
    for preset in Preset::ALL {
        let model = preset.model()?;
        debug!(preset = preset.as_str(), model = ?model, "Listing preset");

        let kinks = model
            .kinks()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join("/");
        writeln!(
            out,
            "{:<12} {:<20} {:<8} {}",
            preset.as_str(),
            model.kind().as_str(),
            kinks,
            preset.description()
        )?;
    }
    Ok(())
}
