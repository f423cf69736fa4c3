pub mod flours;
pub mod recipe;
pub mod water;

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use dough_core::{DoughStyle, FermentationStage, FlourProduct, builtin_catalog};

use crate::i18n::Language;

/// Flags shared by every subcommand.
#[derive(Copy, Clone, Debug)]
pub struct Output {
    pub lang: Language,
    pub json: bool,
}

/// Style CLI enum mirrors dough-core (derive for Clap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleFlag {
    Neapolitan,
    NewYork,
    Chicago,
    Frozen,
    Manual,
}

impl From<StyleFlag> for DoughStyle {
    fn from(s: StyleFlag) -> Self {
        match s {
            StyleFlag::Neapolitan => DoughStyle::Neapolitan,
            StyleFlag::NewYork => DoughStyle::NewYork,
            StyleFlag::Chicago => DoughStyle::ChicagoDeepDish,
            StyleFlag::Frozen => DoughStyle::FrozenPizza,
            StyleFlag::Manual => DoughStyle::Manual,
        }
    }
}

/// `HOURS@TEMP_C`, e.g. `24@4`.
pub fn parse_stage(s: &str) -> std::result::Result<FermentationStage, String> {
    let (hours, temp) = s
        .split_once('@')
        .ok_or_else(|| format!("expected HOURS@TEMP, got `{s}`"))?;
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| format!("invalid stage hours `{hours}`"))?;
    let temp: f64 = temp
        .trim()
        .trim_end_matches(['C', 'c'])
        .trim_end_matches('°')
        .parse()
        .map_err(|_| format!("invalid stage temperature `{temp}`"))?;
    Ok(FermentationStage::new(hours, temp))
}

/// Form-level bounds; the core only rejects what it cannot compute.
pub fn ensure_within(name: &str, v: f64, lo: f64, hi: f64, unit: &str) -> Result<()> {
    if !(lo..=hi).contains(&v) {
        bail!("{name} {v} {unit} is outside {lo}..={hi} {unit}");
    }
    Ok(())
}

/// Built-in catalog unless a JSON catalog file is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<FlourProduct>> {
    let Some(path) = path else {
        return Ok(builtin_catalog());
    };
    let txt = fs::read_to_string(path)
        .with_context(|| format!("failed to read flour catalog {}", path.display()))?;
    let catalog: Vec<FlourProduct> = serde_json::from_str(&txt)
        .with_context(|| format!("invalid flour catalog JSON in {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded flour catalog");
    Ok(catalog)
}
