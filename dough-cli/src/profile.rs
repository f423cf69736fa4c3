use std::{fs, path::Path};

use anyhow::{Context, Result};
use dough_core::{DoughStyle, FermentationStage, YeastPolicy};
use serde::{Deserialize, Serialize};

/// Saved recipe parameters. Every field is optional so a profile can be partial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<DoughStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balls: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub olive_oil: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yeast_policy: Option<YeastPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<FermentationStage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flour: Option<String>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        let profile = serde_json::from_str(&txt)
            .with_context(|| format!("invalid profile JSON in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded profile");
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let txt = serde_json::to_string_pretty(self)?;
        fs::write(path, txt)
            .with_context(|| format!("failed to save profile {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved profile");
        Ok(())
    }

    /// Values set in `self` (the command line) win; gaps are filled from `base`.
    pub fn over(self, base: Profile) -> Profile {
        Profile {
            style: self.style.or(base.style),
            balls: self.balls.or(base.balls),
            ball_weight: self.ball_weight.or(base.ball_weight),
            hydration: self.hydration.or(base.hydration),
            salt: self.salt.or(base.salt),
            olive_oil: self.olive_oil.or(base.olive_oil),
            yeast_policy: self.yeast_policy.or(base.yeast_policy),
            stages: self.stages.or(base.stages),
            start: self.start.or(base.start),
            flour: self.flour.or(base.flour),
        }
    }
}
