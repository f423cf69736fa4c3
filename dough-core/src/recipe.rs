use serde::{Deserialize, Serialize};

use crate::error::{DoughError, Result, ensure_in_range};
use crate::fermentation::{FermentationStage, TemperatureModel, compute_activity};

/// Duration policy: yeast % = this / total hours, before clamping.
pub const DURATION_YEAST_NUMERATOR: f64 = 1.5;
pub const DURATION_YEAST_MIN_PERCENT: f64 = 0.01;
pub const DURATION_YEAST_MAX_PERCENT: f64 = 3.0;

/// Q10 policy reference: 0.5% yeast for 6h at 20°C.
pub const Q10_BASE_HOURS: f64 = 6.0;
pub const Q10_BASE_YEAST_PERCENT: f64 = 0.5;

/// How the yeast dose is sized from the fermentation schedule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YeastPolicy {
    /// Inverse of total hours, clamped to 0.01%..3%.
    #[default]
    Duration,
    /// Reference dose scaled by reference activity / schedule activity. Unclamped.
    Q10Activity,
}

impl YeastPolicy {
    pub fn temperature_model(self) -> TemperatureModel {
        match self {
            YeastPolicy::Duration => TemperatureModel::DurationOnly,
            YeastPolicy::Q10Activity => TemperatureModel::Q10Weighted,
        }
    }
}

/// Everything needed for one recipe. Percentages are baker's percentages (of flour mass).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoughRecipeRequest {
    pub ball_count: u32,
    pub ball_weight_grams: f64,
    pub hydration_percent: f64,
    pub salt_percent: f64,
    #[serde(default)]
    pub olive_oil_percent: f64,
    pub stages: Vec<FermentationStage>,
    #[serde(default)]
    pub yeast_policy: YeastPolicy,
}

impl DoughRecipeRequest {
    pub fn total_dough_grams(&self) -> f64 {
        self.ball_count as f64 * self.ball_weight_grams
    }

    /// Checks bounds on every scalar field. Stages are checked by the integrator.
    pub fn validate(&self) -> Result<()> {
        if self.ball_count == 0 {
            return Err(DoughError::invalid("ball_count", "must be at least 1"));
        }
        if !self.ball_weight_grams.is_finite() || self.ball_weight_grams <= 0.0 {
            return Err(DoughError::invalid(
                "ball_weight_grams",
                format!("{} must be > 0", self.ball_weight_grams),
            ));
        }
        ensure_in_range("hydration_percent", self.hydration_percent, 50.0, 100.0)?;
        ensure_in_range("salt_percent", self.salt_percent, 0.0, 5.0)?;
        ensure_in_range("olive_oil_percent", self.olive_oil_percent, 0.0, 5.0)?;
        Ok(())
    }
}

/// Ingredient masses in grams, unrounded.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoughRecipeResult {
    pub flour_grams: f64,
    pub water_grams: f64,
    pub yeast_grams: f64,
    pub yeast_percent: f64,
    pub salt_grams: f64,
    pub olive_oil_grams: f64,
}

/// Yeast as percent of flour for the given schedule.
pub fn yeast_percent(policy: YeastPolicy, stages: &[FermentationStage]) -> Result<f64> {
    let activity = compute_activity(stages, policy.temperature_model())?;
    let pct = match policy {
        YeastPolicy::Duration => (DURATION_YEAST_NUMERATOR / activity)
            .clamp(DURATION_YEAST_MIN_PERCENT, DURATION_YEAST_MAX_PERCENT),
        YeastPolicy::Q10Activity => {
            // one hour at BASE_TEMP_C is one activity unit
            let base_activity = Q10_BASE_HOURS * 1.0;
            Q10_BASE_YEAST_PERCENT * (base_activity / activity)
        }
    };
    Ok(pct)
}

/// Flour is solved from total mass = flour + water; the other ingredients are
/// percentages of that flour, so the balls come out slightly heavier than the target.
pub fn compute_recipe(request: &DoughRecipeRequest) -> Result<DoughRecipeResult> {
    request.validate()?;
    let yeast_pct = yeast_percent(request.yeast_policy, &request.stages)?;

    let flour = request.total_dough_grams() / (1.0 + request.hydration_percent / 100.0);
    let water = flour * request.hydration_percent / 100.0;
    let yeast = flour * yeast_pct / 100.0;
    let salt = flour * request.salt_percent / 100.0;
    let oil = flour * request.olive_oil_percent / 100.0;

    tracing::debug!(
        policy = ?request.yeast_policy,
        flour,
        water,
        yeast_pct,
        "computed dough recipe"
    );

    Ok(DoughRecipeResult {
        flour_grams: flour,
        water_grams: water,
        yeast_grams: yeast,
        yeast_percent: yeast_pct,
        salt_grams: salt,
        olive_oil_grams: oil,
    })
}
