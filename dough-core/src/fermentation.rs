use serde::{Deserialize, Serialize};

use crate::error::{DoughError, Result};

/// Yeast activity multiplies by this factor per 10°C rise.
pub const Q10: f64 = 2.0;
/// Temperature at which a stage hour counts as exactly one activity unit.
pub const BASE_TEMP_C: f64 = 20.0;
/// Stages at or below this temperature are shown as cold (fridge) stages.
pub const COLD_THRESHOLD_C: f64 = 10.0;

/// One step of a fermentation schedule.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FermentationStage {
    pub duration_hours: f64,
    pub temperature_celsius: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StagePhase {
    Room,
    Cold,
}

impl FermentationStage {
    pub fn new(duration_hours: f64, temperature_celsius: f64) -> Self {
        Self {
            duration_hours,
            temperature_celsius,
        }
    }

    /// Display classification only; never used by the yeast math.
    pub fn phase(&self) -> StagePhase {
        if self.temperature_celsius <= COLD_THRESHOLD_C {
            StagePhase::Cold
        } else {
            StagePhase::Room
        }
    }
}

/// How stage temperatures weigh into the integrated activity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureModel {
    /// Each hour counts `Q10^((T - 20) / 10)` units.
    Q10Weighted,
    /// Plain sum of hours, temperature ignored.
    DurationOnly,
}

/// Relative activity of one hour at `temp_c`.
pub fn q10_factor(temp_c: f64) -> f64 {
    Q10.powf((temp_c - BASE_TEMP_C) / 10.0)
}

/// Room 25°C for 2h, fridge 4°C for 24h, room 23°C for 2h.
pub fn default_schedule() -> Vec<FermentationStage> {
    vec![
        FermentationStage::new(2.0, 25.0),
        FermentationStage::new(24.0, 4.0),
        FermentationStage::new(2.0, 23.0),
    ]
}

/// Checks every stage and returns the summed duration.
///
/// Single stages may last zero hours, but the schedule as a whole must not.
pub fn total_duration_hours(stages: &[FermentationStage]) -> Result<f64> {
    if stages.is_empty() {
        return Err(DoughError::invalid("stages", "at least one stage is required"));
    }
    let mut total = 0.0;
    for stage in stages {
        if !stage.duration_hours.is_finite() || stage.duration_hours < 0.0 {
            return Err(DoughError::invalid(
                "stages",
                format!("stage duration {} h must be >= 0", stage.duration_hours),
            ));
        }
        if !stage.temperature_celsius.is_finite() {
            return Err(DoughError::invalid(
                "stages",
                "stage temperature must be a finite number",
            ));
        }
        total += stage.duration_hours;
    }
    if total <= 0.0 {
        return Err(DoughError::invalid(
            "stages",
            "total fermentation time must be > 0 h",
        ));
    }
    Ok(total)
}

/// Integrates the schedule into one relative-activity scalar (always > 0 on success).
pub fn compute_activity(stages: &[FermentationStage], model: TemperatureModel) -> Result<f64> {
    let total_hours = total_duration_hours(stages)?;
    let activity = match model {
        TemperatureModel::DurationOnly => total_hours,
        TemperatureModel::Q10Weighted => stages
            .iter()
            .map(|s| q10_factor(s.temperature_celsius) * s.duration_hours)
            .sum(),
    };
    tracing::debug!(?model, total_hours, activity, "integrated fermentation activity");
    // q10_factor under/overflows for extreme temperatures
    if !activity.is_finite() || activity <= 0.0 {
        return Err(DoughError::invalid(
            "stages",
            format!("integrated activity {activity} must be a finite number > 0"),
        ));
    }
    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_q10_anchor_and_doubling() {
        assert_relative_eq!(q10_factor(20.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q10_factor(30.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(q10_factor(10.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_default_schedule_activity() {
        let stages = default_schedule();
        let hours = compute_activity(&stages, TemperatureModel::DurationOnly).unwrap();
        assert_relative_eq!(hours, 28.0, epsilon = 1e-12);

        let q10 = compute_activity(&stages, TemperatureModel::Q10Weighted).unwrap();
        let expected = 2.0 * 2f64.powf(0.5) + 24.0 * 2f64.powf(-1.6) + 2.0 * 2f64.powf(0.3);
        assert_relative_eq!(q10, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_activity_monotonic() {
        let at = |h: f64, t: f64| {
            compute_activity(&[FermentationStage::new(h, t)], TemperatureModel::Q10Weighted)
                .unwrap()
        };
        assert!(at(6.0, 25.0) > at(6.0, 24.0));
        assert!(at(6.0, 4.0) > at(6.0, -2.0));
        assert!(at(7.0, 18.0) > at(6.0, 18.0));
    }

    #[test]
    fn test_zero_length_stage_allowed() {
        let stages = [FermentationStage::new(0.0, 25.0), FermentationStage::new(8.0, 20.0)];
        let a = compute_activity(&stages, TemperatureModel::Q10Weighted).unwrap();
        assert_relative_eq!(a, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_empty_and_zero_total() {
        assert!(matches!(
            compute_activity(&[], TemperatureModel::DurationOnly),
            Err(DoughError::InvalidInput { field: "stages", .. })
        ));
        let zeros = [FermentationStage::new(0.0, 25.0), FermentationStage::new(0.0, 4.0)];
        assert!(compute_activity(&zeros, TemperatureModel::Q10Weighted).is_err());
        let negative = [FermentationStage::new(-1.0, 25.0), FermentationStage::new(5.0, 4.0)];
        assert!(total_duration_hours(&negative).is_err());
        let nan = [FermentationStage::new(4.0, f64::NAN)];
        assert!(total_duration_hours(&nan).is_err());
    }

    #[test]
    fn test_rejects_degenerate_activity() {
        let frozen = [FermentationStage::new(1.0, -20000.0)];
        assert!(matches!(
            compute_activity(&frozen, TemperatureModel::Q10Weighted),
            Err(DoughError::InvalidInput { field: "stages", .. })
        ));
        let scorched = [FermentationStage::new(1.0, 20000.0)];
        assert!(compute_activity(&scorched, TemperatureModel::Q10Weighted).is_err());

        // temperature plays no part in the duration-only model
        let hours = compute_activity(&frozen, TemperatureModel::DurationOnly).unwrap();
        assert_relative_eq!(hours, 1.0);
    }

    #[test]
    fn test_phase_classification() {
        assert_eq!(FermentationStage::new(24.0, 4.0).phase(), StagePhase::Cold);
        assert_eq!(FermentationStage::new(2.0, 10.0).phase(), StagePhase::Cold);
        assert_eq!(FermentationStage::new(2.0, 23.0).phase(), StagePhase::Room);
    }
}
