//! Baker's-percentage pizza dough model.
//!
//! Every function here is a pure computation over request values:
//! - [`compute_recipe`] turns ball count/weight, hydration, salt and oil into ingredient masses,
//!   sizing yeast from the fermentation schedule with a [`YeastPolicy`].
//! - [`compute_activity`] integrates a stage schedule into one activity scalar.
//! - [`compute_water_temp`] solves the kneading water temperature.
//! - [`recommend_flours`] / [`select_flour`] look up flour products.

pub mod error;
pub mod fermentation;
pub mod flour;
pub mod recipe;
pub mod style;
pub mod water;

pub use error::{DoughError, Result};
pub use fermentation::{
    FermentationStage, StagePhase, TemperatureModel, compute_activity, default_schedule,
    q10_factor, total_duration_hours,
};
pub use flour::{
    FlourProduct, LocalizedName, WILDCARD_STYLE, builtin_catalog, recommend_flours, select_flour,
};
pub use recipe::{DoughRecipeRequest, DoughRecipeResult, YeastPolicy, compute_recipe, yeast_percent};
pub use style::DoughStyle;
pub use water::{
    TemperatureUnit, WaterTempRequest, WaterTempResult, celsius_to_fahrenheit, compute_water_temp,
    fahrenheit_to_celsius,
};
