use serde::{Deserialize, Serialize};

/// Dough style presets. A preset only supplies defaults and the flour style tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoughStyle {
    #[default]
    Neapolitan,
    NewYork,
    ChicagoDeepDish,
    FrozenPizza,
    Manual,
}

impl DoughStyle {
    pub const ALL: [DoughStyle; 5] = [
        DoughStyle::Neapolitan,
        DoughStyle::NewYork,
        DoughStyle::ChicagoDeepDish,
        DoughStyle::FrozenPizza,
        DoughStyle::Manual,
    ];

    /// Tag matched against `FlourProduct::compatible_styles`.
    pub fn tag(self) -> &'static str {
        match self {
            DoughStyle::Neapolitan => "Neapolitan",
            DoughStyle::NewYork => "New York Style",
            DoughStyle::ChicagoDeepDish => "Chicago Deep Dish",
            DoughStyle::FrozenPizza => "Frozen Pizza",
            DoughStyle::Manual => "Manual",
        }
    }

    pub fn default_hydration_percent(self) -> f64 {
        match self {
            DoughStyle::Neapolitan => 65.0,
            DoughStyle::NewYork => 62.0,
            DoughStyle::ChicagoDeepDish => 55.0,
            DoughStyle::FrozenPizza => 60.0,
            DoughStyle::Manual => 60.0,
        }
    }

    /// Zero for styles made without oil.
    pub fn default_olive_oil_percent(self) -> f64 {
        match self {
            DoughStyle::Neapolitan | DoughStyle::Manual => 0.0,
            DoughStyle::NewYork | DoughStyle::FrozenPizza => 2.0,
            DoughStyle::ChicagoDeepDish => 3.0,
        }
    }
}
