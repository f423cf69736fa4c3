use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{DoughError, Result};

/// Style tag that makes a product compatible with every style.
pub const WILDCARD_STYLE: &str = "All";

/// Display names keyed by locale code ("en", "ja", ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedName(pub BTreeMap<String, String>);

impl LocalizedName {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Name for `locale`, else the English name, else any name at all.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .or_else(|| self.0.get("en"))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlourProduct {
    pub identifier: String,
    pub display_name: LocalizedName,
    pub protein_percent: f64,
    pub ash_percent: f64,
    pub compatible_styles: BTreeSet<String>,
}

impl FlourProduct {
    fn builtin(
        identifier: &str,
        en: &str,
        ja: &str,
        protein_percent: f64,
        ash_percent: f64,
        styles: &[&str],
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            display_name: LocalizedName::new([("en", en), ("ja", ja)]),
            protein_percent,
            ash_percent,
            compatible_styles: styles.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Localized name, falling back to the identifier.
    pub fn name(&self, locale: &str) -> &str {
        self.display_name.get(locale).unwrap_or(&self.identifier)
    }

    pub fn suits(&self, style: &str) -> bool {
        self.compatible_styles.contains(style) || self.compatible_styles.contains(WILDCARD_STYLE)
    }
}

/// Built-in reference catalog, in recommendation order.
pub fn builtin_catalog() -> Vec<FlourProduct> {
    vec![
        FlourProduct::builtin(
            "nuvola",
            "Caputo \"0\" Nuvola",
            "カプート ヌーヴォラ",
            12.5,
            0.50,
            &["Neapolitan"],
        ),
        FlourProduct::builtin(
            "cuoco",
            "Caputo \"00\" Chef's Flour",
            "カプート クオーコ",
            13.0,
            0.55,
            &["Neapolitan", "Long Fermentation"],
        ),
        FlourProduct::builtin(
            "pizzeria",
            "Caputo \"00\" Pizzeria",
            "カプート ピッツェリア",
            12.75,
            0.50,
            &["Neapolitan", "General Pizza"],
        ),
        FlourProduct::builtin(
            "americana",
            "Caputo Americana",
            "カプート アメリカーナ",
            13.5,
            0.55,
            &["New York Style"],
        ),
        FlourProduct::builtin(
            "manitoba",
            "Caputo Manitoba Oro",
            "カプート マニトバ オーロ",
            14.5,
            0.65,
            &["Chicago Deep Dish", "Frozen Pizza"],
        ),
        FlourProduct::builtin(
            "camellia",
            "Nisshin Camellia",
            "カメリア（日清）",
            11.5,
            0.40,
            &[WILDCARD_STYLE],
        ),
        FlourProduct::builtin(
            "lis_dor",
            "Nisshin Lis D'or",
            "リスドォル（日清）",
            11.8,
            0.45,
            &["Neapolitan", "French", "Light Crust"],
        ),
    ]
}

/// Every product suited to `style`, in catalog order. Empty when nothing matches.
pub fn recommend_flours<'a>(style: &str, catalog: &'a [FlourProduct]) -> Vec<&'a FlourProduct> {
    catalog.iter().filter(|f| f.suits(style)).collect()
}

/// Manual override: pick one product by identifier, bypassing style matching.
pub fn select_flour<'a>(identifier: &str, catalog: &'a [FlourProduct]) -> Result<&'a FlourProduct> {
    catalog
        .iter()
        .find(|f| f.identifier == identifier)
        .ok_or_else(|| DoughError::LookupMiss {
            identifier: identifier.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(flours: &[&FlourProduct]) -> Vec<String> {
        flours.iter().map(|f| f.identifier.clone()).collect()
    }

    #[test]
    fn test_neapolitan_keeps_catalog_order() {
        let catalog = builtin_catalog();
        let got = recommend_flours("Neapolitan", &catalog);
        assert_eq!(ids(&got), ["nuvola", "cuoco", "pizzeria", "camellia", "lis_dor"]);
    }

    #[test]
    fn test_wildcard_only_match() {
        let catalog = builtin_catalog();
        let got = recommend_flours("Manual", &catalog);
        assert_eq!(ids(&got), ["camellia"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog: Vec<FlourProduct> = builtin_catalog()
            .into_iter()
            .filter(|f| f.identifier != "camellia")
            .collect();
        assert!(recommend_flours("Detroit", &catalog).is_empty());
    }

    #[test]
    fn test_select_flour() {
        let catalog = builtin_catalog();
        let f = select_flour("americana", &catalog).unwrap();
        assert_eq!(f.protein_percent, 13.5);
        assert_eq!(f.name("ja"), "カプート アメリカーナ");

        let err = select_flour("semola", &catalog).unwrap_err();
        assert_eq!(
            err,
            DoughError::LookupMiss {
                identifier: "semola".into()
            }
        );
    }

    #[test]
    fn test_name_fallbacks() {
        let f = &builtin_catalog()[0];
        assert_eq!(f.name("it"), "Caputo \"0\" Nuvola");

        let mut bare = f.clone();
        bare.display_name = LocalizedName::default();
        assert_eq!(bare.name("en"), "nuvola");
    }

    #[test]
    fn test_catalog_json_shape() {
        let json = r#"[{
            "identifier": "semola",
            "display_name": {"en": "Semola Rimacinata"},
            "protein_percent": 12.0,
            "ash_percent": 0.9,
            "compatible_styles": ["Roman"]
        }]"#;
        let catalog: Vec<FlourProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(ids(&recommend_flours("Roman", &catalog)), ["semola"]);
    }
}
