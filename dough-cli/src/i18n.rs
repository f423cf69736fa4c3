use clap::ValueEnum;
use dough_core::{DoughStyle, StagePhase, YeastPolicy};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// Locale code used for flour display names.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Summary,
    Ingredient,
    Amount,
    Notes,
    Balls,
    Flour,
    Water,
    Yeast,
    Salt,
    OliveOil,
    Total,
    Fermentation,
    Stage,
    Duration,
    Temperature,
    EndsAt,
    RoomTemp,
    ColdFerment,
    FlourChoice,
    Alternatives,
    NoFlour,
    Protein,
    Ash,
    Styles,
    Identifier,
    Name,
    WaterTemp,
    TargetDoughTemp,
    RoomTemperature,
    FlourTemp,
    Friction,
    RecommendedWaterTemp,
    DurationPolicy,
    Q10Policy,
}

/// Label text for `lang`.
pub fn t(label: Label, lang: Language) -> &'static str {
    use Label::*;
    match (label, lang) {
        (Summary, Language::En) => "Dough Summary",
        (Summary, Language::Ja) => "生地の概要",
        (Ingredient, Language::En) => "Ingredient",
        (Ingredient, Language::Ja) => "材料",
        (Amount, Language::En) => "Amount",
        (Amount, Language::Ja) => "分量",
        (Notes, Language::En) => "Notes",
        (Notes, Language::Ja) => "備考",
        (Balls, Language::En) => "Dough balls",
        (Balls, Language::Ja) => "ドウボール",
        (Flour, Language::En) => "Flour",
        (Flour, Language::Ja) => "小麦粉",
        (Water, Language::En) => "Water",
        (Water, Language::Ja) => "水",
        (Yeast, Language::En) => "Yeast",
        (Yeast, Language::Ja) => "イースト",
        (Salt, Language::En) => "Salt",
        (Salt, Language::Ja) => "塩",
        (OliveOil, Language::En) => "Olive oil",
        (OliveOil, Language::Ja) => "オリーブオイル",
        (Total, Language::En) => "Total",
        (Total, Language::Ja) => "合計",
        (Fermentation, Language::En) => "Fermentation Schedule",
        (Fermentation, Language::Ja) => "発酵スケジュール",
        (Stage, Language::En) => "Stage",
        (Stage, Language::Ja) => "工程",
        (Duration, Language::En) => "Time",
        (Duration, Language::Ja) => "時間",
        (Temperature, Language::En) => "Temp",
        (Temperature, Language::Ja) => "温度",
        (EndsAt, Language::En) => "Ends at",
        (EndsAt, Language::Ja) => "終了時刻",
        (RoomTemp, Language::En) => "Room temp",
        (RoomTemp, Language::Ja) => "室温発酵",
        (ColdFerment, Language::En) => "Cold ferment",
        (ColdFerment, Language::Ja) => "低温発酵",
        (FlourChoice, Language::En) => "Flour Recommendation",
        (FlourChoice, Language::Ja) => "おすすめ小麦粉",
        (Alternatives, Language::En) => "Also suitable",
        (Alternatives, Language::Ja) => "その他の候補",
        (NoFlour, Language::En) => "No matching flour in the catalog",
        (NoFlour, Language::Ja) => "該当する小麦粉がありません",
        (Protein, Language::En) => "Protein",
        (Protein, Language::Ja) => "タンパク質",
        (Ash, Language::En) => "Ash",
        (Ash, Language::Ja) => "灰分",
        (Styles, Language::En) => "Styles",
        (Styles, Language::Ja) => "スタイル",
        (Identifier, Language::En) => "ID",
        (Identifier, Language::Ja) => "ID",
        (Name, Language::En) => "Name",
        (Name, Language::Ja) => "名前",
        (WaterTemp, Language::En) => "Kneading Water Temperature",
        (WaterTemp, Language::Ja) => "こね水の温度計算",
        (TargetDoughTemp, Language::En) => "Target dough temperature",
        (TargetDoughTemp, Language::Ja) => "目標生地温度",
        (RoomTemperature, Language::En) => "Room temperature",
        (RoomTemperature, Language::Ja) => "室温",
        (FlourTemp, Language::En) => "Flour temperature",
        (FlourTemp, Language::Ja) => "粉の温度",
        (Friction, Language::En) => "Friction factor",
        (Friction, Language::Ja) => "摩擦係数",
        (RecommendedWaterTemp, Language::En) => "Recommended water temperature",
        (RecommendedWaterTemp, Language::Ja) => "推奨水温",
        (DurationPolicy, Language::En) => "by total time",
        (DurationPolicy, Language::Ja) => "総発酵時間から算出",
        (Q10Policy, Language::En) => "by temperature-weighted activity",
        (Q10Policy, Language::Ja) => "温度補正した発酵活性から算出",
    }
}

pub fn phase_label(phase: StagePhase, lang: Language) -> &'static str {
    match phase {
        StagePhase::Room => t(Label::RoomTemp, lang),
        StagePhase::Cold => t(Label::ColdFerment, lang),
    }
}

pub fn policy_label(policy: YeastPolicy, lang: Language) -> &'static str {
    match policy {
        YeastPolicy::Duration => t(Label::DurationPolicy, lang),
        YeastPolicy::Q10Activity => t(Label::Q10Policy, lang),
    }
}

pub fn style_label(style: DoughStyle, lang: Language) -> &'static str {
    match (style, lang) {
        (DoughStyle::Manual, Language::Ja) => "手動",
        (DoughStyle::Neapolitan, Language::Ja) => "ナポリ風",
        (DoughStyle::NewYork, Language::Ja) => "ニューヨークスタイル",
        (DoughStyle::ChicagoDeepDish, Language::Ja) => "シカゴ・ディープディッシュ",
        (DoughStyle::FrozenPizza, Language::Ja) => "冷凍ピザ",
        (s, Language::En) => s.tag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_differ_by_language() {
        assert_eq!(t(Label::Summary, Language::En), "Dough Summary");
        assert_eq!(t(Label::Summary, Language::Ja), "生地の概要");
        assert_eq!(phase_label(StagePhase::Cold, Language::En), "Cold ferment");
    }

    #[test]
    fn test_style_label_english_is_tag() {
        for style in DoughStyle::ALL {
            assert_eq!(style_label(style, Language::En), style.tag());
        }
        assert_eq!(style_label(DoughStyle::NewYork, Language::Ja), "ニューヨークスタイル");
    }

    #[test]
    fn test_policy_labels_are_localized() {
        assert_eq!(policy_label(YeastPolicy::Duration, Language::En), "by total time");
        assert_eq!(policy_label(YeastPolicy::Q10Activity, Language::Ja), "温度補正した発酵活性から算出");
        for lang in [Language::En, Language::Ja] {
            for policy in [YeastPolicy::Duration, YeastPolicy::Q10Activity] {
                let text = policy_label(policy, lang);
                assert_ne!(text, format!("{policy:?}"));
            }
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ja.code(), "ja");
    }
}
