use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::{Args, ValueEnum};
use comfy_table::{Cell, Table};
use dough_core::{
    DoughRecipeRequest, DoughRecipeResult, DoughStyle, FermentationStage, FlourProduct,
    StagePhase, YeastPolicy, compute_recipe, default_schedule, recommend_flours, select_flour,
    total_duration_hours,
};
use serde::Serialize;

use super::{Output, StyleFlag, ensure_within, load_catalog, parse_stage};
use crate::i18n::{Label, Language, phase_label, policy_label, style_label, t};
use crate::profile::Profile;
use crate::render::{fmt_g, fmt_g_fine, fmt_hours, fmt_pct, fmt_temp, table};

const DEFAULT_BALLS: u32 = 4;
const DEFAULT_BALL_WEIGHT_G: f64 = 250.0;
const DEFAULT_SALT_PERCENT: f64 = 2.2;

/// Yeast sizing CLI enum mirrors dough-core (derive for Clap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyFlag {
    /// 1.5 / total hours, clamped to 0.01%..3%
    Duration,
    /// 0.5% at 6h/20°C, scaled by Q10 activity
    Q10,
}

impl From<PolicyFlag> for YeastPolicy {
    fn from(p: PolicyFlag) -> Self {
        match p {
            PolicyFlag::Duration => YeastPolicy::Duration,
            PolicyFlag::Q10 => YeastPolicy::Q10Activity,
        }
    }
}

#[derive(Args, Debug)]
pub struct RecipeArgs {
    /// Dough style preset (default hydration, olive oil and flour match)
    #[arg(long, value_enum)]
    style: Option<StyleFlag>,

    /// Number of dough balls
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    balls: Option<u32>,

    /// Weight per dough ball in grams (100–1000)
    #[arg(long)]
    ball_weight: Option<f64>,

    /// Hydration in % of flour (50–100); defaults to the style preset
    #[arg(long)]
    hydration: Option<f64>,

    /// Salt in % of flour (0–5)
    #[arg(long)]
    salt: Option<f64>,

    /// Olive oil in % of flour (0–5); defaults to the style preset
    #[arg(long)]
    oil: Option<f64>,

    /// How yeast is sized from the schedule
    #[arg(long, value_enum)]
    yeast_policy: Option<PolicyFlag>,

    /// Fermentation stage, repeat in order (e.g. --stage 2@25 --stage 24@4 --stage 2@23)
    #[arg(long = "stage", value_name = "HOURS@TEMP_C", value_parser = parse_stage)]
    stages: Vec<FermentationStage>,

    /// Start time HH:MM for the timeline; defaults to now
    #[arg(long)]
    start: Option<String>,

    /// Use this flour identifier instead of the style recommendation
    #[arg(long)]
    flour: Option<String>,

    /// Replacement flour catalog (JSON array)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Load a profile JSON before applying CLI overrides
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Save the effective parameters to a profile JSON
    #[arg(long)]
    save_profile: Option<PathBuf>,
}

impl From<&RecipeArgs> for Profile {
    fn from(a: &RecipeArgs) -> Self {
        Profile {
            style: a.style.map(Into::into),
            balls: a.balls,
            ball_weight: a.ball_weight,
            hydration: a.hydration,
            salt: a.salt,
            olive_oil: a.oil,
            yeast_policy: a.yeast_policy.map(Into::into),
            stages: (!a.stages.is_empty()).then(|| a.stages.clone()),
            start: a.start.clone(),
            flour: a.flour.clone(),
        }
    }
}

/// Fully-defaulted parameters for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeSettings {
    pub style: DoughStyle,
    pub request: DoughRecipeRequest,
    pub start: Option<String>,
    pub flour: Option<String>,
}

/// Fills gaps with preset/built-in defaults and enforces form bounds.
pub fn resolve(p: &Profile) -> Result<RecipeSettings> {
    let style = p.style.unwrap_or_default();
    let request = DoughRecipeRequest {
        ball_count: p.balls.unwrap_or(DEFAULT_BALLS),
        ball_weight_grams: p.ball_weight.unwrap_or(DEFAULT_BALL_WEIGHT_G),
        hydration_percent: p.hydration.unwrap_or(style.default_hydration_percent()),
        salt_percent: p.salt.unwrap_or(DEFAULT_SALT_PERCENT),
        olive_oil_percent: p.olive_oil.unwrap_or(style.default_olive_oil_percent()),
        stages: p.stages.clone().unwrap_or_else(default_schedule),
        yeast_policy: p.yeast_policy.unwrap_or_default(),
    };

    ensure_within("balls", request.ball_count as f64, 1.0, 50.0, "")?;
    ensure_within("ball weight", request.ball_weight_grams, 100.0, 1000.0, "g")?;
    for stage in &request.stages {
        ensure_within("stage time", stage.duration_hours, 0.0, 168.0, "h")?;
        ensure_within("stage temperature", stage.temperature_celsius, 0.0, 40.0, "°C")?;
    }

    Ok(RecipeSettings {
        style,
        request,
        start: p.start.clone(),
        flour: p.flour.clone(),
    })
}

/// Manual choice wins; otherwise the first style match, with the rest as alternatives.
/// An unknown manual identifier yields no flour.
pub fn choose_flour<'a>(
    catalog: &'a [FlourProduct],
    style: DoughStyle,
    manual: Option<&str>,
) -> (Option<&'a FlourProduct>, Vec<&'a FlourProduct>) {
    if let Some(id) = manual {
        return match select_flour(id, catalog) {
            Ok(f) => (Some(f), Vec::new()),
            Err(e) => {
                tracing::warn!("{e}");
                (None, Vec::new())
            }
        };
    }
    let mut matches = recommend_flours(style.tag(), catalog);
    if matches.is_empty() {
        return (None, matches);
    }
    let first = matches.remove(0);
    (Some(first), matches)
}

fn parse_start(start: Option<&str>) -> Result<NaiveDateTime> {
    let today = Local::now().naive_local();
    match start {
        Some(hhmm) => {
            let time = NaiveTime::parse_from_str(hhmm, "%H:%M")
                .with_context(|| format!("invalid start time `{hhmm}`, expected HH:MM"))?;
            Ok(today.date().and_time(time))
        }
        None => Ok(today),
    }
}

/// Clock time at which each stage ends, in order.
pub fn stage_end_times(start: NaiveDateTime, stages: &[FermentationStage]) -> Vec<NaiveDateTime> {
    let to_min = |h: f64| (h * 60.0).round() as i64;
    let mut dt = start;
    stages
        .iter()
        .map(|s| {
            dt += chrono::Duration::minutes(to_min(s.duration_hours));
            dt
        })
        .collect()
}

fn fmt_clock(start: NaiveDateTime, at: NaiveDateTime) -> String {
    let days = (at.date() - start.date()).num_days();
    if days > 0 {
        format!("{} (+{}d)", at.format("%H:%M"), days)
    } else {
        at.format("%H:%M").to_string()
    }
}

/// One row per stage with its end clock time, then the total.
fn timeline_table(
    stages: &[FermentationStage],
    start: NaiveDateTime,
    lang: Language,
) -> Result<Table> {
    let total_hours = total_duration_hours(stages)?;
    let ends = stage_end_times(start, stages);
    let mut timeline = table(&[
        "#",
        t(Label::Stage, lang),
        t(Label::Duration, lang),
        t(Label::Temperature, lang),
        t(Label::EndsAt, lang),
    ]);
    for (i, (stage, end)) in stages.iter().zip(&ends).enumerate() {
        timeline.add_row(vec![
            Cell::new(i + 1),
            Cell::new(phase_label(stage.phase(), lang)),
            Cell::new(fmt_hours(stage.duration_hours)),
            Cell::new(fmt_temp(stage.temperature_celsius, "°C")),
            Cell::new(fmt_clock(start, *end)),
        ]);
    }
    timeline.add_row(vec![
        Cell::new(""),
        Cell::new(t(Label::Total, lang)),
        Cell::new(fmt_hours(total_hours)),
        Cell::new(""),
        Cell::new(""),
    ]);
    Ok(timeline)
}

#[derive(Serialize)]
struct StageReport {
    duration_hours: f64,
    temperature_celsius: f64,
    phase: StagePhase,
    ends_at: String,
}

#[derive(Serialize)]
struct RecipeReport<'a> {
    style: DoughStyle,
    request: &'a DoughRecipeRequest,
    result: DoughRecipeResult,
    flour: Option<&'a FlourProduct>,
    alternatives: Vec<&'a FlourProduct>,
    timeline: Vec<StageReport>,
}

pub fn run(args: RecipeArgs, out: Output) -> Result<()> {
    // Load profile if present, then apply CLI overrides (CLI wins).
    let mut effective = Profile::from(&args);
    if let Some(path) = &args.profile {
        effective = effective.over(Profile::load(path)?);
    }
    if let Some(path) = &args.save_profile {
        effective.save(path)?;
        if !out.json {
            println!("Profile saved to {}", path.display());
        }
    }

    let settings = resolve(&effective)?;
    let req = &settings.request;
    let result = compute_recipe(req)?;

    let catalog = load_catalog(args.catalog.as_deref())?;
    let (flour, alternatives) = choose_flour(&catalog, settings.style, settings.flour.as_deref());

    let start = parse_start(settings.start.as_deref())?;
    let ends = stage_end_times(start, &req.stages);

    if out.json {
        let report = RecipeReport {
            style: settings.style,
            request: req,
            result,
            flour,
            alternatives,
            timeline: req
                .stages
                .iter()
                .zip(&ends)
                .map(|(s, end)| StageReport {
                    duration_hours: s.duration_hours,
                    temperature_celsius: s.temperature_celsius,
                    phase: s.phase(),
                    ends_at: end.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let lang = out.lang;
    let mut ingredients = table(&[
        t(Label::Ingredient, lang),
        t(Label::Amount, lang),
        t(Label::Notes, lang),
    ]);
    ingredients.add_row(vec![
        Cell::new(t(Label::Balls, lang)),
        Cell::new(format!("{} × {:.0} g", req.ball_count, req.ball_weight_grams)),
        Cell::new(style_label(settings.style, lang)),
    ]);
    ingredients.add_row(vec![
        Cell::new(t(Label::Flour, lang)),
        Cell::new(fmt_g(result.flour_grams)),
        Cell::new("100%"),
    ]);
    ingredients.add_row(vec![
        Cell::new(t(Label::Water, lang)),
        Cell::new(fmt_g(result.water_grams)),
        Cell::new(fmt_pct(req.hydration_percent, 1)),
    ]);
    ingredients.add_row(vec![
        Cell::new(t(Label::Yeast, lang)),
        Cell::new(fmt_g_fine(result.yeast_grams)),
        Cell::new(format!(
            "{} ({})",
            fmt_pct(result.yeast_percent, 4),
            policy_label(req.yeast_policy, lang)
        )),
    ]);
    ingredients.add_row(vec![
        Cell::new(t(Label::Salt, lang)),
        Cell::new(fmt_g(result.salt_grams)),
        Cell::new(fmt_pct(req.salt_percent, 2)),
    ]);
    if result.olive_oil_grams > 0.0 {
        ingredients.add_row(vec![
            Cell::new(t(Label::OliveOil, lang)),
            Cell::new(fmt_g(result.olive_oil_grams)),
            Cell::new(fmt_pct(req.olive_oil_percent, 1)),
        ]);
    }
    let total = result.flour_grams
        + result.water_grams
        + result.yeast_grams
        + result.salt_grams
        + result.olive_oil_grams;
    ingredients.add_row(vec![
        Cell::new(t(Label::Total, lang)),
        Cell::new(fmt_g(total)),
        Cell::new(""),
    ]);

    println!("\n=== {} ===", t(Label::Summary, lang));
    println!("{ingredients}");

    let timeline = timeline_table(&req.stages, start, lang)?;

    println!("\n=== {} ===", t(Label::Fermentation, lang));
    println!("{timeline}");

    println!("\n=== {} ===", t(Label::FlourChoice, lang));
    match flour {
        Some(f) => {
            println!("{}", f.name(lang.code()));
            println!(
                "  {}: {}%  {}: {}%",
                t(Label::Protein, lang),
                f.protein_percent,
                t(Label::Ash, lang),
                f.ash_percent
            );
            if !alternatives.is_empty() {
                let names: Vec<&str> = alternatives.iter().map(|a| a.name(lang.code())).collect();
                println!("  {}: {}", t(Label::Alternatives, lang), names.join(", "));
            }
        }
        None => println!("{}", t(Label::NoFlour, lang)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dough_core::builtin_catalog;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 22)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_resolve_uses_style_defaults() {
        let p = Profile {
            style: Some(DoughStyle::NewYork),
            ..Default::default()
        };
        let s = resolve(&p).unwrap();
        assert_eq!(s.request.hydration_percent, 62.0);
        assert_eq!(s.request.olive_oil_percent, 2.0);
        assert_eq!(s.request.ball_count, 4);
        assert_eq!(s.request.stages, default_schedule());
        assert_eq!(s.request.yeast_policy, YeastPolicy::Duration);
    }

    #[test]
    fn test_explicit_values_beat_preset() {
        let p = Profile {
            style: Some(DoughStyle::ChicagoDeepDish),
            hydration: Some(70.0),
            olive_oil: Some(0.0),
            ..Default::default()
        };
        let s = resolve(&p).unwrap();
        assert_eq!(s.request.hydration_percent, 70.0);
        assert_eq!(s.request.olive_oil_percent, 0.0);
    }

    #[test]
    fn test_resolve_enforces_form_bounds() {
        let heavy = Profile {
            ball_weight: Some(1500.0),
            ..Default::default()
        };
        assert!(resolve(&heavy).is_err());

        let week = Profile {
            stages: Some(vec![FermentationStage::new(200.0, 4.0)]),
            ..Default::default()
        };
        assert!(resolve(&week).is_err());
    }

    #[test]
    fn test_choose_flour_recommendation_and_override() {
        let catalog = builtin_catalog();
        let (first, rest) = choose_flour(&catalog, DoughStyle::Neapolitan, None);
        assert_eq!(first.unwrap().identifier, "nuvola");
        assert_eq!(rest.len(), 4);

        let (manual, rest) = choose_flour(&catalog, DoughStyle::Neapolitan, Some("manitoba"));
        assert_eq!(manual.unwrap().identifier, "manitoba");
        assert!(rest.is_empty());

        let (missing, _) = choose_flour(&catalog, DoughStyle::Neapolitan, Some("unknown"));
        assert!(missing.is_none());
    }

    #[test]
    fn test_stage_end_times_cross_midnight() {
        let start = at(18, 0);
        let ends = stage_end_times(start, &default_schedule());
        assert_eq!(ends[0], at(20, 0));
        assert_eq!(fmt_clock(start, ends[1]), "20:00 (+1d)");
        assert_eq!(fmt_clock(start, ends[2]), "22:00 (+1d)");
    }

    #[test]
    fn test_timeline_total_row() {
        let rendered = timeline_table(&default_schedule(), at(18, 0), Language::En)
            .unwrap()
            .to_string();
        assert!(rendered.contains("28.0 h"), "{rendered}");
        assert!(rendered.contains("22:00 (+1d)"), "{rendered}");

        assert!(timeline_table(&[], at(18, 0), Language::En).is_err());
    }

    #[test]
    fn test_parse_start() {
        let dt = parse_start(Some("07:30")).unwrap();
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(parse_start(Some("7h30")).is_err());
    }
}
