use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::Cell;
use dough_core::{TemperatureUnit, WaterTempRequest, WaterTempResult, compute_water_temp};
use serde::Serialize;

use super::{Output, ensure_within};
use crate::i18n::{Label, t};
use crate::render::{fmt_temp, table};

const DEFAULT_TARGET_C: f64 = 25.0;
const DEFAULT_ROOM_C: f64 = 24.0;
const DEFAULT_FLOUR_C: f64 = 22.0;
const DEFAULT_FRICTION_C: f64 = 5.0;

/// Unit CLI enum mirrors dough-core (derive for Clap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitFlag {
    C,
    F,
}

impl From<UnitFlag> for TemperatureUnit {
    fn from(u: UnitFlag) -> Self {
        match u {
            UnitFlag::C => TemperatureUnit::Celsius,
            UnitFlag::F => TemperatureUnit::Fahrenheit,
        }
    }
}

#[derive(Args, Debug)]
pub struct WaterArgs {
    /// Unit for every temperature given and shown
    #[arg(long, value_enum, default_value_t = UnitFlag::C)]
    unit: UnitFlag,

    /// Target final dough temperature (default 25 °C)
    #[arg(long)]
    target: Option<f64>,

    /// Room temperature (default 24 °C)
    #[arg(long)]
    room: Option<f64>,

    /// Flour temperature (default 22 °C)
    #[arg(long)]
    flour_temp: Option<f64>,

    /// Temperature rise from kneading (default 5 °C)
    #[arg(long)]
    friction: Option<f64>,
}

/// Readings in °C, defaults applied, form bounds checked.
pub fn build_request(args: &WaterArgs) -> Result<WaterTempRequest> {
    let unit = TemperatureUnit::from(args.unit);
    // defaults are °C readings, restated in the requested unit
    let req = WaterTempRequest::from_unit(
        unit,
        args.target.unwrap_or(unit.from_celsius(DEFAULT_TARGET_C)),
        args.room.unwrap_or(unit.from_celsius(DEFAULT_ROOM_C)),
        args.flour_temp.unwrap_or(unit.from_celsius(DEFAULT_FLOUR_C)),
        args.friction.unwrap_or(unit.delta_from_celsius(DEFAULT_FRICTION_C)),
    );

    ensure_within("target dough temperature", req.target_dough_temp_c, 20.0, 30.0, "°C")?;
    ensure_within("room temperature", req.room_temp_c, 0.0, 40.0, "°C")?;
    ensure_within("flour temperature", req.flour_temp_c, 0.0, 40.0, "°C")?;
    ensure_within("friction factor", req.friction_factor_c, 0.0, 10.0, "°C")?;
    Ok(req)
}

#[derive(Serialize)]
struct WaterReport {
    unit: TemperatureUnit,
    request: WaterTempRequest,
    result: WaterTempResult,
    recommended_water_temp: f64,
}

pub fn run(args: WaterArgs, out: Output) -> Result<()> {
    let unit = TemperatureUnit::from(args.unit);
    let req = build_request(&args)?;
    let result = compute_water_temp(&req)?;
    let shown = result.in_unit(unit);

    if out.json {
        let report = WaterReport {
            unit,
            request: req,
            result,
            recommended_water_temp: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let lang = out.lang;
    let sym = unit.symbol();
    let mut tbl = table(&[t(Label::WaterTemp, lang), ""]);
    tbl.add_row(vec![
        Cell::new(t(Label::TargetDoughTemp, lang)),
        Cell::new(fmt_temp(unit.from_celsius(req.target_dough_temp_c), sym)),
    ]);
    tbl.add_row(vec![
        Cell::new(t(Label::RoomTemperature, lang)),
        Cell::new(fmt_temp(unit.from_celsius(req.room_temp_c), sym)),
    ]);
    tbl.add_row(vec![
        Cell::new(t(Label::FlourTemp, lang)),
        Cell::new(fmt_temp(unit.from_celsius(req.flour_temp_c), sym)),
    ]);
    tbl.add_row(vec![
        Cell::new(t(Label::Friction, lang)),
        Cell::new(fmt_temp(unit.delta_from_celsius(req.friction_factor_c), sym)),
    ]);
    tbl.add_row(vec![
        Cell::new(t(Label::RecommendedWaterTemp, lang)),
        Cell::new(fmt_temp(shown, sym)),
    ]);
    println!("{tbl}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(unit: UnitFlag) -> WaterArgs {
        WaterArgs {
            unit,
            target: None,
            room: None,
            flour_temp: None,
            friction: None,
        }
    }

    #[test]
    fn test_defaults_are_celsius_in_any_unit() {
        let c = build_request(&args(UnitFlag::C)).unwrap();
        let f = build_request(&args(UnitFlag::F)).unwrap();
        assert_eq!(c.target_dough_temp_c, 25.0);
        assert_relative_eq!(f.target_dough_temp_c, c.target_dough_temp_c, epsilon = 1e-9);
        assert_relative_eq!(f.room_temp_c, c.room_temp_c, epsilon = 1e-9);
        assert_relative_eq!(f.flour_temp_c, c.flour_temp_c, epsilon = 1e-9);
        assert_relative_eq!(f.friction_factor_c, c.friction_factor_c, epsilon = 1e-9);
    }

    #[test]
    fn test_fahrenheit_inputs_convert() {
        let mut a = args(UnitFlag::F);
        a.target = Some(77.0);
        a.friction = Some(9.0);
        let req = build_request(&a).unwrap();
        assert_relative_eq!(req.target_dough_temp_c, 25.0, epsilon = 1e-9);
        assert_relative_eq!(req.friction_factor_c, 5.0, epsilon = 1e-9);
        // unset room reading falls back to 24 °C, not 24 °F
        assert_relative_eq!(req.room_temp_c, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bounds() {
        let mut a = args(UnitFlag::C);
        a.target = Some(35.0);
        assert!(build_request(&a).is_err());

        let mut a = args(UnitFlag::C);
        a.friction = Some(-1.0);
        assert!(build_request(&a).is_err());
    }
}
