use time::Date;

use super::{solar::DailySolarRecord, tariff::Plan};

/// Interval totals for one calendar day. Cost fields include the day's
/// supply charge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyRecord {
    pub date: Date,
    pub usage_kwh: f64,
    pub generation_kwh: f64,
    pub home_plan_cost: f64,
    pub midday_saver_cost: f64,
    pub ev_add_on_cost: f64,
    pub feed_in_credit: f64,
}

impl DailyRecord {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            usage_kwh: 0.0,
            generation_kwh: 0.0,
            home_plan_cost: 0.0,
            midday_saver_cost: 0.0,
            ev_add_on_cost: 0.0,
            feed_in_credit: 0.0,
        }
    }

    pub fn cost(&self, plan: Plan) -> f64 {
        match plan {
            Plan::HomePlan => self.home_plan_cost,
            Plan::MiddaySaver => self.midday_saver_cost,
            Plan::ElectricVehicleAddOn => self.ev_add_on_cost,
        }
    }

    pub fn cost_mut(&mut self, plan: Plan) -> &mut f64 {
        match plan {
            Plan::HomePlan => &mut self.home_plan_cost,
            Plan::MiddaySaver => &mut self.midday_saver_cost,
            Plan::ElectricVehicleAddOn => &mut self.ev_add_on_cost,
        }
    }
}

/// Derived daily energy flows. `None` wherever an input was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnergyFlow {
    pub from_grid_kwh: Option<f64>,
    pub to_grid_kwh: Option<f64>,
    pub self_consumption_kwh: Option<f64>,
    pub total_usage_kwh: Option<f64>,
}

/// A daily record left-joined with the solar export for the same date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MergedDailyRecord {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub daily: DailyRecord,
    pub solar: Option<DailySolarRecord>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub flow: EnergyFlow,
}

impl MergedDailyRecord {
    pub fn date(&self) -> Date {
        self.daily.date
    }

    pub fn solar_production_kwh(&self) -> Option<f64> {
        self.solar.as_ref().and_then(|s| s.solar_production_kwh)
    }
}
