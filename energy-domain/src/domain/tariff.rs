use super::interval::TimeBucket;

/// Consumption plans priced side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Plan {
    HomePlan,
    MiddaySaver,
    ElectricVehicleAddOn,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::HomePlan, Plan::MiddaySaver, Plan::ElectricVehicleAddOn];
}

/// Rates for one half-hour bucket, in minor currency units per kWh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TariffRow {
    pub time: TimeBucket,
    pub home_plan: f64,
    pub midday_saver: f64,
    pub ev_add_on: f64,
    pub feed_in: f64,
}

impl TariffRow {
    pub fn rate(&self, plan: Plan) -> f64 {
        match plan {
            Plan::HomePlan => self.home_plan,
            Plan::MiddaySaver => self.midday_saver,
            Plan::ElectricVehicleAddOn => self.ev_add_on,
        }
    }
}
