use time::Date;

/// One day from the inverter export. Cells left blank in the export stay `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailySolarRecord {
    pub date: Date,
    pub solar_production_kwh: Option<f64>,
    pub consumption_kwh: Option<f64>,
    pub from_grid_kwh: Option<f64>,
    pub to_grid_kwh: Option<f64>,
}
