pub mod domain;
pub mod queries;

pub use domain::{
    DailyRecord, DailySolarRecord, EnergyFlow, IntervalCosts, IntervalRecord, MergedDailyRecord,
    Plan, PricedInterval, TariffRow, TimeBucket, TimeBucketError,
};
