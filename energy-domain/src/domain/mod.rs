pub mod daily;
pub mod interval;
pub mod solar;
pub mod tariff;

pub use daily::{DailyRecord, EnergyFlow, MergedDailyRecord};
pub use interval::{IntervalCosts, IntervalRecord, PricedInterval, TimeBucket, TimeBucketError};
pub use solar::DailySolarRecord;
pub use tariff::{Plan, TariffRow};
