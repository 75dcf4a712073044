//! Toll rates, discount schedules, and threshold tolerances.
//!
//! All types deserialize from partial documents; absent fields keep the
//! defaults below.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use traffic_common::DayType;

const fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, second) {
        Some(time) => time,
        None => panic!("invalid constant time"),
    }
}

const MIDNIGHT: NaiveTime = hms(0, 0, 0);
const MORNING: NaiveTime = hms(10, 0, 0);
const EVENING: NaiveTime = hms(18, 0, 0);
const END_OF_DAY: NaiveTime = hms(23, 59, 59);

/// Vehicle classes that carry a toll column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleClass {
    /// All classes in output column order.
    pub const ALL: [VehicleClass; 5] = [Self::Moto, Self::Car, Self::Rv, Self::Bus, Self::Truck];

    /// Column name of this class in toll tables.
    pub fn column(self) -> &'static str {
        match self {
            Self::Moto => "moto",
            Self::Car => "car",
            Self::Rv => "rv",
            Self::Bus => "bus",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Per-distance toll rate for each vehicle class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TollRates {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl Default for TollRates {
    fn default() -> Self {
        Self {
            moto: 0.8,
            car: 1.2,
            rv: 1.5,
            bus: 2.2,
            truck: 3.6,
        }
    }
}

impl TollRates {
    pub fn rate(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    pub fn with_rate(mut self, class: VehicleClass, rate: f64) -> Self {
        let slot = match class {
            VehicleClass::Moto => &mut self.moto,
            VehicleClass::Car => &mut self.car,
            VehicleClass::Rv => &mut self.rv,
            VehicleClass::Bus => &mut self.bus,
            VehicleClass::Truck => &mut self.truck,
        };
        *slot = rate;
        self
    }
}

/// A half-open time-of-day window `[start, end)` with a toll factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub factor: f64,
}

impl DiscountWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, factor: f64) -> Self {
        Self { start, end, factor }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Ordered discount windows for weekdays and weekends.
///
/// Lookups scan the windows in order and stop at the first match. The
/// default windows end at `23:59:59` exclusive, so that exact instant gets
/// no factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountSchedule {
    pub weekday: Vec<DiscountWindow>,
    pub weekend: Vec<DiscountWindow>,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            weekday: vec![
                DiscountWindow::new(MIDNIGHT, MORNING, 0.8),
                DiscountWindow::new(MORNING, EVENING, 1.2),
                DiscountWindow::new(EVENING, END_OF_DAY, 0.8),
            ],
            weekend: vec![DiscountWindow::new(MIDNIGHT, END_OF_DAY, 0.7)],
        }
    }
}

impl DiscountSchedule {
    pub fn windows(&self, day_type: DayType) -> &[DiscountWindow] {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }

    /// Factor of the first window containing `time`, if any.
    pub fn factor_for(&self, day_type: DayType, time: NaiveTime) -> Option<f64> {
        self.windows(day_type)
            .iter()
            .find(|window| window.contains(time))
            .map(|window| window.factor)
    }

    /// Replace the windows used for one kind of day.
    pub fn with_windows(mut self, day_type: DayType, windows: Vec<DiscountWindow>) -> Self {
        match day_type {
            DayType::Weekday => self.weekday = windows,
            DayType::Weekend => self.weekend = windows,
        }
        self
    }
}

/// Relative tolerance around the reference mean distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOptions {
    /// Accepted band is `[mean * (1 - tolerance), mean * (1 + tolerance)]`.
    pub tolerance: f64,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

impl ThresholdOptions {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
