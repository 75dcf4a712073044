//! Week-coverage completeness of timestamped pair records.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use traffic_common::{
    Key, Result, TableError, WeekTimestamp, key_values, require_columns, string_values,
};

const OPERATION: &str = "time_check";

const ALL_HOURS: u32 = (1 << 24) - 1;
const ALL_WEEKDAYS: u8 = (1 << 7) - 1;

/// One flag per `(id, id_2)` group, ordered by key.
///
/// `true` means the group's timestamps do not cover the full week.
pub type CoverageFlags = BTreeMap<(Key, Key), bool>;

#[derive(Debug, Default)]
struct Coverage {
    start_hours: u32,
    end_hours: u32,
    start_days: u8,
}

impl Coverage {
    fn record(&mut self, start: WeekTimestamp, end: WeekTimestamp) {
        self.start_hours |= 1 << start.hour();
        self.end_hours |= 1 << end.hour();
        self.start_days |= 1 << start.weekday.num_days_from_monday();
    }

    fn full_day(&self) -> bool {
        self.start_hours == ALL_HOURS && self.end_hours == ALL_HOURS
    }

    fn full_week(&self) -> bool {
        self.start_days == ALL_WEEKDAYS
    }

    fn incomplete(&self) -> bool {
        !(self.full_day() && self.full_week())
    }
}

/// Flag `(id, id_2)` groups whose timestamps miss part of the week.
///
/// Each row's `startDay`/`startTime` and `endDay`/`endTime` form a start and
/// end [`WeekTimestamp`]. A group covers a full day when its start hours and
/// its end hours each span all 24 hours, and a full week when its start
/// weekdays span all seven days. The flag is the negation of both holding.
///
/// # Errors
///
/// - [`TableError::MissingColumn`] for any absent input column
/// - [`TableError::InvalidValue`] for an unparseable day name or time
pub fn time_check(df: &DataFrame) -> Result<CoverageFlags> {
    require_columns(
        df,
        OPERATION,
        &["id", "id_2", "startDay", "startTime", "endDay", "endTime"],
    )?;
    let ids = key_values(df, OPERATION, "id")?;
    let ids_2 = key_values(df, OPERATION, "id_2")?;
    let starts = timestamps(df, "startDay", "startTime")?;
    let ends = timestamps(df, "endDay", "endTime")?;

    let mut groups: BTreeMap<(Key, Key), Coverage> = BTreeMap::new();
    for (((id, id_2), start), end) in ids.into_iter().zip(ids_2).zip(starts).zip(ends) {
        groups.entry((id, id_2)).or_default().record(start, end);
    }

    let flags: CoverageFlags = groups
        .into_iter()
        .map(|(key, coverage)| {
            tracing::trace!(
                id = %key.0,
                id_2 = %key.1,
                full_day = coverage.full_day(),
                full_week = coverage.full_week(),
                "group coverage"
            );
            (key, coverage.incomplete())
        })
        .collect();

    let incomplete = flags.values().filter(|flag| **flag).count();
    tracing::info!(groups = flags.len(), incomplete, "time coverage checked");
    Ok(flags)
}

fn timestamps(df: &DataFrame, day_column: &str, time_column: &str) -> Result<Vec<WeekTimestamp>> {
    let days = string_values(df, OPERATION, day_column)?;
    let times = string_values(df, OPERATION, time_column)?;

    days.iter()
        .zip(&times)
        .enumerate()
        .map(|(row, (day, time))| {
            WeekTimestamp::parse(day, time).ok_or_else(|| TableError::InvalidValue {
                operation: OPERATION,
                column: format!("{day_column}/{time_column}"),
                row,
                value: format!("{day} {time}"),
                reason: "expected a weekday name and HH:MM:SS time".to_string(),
            })
        })
        .collect()
}
