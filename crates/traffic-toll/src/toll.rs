//! Flat and time-of-day toll rates.

use polars::prelude::{DataFrame, DataType, Expr, IntoLazy, NamedFrom, Series, col, lit};
use traffic_common::{
    DayType, Result, TableError, numeric_values, parse_time_of_day, parse_weekday,
    require_columns, string_values,
};

use crate::config::{DiscountSchedule, TollRates, VehicleClass};

/// Replace `distance` with one toll column per vehicle class.
///
/// Each class column is `distance` times the class rate (moto 0.8, car 1.2,
/// rv 1.5, bus 2.2, truck 3.6). The new columns are appended in that order
/// and `distance` is removed; all other columns pass through.
pub fn calculate_toll_rate(df: &DataFrame) -> Result<DataFrame> {
    calculate_toll_rate_with(df, &TollRates::default())
}

/// [`calculate_toll_rate`] with explicit rates.
pub fn calculate_toll_rate_with(df: &DataFrame, rates: &TollRates) -> Result<DataFrame> {
    const OPERATION: &str = "calculate_toll_rate";
    require_columns(df, OPERATION, &["distance"])?;
    numeric_values(df, OPERATION, "distance")?;

    let tolls: Vec<Expr> = VehicleClass::ALL
        .iter()
        .map(|class| {
            (col("distance").cast(DataType::Float64) * lit(rates.rate(*class)))
                .alias(class.column())
        })
        .collect();

    let out = df
        .clone()
        .lazy()
        .with_columns(tolls)
        .collect()?
        .drop("distance")?;

    tracing::debug!(rows = out.height(), "toll rates calculated");
    Ok(out)
}

/// Scale toll columns by the default weekday/weekend time-window factors.
///
/// See [`calculate_time_based_toll_rates_with`].
pub fn calculate_time_based_toll_rates(df: &DataFrame) -> Result<DataFrame> {
    calculate_time_based_toll_rates_with(df, &DiscountSchedule::default())
}

/// Scale every vehicle-class column by the factor of the row's time window.
///
/// `start_day` selects the weekend windows for Saturday and Sunday and the
/// weekday windows otherwise. The first window with
/// `start <= start_time < end` supplies the factor. Rows that match no
/// window keep their toll values. `end_time` must parse but does not affect
/// the factor. Class columns are returned as `Float64`.
///
/// # Errors
///
/// - [`TableError::MissingColumn`] for an absent schedule or class column
/// - [`TableError::InvalidValue`] for an unparseable day name or time
pub fn calculate_time_based_toll_rates_with(
    df: &DataFrame,
    schedule: &DiscountSchedule,
) -> Result<DataFrame> {
    const OPERATION: &str = "calculate_time_based_toll_rates";
    let mut required = vec!["start_day", "start_time", "end_time"];
    required.extend(VehicleClass::ALL.map(VehicleClass::column));
    require_columns(df, OPERATION, &required)?;

    let days = string_values(df, OPERATION, "start_day")?;
    let start_times = string_values(df, OPERATION, "start_time")?;
    let end_times = string_values(df, OPERATION, "end_time")?;

    let invalid = |column: &str, row: usize, value: &str, reason: &str| TableError::InvalidValue {
        operation: OPERATION,
        column: column.to_string(),
        row,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut factors = Vec::with_capacity(df.height());
    let mut unmatched = 0usize;
    for (row, ((day, start), end)) in days.iter().zip(&start_times).zip(&end_times).enumerate() {
        let weekday = parse_weekday(day)
            .ok_or_else(|| invalid("start_day", row, day.as_str(), "unknown weekday"))?;
        let start_time = parse_time_of_day(start)
            .ok_or_else(|| invalid("start_time", row, start.as_str(), "expected HH:MM:SS"))?;
        parse_time_of_day(end)
            .ok_or_else(|| invalid("end_time", row, end.as_str(), "expected HH:MM:SS"))?;

        let day_type = DayType::of(weekday);
        let factor = schedule.factor_for(day_type, start_time);
        tracing::trace!(row, %day_type, start = %start, ?factor, "discount lookup");
        if factor.is_none() {
            unmatched += 1;
        }
        factors.push(factor.unwrap_or(1.0));
    }

    if unmatched > 0 {
        tracing::warn!(
            rows = unmatched,
            "start times outside every discount window left unchanged"
        );
    }

    let mut out = df.clone();
    for class in VehicleClass::ALL {
        let values = numeric_values(df, OPERATION, class.column())?;
        let scaled: Vec<f64> = values
            .iter()
            .zip(&factors)
            .map(|(value, factor)| value * factor)
            .collect();
        out.with_column(Series::new(class.column().into(), scaled))?;
    }

    tracing::debug!(rows = out.height(), "time-based toll rates applied");
    Ok(out)
}
