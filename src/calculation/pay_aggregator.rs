//! Rate lookup and pay aggregation.
//!
//! Lookups here are lenient: a day without a rate row, or a shift without a
//! rate in its day's row, contributes zero instead of failing. Payroll
//! therefore tolerates partial rate tables, at the cost of silently paying
//! nothing for a misspelled day code.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftLoad, WeeklyWorkload};

/// Returns the hourly rate for a day and shift, or zero if either is absent.
pub fn lenient_rate(rates: &RateTable, day: &str, shift: &str) -> Decimal {
    rates.rate(day, shift).unwrap_or(Decimal::ZERO)
}

/// Calculates the amount for one day's shift load.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] if the amount leaves the
/// `Decimal` range.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::amount_for_day;
/// use shift_payroll::config::RateTable;
/// use shift_payroll::models::ShiftLoad;
/// use rust_decimal::Decimal;
///
/// let mut rates = RateTable::new();
/// rates.insert("SA", "day_shift", Decimal::from(20));
///
/// let mut load = ShiftLoad::new();
/// load.set("day_shift", 4);
///
/// assert_eq!(amount_for_day("SA", &load, &rates).unwrap(), Decimal::from(80));
/// assert_eq!(amount_for_day("XX", &load, &rates).unwrap(), Decimal::ZERO);
/// ```
pub fn amount_for_day(day: &str, load: &ShiftLoad, rates: &RateTable) -> EngineResult<Decimal> {
    if rates.day(day).is_none() {
        debug!(day = %day, hours = load.total_hours(), "No rate row for day, contributes 0");
        return Ok(Decimal::ZERO);
    }

    load.iter().try_fold(Decimal::ZERO, |amount, (shift, hours)| {
        Decimal::from(hours)
            .checked_mul(lenient_rate(rates, day, shift))
            .and_then(|pay| amount.checked_add(pay))
            .ok_or_else(|| overflow(day))
    })
}

/// Calculates the total amount for a week's workload.
///
/// Days with no rate row add nothing to the total.
pub fn amount_for_week(workload: &WeeklyWorkload, rates: &RateTable) -> EngineResult<Decimal> {
    workload.iter().try_fold(Decimal::ZERO, |total, (day, load)| {
        let amount = amount_for_day(day, load, rates)?;
        total.checked_add(amount).ok_or_else(|| overflow(day))
    })
}

fn overflow(day: &str) -> EngineError {
    EngineError::AmountOverflow {
        day: day.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use proptest::prelude::*;

    fn default_rates() -> RateTable {
        ConfigLoader::builtin().unwrap().into_config().rates().clone()
    }

    fn load(entries: &[(&str, u32)]) -> ShiftLoad {
        entries
            .iter()
            .map(|(name, hours)| (name.to_string(), *hours))
            .collect()
    }

    #[test]
    fn test_weekday_day_shift_amount() {
        let load = load(&[("night_shift", 0), ("day_shift", 2), ("evening_shift", 0)]);
        assert_eq!(amount_for_day("MO", &load, &default_rates()).unwrap(), Decimal::from(30));
    }

    #[test]
    fn test_mixed_shifts_amount() {
        // 3h night at 30 + 9h day at 20 + 2h evening at 25 on Sunday.
        let load = load(&[("night_shift", 3), ("day_shift", 9), ("evening_shift", 2)]);
        assert_eq!(amount_for_day("SU", &load, &default_rates()).unwrap(), Decimal::from(320));
    }

    #[test]
    fn test_unknown_day_contributes_zero() {
        let load = load(&[("day_shift", 8)]);
        assert_eq!(amount_for_day("XX", &load, &default_rates()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_shift_contributes_zero() {
        let load = load(&[("day_shift", 2), ("graveyard_shift", 5)]);
        assert_eq!(amount_for_day("TU", &load, &default_rates()).unwrap(), Decimal::from(30));
        assert_eq!(lenient_rate(&default_rates(), "TU", "graveyard_shift"), Decimal::ZERO);
    }

    #[test]
    fn test_week_total_skips_unknown_days() {
        let mut workload = WeeklyWorkload::new();
        workload.add("MO", &load(&[("day_shift", 2)]));
        workload.add("SA", &load(&[("day_shift", 4)]));
        workload.add("Monday", &load(&[("day_shift", 8)]));

        assert_eq!(amount_for_week(&workload, &default_rates()).unwrap(), Decimal::from(110));
    }

    #[test]
    fn test_empty_week_is_zero() {
        assert_eq!(
            amount_for_week(&WeeklyWorkload::new(), &default_rates()).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_overflowing_amount_is_an_error() {
        let mut rates = RateTable::new();
        rates.insert("MO", "day_shift", Decimal::MAX);
        let load = load(&[("day_shift", 2)]);

        match amount_for_day("MO", &load, &rates) {
            Err(EngineError::AmountOverflow { day }) => assert_eq!(day, "MO"),
            other => panic!("Expected AmountOverflow error, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_week_total_is_an_error() {
        let mut rates = RateTable::new();
        rates.insert("MO", "day_shift", Decimal::MAX);
        rates.insert("TU", "day_shift", Decimal::MAX);
        let mut workload = WeeklyWorkload::new();
        workload.add("MO", &load(&[("day_shift", 1)]));
        workload.add("TU", &load(&[("day_shift", 1)]));

        assert!(amount_for_day("MO", &load(&[("day_shift", 1)]), &rates).is_ok());
        assert!(matches!(
            amount_for_week(&workload, &rates),
            Err(EngineError::AmountOverflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_doubling_hours_doubles_amount(
            night in 0u32..24,
            day in 0u32..24,
            evening in 0u32..24,
            index in 0usize..7,
        ) {
            let rates = default_rates();
            let code = crate::models::DAY_CODES[index];
            let single = load(&[("night_shift", night), ("day_shift", day), ("evening_shift", evening)]);
            let double = load(&[("night_shift", night * 2), ("day_shift", day * 2), ("evening_shift", evening * 2)]);

            prop_assert_eq!(
                amount_for_day(code, &double, &rates).unwrap(),
                amount_for_day(code, &single, &rates).unwrap() * Decimal::from(2)
            );
        }

        #[test]
        fn prop_unknown_day_is_always_zero(hours in 0u32..1000, code in "[a-z]{2,4}") {
            let rates = default_rates();
            let load = load(&[("day_shift", hours), ("night_shift", hours)]);
            prop_assert_eq!(amount_for_day(&code, &load, &rates).unwrap(), Decimal::ZERO);
        }
    }
}
