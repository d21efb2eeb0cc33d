//! Payroll calculation service.
//!
//! [`PayrollService`] runs a week record through parsing, allocation and
//! aggregation against one shared, read-only [`PayrollConfiguration`].

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{allocate, amount_for_day, amount_for_week, parse_day_record};
use crate::config::{ConfigLoader, PayrollConfiguration};
use crate::error::EngineResult;
use crate::models::{DayPay, EmployeeRecord, PayCalculation, WeeklyWorkload, weekday_for_code};

/// Calculates weekly pay from work records.
///
/// The configuration sits behind an `Arc`, so clones of the service are cheap
/// and can run calculations on separate threads without coordination.
///
/// # Example
///
/// ```
/// use shift_payroll::PayrollService;
/// use rust_decimal::Decimal;
///
/// let service = PayrollService::with_default_config().unwrap();
/// let total = service
///     .calculate("MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00")
///     .unwrap();
/// assert_eq!(total, Decimal::from(215));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollService {
    config: Arc<PayrollConfiguration>,
}

impl PayrollService {
    /// Creates a service owning the given configuration.
    pub fn new(config: PayrollConfiguration) -> Self {
        Self::from_shared(Arc::new(config))
    }

    /// Creates a service over an already shared configuration.
    pub fn from_shared(config: Arc<PayrollConfiguration>) -> Self {
        Self { config }
    }

    /// Creates a service with the built-in shifts and rates.
    pub fn with_default_config() -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::builtin()?.into_config()))
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PayrollConfiguration {
        &self.config
    }

    /// Returns a shared handle to the configuration in use.
    pub fn shared_config(&self) -> Arc<PayrollConfiguration> {
        Arc::clone(&self.config)
    }

    /// Replaces the configuration wholesale.
    ///
    /// Clones made earlier keep the configuration they were created with.
    pub fn reconfigure(&mut self, config: PayrollConfiguration) {
        info!(
            shifts = config.windows().len(),
            currency = %config.currency(),
            "Payroll configuration replaced"
        );
        self.config = Arc::new(config);
    }

    /// Parses a week record and allocates its hours per day and shift.
    ///
    /// A day code appearing more than once has its hours summed.
    pub fn workload(&self, week_record: &str) -> EngineResult<WeeklyWorkload> {
        let mut workload = WeeklyWorkload::new();
        for token in week_record.split(',') {
            let interval = parse_day_record(token)?;
            let load = allocate(&interval, self.config.windows());
            workload.add(interval.day, &load);
        }
        Ok(workload)
    }

    /// Calculates the total amount for a week record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::MalformedRecord`] if any token of
    /// the record cannot be parsed; no partial total is produced.
    /// Returns [`crate::error::EngineError::AmountOverflow`] if the total
    /// leaves the `Decimal` range.
    pub fn calculate(&self, week_record: &str) -> EngineResult<Decimal> {
        let workload = self.workload(week_record)?;
        amount_for_week(&workload, self.config.rates())
    }

    /// Calculates a week record with a per-day breakdown.
    pub fn calculate_detailed(&self, week_record: &str) -> EngineResult<PayCalculation> {
        let workload = self.workload(week_record)?;
        let rates = self.config.rates();

        let mut days: Vec<DayPay> = workload
            .iter()
            .map(|(day, load)| {
                Ok(DayPay {
                    day: day.to_string(),
                    hours: load.clone(),
                    amount: amount_for_day(day, load, rates)?,
                })
            })
            .collect::<EngineResult<_>>()?;
        days.sort_by(|a, b| day_order(&a.day).cmp(&day_order(&b.day)));

        let total = amount_for_week(&workload, rates)?;
        debug!(days = days.len(), total = %total, "Calculated week record");

        Ok(PayCalculation {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee: None,
            currency: self.config.currency().to_string(),
            days,
            total,
        })
    }

    /// Calculates pay for one `NAME=RECORD` input line.
    pub fn process_line(&self, line: &str) -> EngineResult<PayCalculation> {
        let record = EmployeeRecord::parse(line)?;
        let mut calculation = self.calculate_detailed(&record.record)?;
        calculation.employee = Some(record.name);
        Ok(calculation)
    }

    /// Processes input lines independently, keeping their order.
    ///
    /// A failing line yields an error in its slot and does not affect the
    /// other lines.
    pub fn calculate_batch<I, S>(&self, lines: I) -> Vec<EngineResult<PayCalculation>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.process_line(line.as_ref()))
            .collect()
    }
}

/// Sort key placing known day codes Monday first and unknown codes last.
fn day_order(day: &str) -> (u32, &str) {
    let position = weekday_for_code(day)
        .map(|weekday| weekday.num_days_from_monday())
        .unwrap_or(7);
    (position, day)
}
