use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use super::Dashboard;
use crate::error::{AppError, AppResult};
use crate::model::payroll::{PayrollRecord, PayrollStatus, Period};
use crate::services::payroll_calculator;

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PayrollTotals {
    #[schema(value_type = f64)]
    pub base_salary: Decimal,
    #[schema(value_type = f64)]
    pub deduction: Decimal,
    #[schema(value_type = f64)]
    pub final_amount: Decimal,
    /// Sum of final amounts already processed
    #[schema(value_type = f64)]
    pub processed_amount: Decimal,
}

impl Dashboard {
    /// Switches to `period` and rebuilds every record from current attendance.
    /// Returns the ids of employees skipped for lack of attendance.
    pub fn recalculate(&mut self, period: Period) -> AppResult<Vec<u64>> {
        let batch =
            payroll_calculator::calculate_all(self.employees.values(), &self.attendance, period)?;

        self.period = period;
        self.payroll = batch.records;
        if !batch.skipped.is_empty() {
            warn!(skipped = ?batch.skipped, "Employees without attendance left out of payroll");
        }
        info!(
            period = %period.label(),
            records = self.payroll.len(),
            "Payroll recalculated"
        );
        Ok(batch.skipped)
    }

    /// Rebuilds records for the current period.
    pub fn sync_payroll(&mut self) -> AppResult<Vec<u64>> {
        self.recalculate(self.period)
    }

    /// Recomputes one employee's record after their own pay inputs changed.
    /// Every other record keeps its status. The record is dropped once the
    /// employee or their tally is gone.
    pub(super) fn regenerate_record(&mut self, employee_id: u64) -> AppResult<()> {
        let fresh = match (
            self.employees.get(&employee_id),
            self.attendance.get(&employee_id),
        ) {
            (Some(employee), Some(tally)) => {
                Some(payroll_calculator::calculate(employee, tally, self.period)?)
            }
            _ => None,
        };

        // records stay ordered by employee id
        let slot = self
            .payroll
            .binary_search_by_key(&employee_id, |r| r.employee_id);
        match (slot, fresh) {
            (Ok(i), Some(record)) => self.payroll[i] = record,
            (Err(i), Some(record)) => self.payroll.insert(i, record),
            (Ok(i), None) => {
                self.payroll.remove(i);
            }
            (Err(_), None) => {}
        }
        debug!(employee_id, "Payroll record regenerated");
        Ok(())
    }

    /// Carries a new display name into the employee's record without touching its status.
    pub(super) fn rename_in_payroll(&mut self, employee_id: u64, name: &str) {
        if let Some(record) = self
            .payroll
            .iter_mut()
            .find(|r| r.employee_id == employee_id)
        {
            record.employee_name = name.to_string();
        }
    }

    pub fn payroll_records(&self, status: Option<PayrollStatus>) -> Vec<PayrollRecord> {
        self.payroll
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect()
    }

    pub fn payroll_totals(&self) -> PayrollTotals {
        self.payroll
            .iter()
            .fold(PayrollTotals::default(), |mut totals, record| {
                totals.base_salary += record.base_salary;
                totals.deduction += record.deduction;
                totals.final_amount += record.final_amount;
                if record.status == PayrollStatus::Processed {
                    totals.processed_amount += record.final_amount;
                }
                totals
            })
    }

    fn payroll_record_mut(&mut self, employee_id: u64) -> AppResult<&mut PayrollRecord> {
        self.payroll
            .iter_mut()
            .find(|r| r.employee_id == employee_id)
            .ok_or_else(|| AppError::not_found(format!("Payroll record for employee {employee_id}")))
    }

    fn move_payroll(&mut self, employee_id: u64, next: PayrollStatus) -> AppResult<PayrollRecord> {
        let record = self.payroll_record_mut(employee_id)?;
        record.transition(next).inspect_err(|e| {
            warn!(employee_id, error = %e, "Rejected payroll status change");
        })?;
        info!(employee_id, status = %next, "Payroll status changed");
        Ok(record.clone())
    }

    pub fn process_payroll(&mut self, employee_id: u64) -> AppResult<PayrollRecord> {
        self.move_payroll(employee_id, PayrollStatus::Processed)
    }

    /// Marks a pending record as failed.
    pub fn fail_payroll(&mut self, employee_id: u64) -> AppResult<PayrollRecord> {
        self.move_payroll(employee_id, PayrollStatus::Failed)
    }

    pub fn retry_payroll(&mut self, employee_id: u64) -> AppResult<PayrollRecord> {
        self.move_payroll(employee_id, PayrollStatus::Pending)
    }

    /// Processes every pending record; failed and processed ones are left alone.
    pub fn process_all_payroll(&mut self) -> Vec<PayrollRecord> {
        let mut processed = Vec::new();
        for record in self
            .payroll
            .iter_mut()
            .filter(|r| r.status == PayrollStatus::Pending)
        {
            record.status = PayrollStatus::Processed;
            processed.push(record.clone());
        }
        info!(count = processed.len(), "Pending payroll processed");
        processed
    }
}
