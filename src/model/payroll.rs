use chrono::{Datelike, Month, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "month": 6, "year": 2025 }))]
pub struct Period {
    /// 1 = January
    pub month: u32,
    pub year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { month, year })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// e.g. `June 2025`
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum PayrollStatus {
    Pending,
    Processed,
    Failed,
}

impl PayrollStatus {
    /// Pending -> Processed | Failed, Failed -> Pending. Everything else is refused.
    pub fn can_become(self, next: PayrollStatus) -> bool {
        matches!(
            (self, next),
            (PayrollStatus::Pending, PayrollStatus::Processed)
                | (PayrollStatus::Pending, PayrollStatus::Failed)
                | (PayrollStatus::Failed, PayrollStatus::Pending)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "employee_id": 1,
    "employee_name": "Sarah Johnson",
    "days_worked": 18,
    "leaves_taken": 4,
    "base_salary": 4800.0,
    "deduction": 872.73,
    "final_amount": 3927.27,
    "status": "Pending",
    "period": { "month": 6, "year": 2025 }
}))]
pub struct PayrollRecord {
    pub employee_id: u64,
    pub employee_name: String,
    pub days_worked: u32,
    pub leaves_taken: u32,
    #[schema(value_type = f64)]
    pub base_salary: Decimal,
    #[schema(value_type = f64)]
    pub deduction: Decimal,
    #[schema(value_type = f64)]
    pub final_amount: Decimal,
    pub status: PayrollStatus,
    pub period: Period,
}

impl PayrollRecord {
    /// Moves the record to `next`. Amounts are never touched here.
    pub fn transition(&mut self, next: PayrollStatus) -> Result<(), AppError> {
        if !self.status.can_become(next) {
            return Err(AppError::transition(
                format!("payroll record for employee {}", self.employee_id),
                self.status,
                next,
            ));
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_label_uses_month_name() {
        assert_eq!(Period::new(6, 2025).unwrap().label(), "June 2025");
        assert_eq!(Period::new(12, 2024).unwrap().label(), "December 2024");
    }

    #[test]
    fn period_rejects_month_out_of_range() {
        assert!(Period::new(0, 2025).is_err());
        assert!(Period::new(13, 2025).is_err());
    }

    #[test]
    fn status_graph() {
        use PayrollStatus::*;
        assert!(Pending.can_become(Processed));
        assert!(Pending.can_become(Failed));
        assert!(Failed.can_become(Pending));

        assert!(!Processed.can_become(Pending));
        assert!(!Processed.can_become(Failed));
        assert!(!Failed.can_become(Processed));
        assert!(!Pending.can_become(Pending));
    }
}
