use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum LeaveType {
    Vacation,
    SickLeave,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 2)]
    pub employee_id: u64,
    #[schema(example = "Michael Smith")]
    pub employee_name: String,
    pub leave_type: LeaveType,
    #[schema(example = "2025-06-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-06-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    /// Inclusive of both ends
    #[schema(example = 3)]
    pub days_count: u32,
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewLeave {
    #[schema(example = 2)]
    pub employee_id: u64,
    pub leave_type: LeaveType,
    #[schema(example = "2025-06-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-06-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
}

/// Inclusive calendar-day span, or `None` when `end` precedes `start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    let span = end.signed_duration_since(start).num_days();
    u32::try_from(span).ok().map(|d| d + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_leave_counts_one() {
        assert_eq!(inclusive_days(date(2025, 6, 10), date(2025, 6, 10)), Some(1));
    }

    #[test]
    fn span_crosses_month_boundary() {
        assert_eq!(inclusive_days(date(2025, 6, 29), date(2025, 7, 2)), Some(4));
    }

    #[test]
    fn reversed_range_is_none() {
        assert_eq!(inclusive_days(date(2025, 6, 12), date(2025, 6, 10)), None);
    }
}
