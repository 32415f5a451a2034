use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Working days in one reference period. Denominator of the absenteeism rate.
pub const REFERENCE_DAYS: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum DailyStatus {
    Present,
    Absent,
    Late,
}

/// Per-employee day counts for the current reference period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "employee_id": 1,
    "present_days": 18,
    "absent_days": 4,
    "late_days": 0
}))]
pub struct AttendanceTally {
    pub employee_id: u64,
    pub present_days: u32,
    pub absent_days: u32,
    pub late_days: u32,
}

impl AttendanceTally {
    pub fn empty(employee_id: u64) -> Self {
        Self {
            employee_id,
            ..Default::default()
        }
    }

    pub fn recorded_days(&self) -> u32 {
        self.present_days
            .saturating_add(self.absent_days)
            .saturating_add(self.late_days)
    }

    /// Late arrivals still count as worked days.
    pub fn days_worked(&self) -> u32 {
        self.present_days + self.late_days
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.recorded_days() > REFERENCE_DAYS {
            return Err(format!(
                "attendance for employee {} covers {} days but the reference period has {}",
                self.employee_id,
                self.recorded_days(),
                REFERENCE_DAYS
            ));
        }
        Ok(())
    }

    /// Counts one more day with `status`; fails once the period is full.
    pub fn record(&mut self, status: DailyStatus) -> Result<(), String> {
        if self.recorded_days() >= REFERENCE_DAYS {
            return Err(format!(
                "all {} days of the reference period are already recorded for employee {}",
                REFERENCE_DAYS, self.employee_id
            ));
        }
        match status {
            DailyStatus::Present => self.present_days += 1,
            DailyStatus::Absent => self.absent_days += 1,
            DailyStatus::Late => self.late_days += 1,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_matching_counter() {
        let mut tally = AttendanceTally::empty(3);
        tally.record(DailyStatus::Present).unwrap();
        tally.record(DailyStatus::Late).unwrap();
        tally.record(DailyStatus::Absent).unwrap();

        assert_eq!(tally.present_days, 1);
        assert_eq!(tally.late_days, 1);
        assert_eq!(tally.absent_days, 1);
        assert_eq!(tally.days_worked(), 2);
    }

    #[test]
    fn record_refuses_past_reference_period() {
        let mut tally = AttendanceTally {
            employee_id: 1,
            present_days: 20,
            absent_days: 2,
            late_days: 0,
        };
        assert!(tally.record(DailyStatus::Present).is_err());
        assert_eq!(tally.recorded_days(), REFERENCE_DAYS);
    }

    #[test]
    fn validate_rejects_overfull_tally() {
        let tally = AttendanceTally {
            employee_id: 1,
            present_days: 18,
            absent_days: 4,
            late_days: 1,
        };
        assert!(tally.validate().is_err());
    }
}
