use tracing::{debug, info, warn};

use super::Dashboard;
use crate::error::{AppError, AppResult};
use crate::model::attendance::{AttendanceTally, DailyStatus};

impl Dashboard {
    pub fn tallies(&self) -> Vec<AttendanceTally> {
        self.attendance.values().copied().collect()
    }

    pub fn tally(&self, employee_id: u64) -> AppResult<AttendanceTally> {
        self.employee(employee_id)?;
        self.attendance
            .get(&employee_id)
            .copied()
            .ok_or_else(|| AppError::not_found(format!("Attendance for employee {employee_id}")))
    }

    /// Replaces the employee's tally for the current period and regenerates their payroll record.
    pub fn set_tally(&mut self, tally: AttendanceTally) -> AppResult<AttendanceTally> {
        self.employee(tally.employee_id)?;
        tally.validate().map_err(|message| {
            warn!(employee_id = tally.employee_id, %message, "Rejected attendance tally");
            AppError::Validation(message)
        })?;

        self.attendance.insert(tally.employee_id, tally);
        info!(
            employee_id = tally.employee_id,
            present = tally.present_days,
            absent = tally.absent_days,
            late = tally.late_days,
            "Attendance tally set"
        );

        self.regenerate_record(tally.employee_id)?;
        Ok(tally)
    }

    /// Counts one day for the employee, starting an empty tally if needed.
    pub fn mark_day(&mut self, employee_id: u64, status: DailyStatus) -> AppResult<AttendanceTally> {
        self.employee(employee_id)?;

        let mut tally = self
            .attendance
            .get(&employee_id)
            .copied()
            .unwrap_or_else(|| AttendanceTally::empty(employee_id));
        tally.record(status).map_err(|message| {
            warn!(employee_id, %status, %message, "Rejected attendance mark");
            AppError::Validation(message)
        })?;

        self.attendance.insert(employee_id, tally);
        debug!(employee_id, %status, recorded = tally.recorded_days(), "Attendance marked");

        self.regenerate_record(employee_id)?;
        Ok(tally)
    }

    /// Clears every tally, e.g. when a new reference period starts.
    pub fn reset_attendance(&mut self) -> AppResult<usize> {
        let cleared = self.attendance.len();
        self.attendance.clear();
        self.sync_payroll()?;
        info!(cleared, "Attendance reset");
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{hire, june};
    use super::*;
    use crate::model::attendance::REFERENCE_DAYS;
    use crate::model::payroll::PayrollStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn set_tally_requires_known_employee() {
        let mut dashboard = Dashboard::new(june());
        let err = dashboard.set_tally(AttendanceTally::empty(42)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn set_tally_rejects_more_days_than_period() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));

        let err = dashboard
            .set_tally(AttendanceTally {
                employee_id: sarah.id,
                present_days: 0,
                absent_days: REFERENCE_DAYS + 1,
                late_days: 0,
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(dashboard.tally(sarah.id).is_err());
    }

    #[test]
    fn marking_days_builds_tally_and_payroll() {
        let mut dashboard = Dashboard::new(june());
        let james = hire(&mut dashboard, "James Wilson", dec!(2200));

        dashboard.mark_day(james.id, DailyStatus::Present).unwrap();
        dashboard.mark_day(james.id, DailyStatus::Late).unwrap();
        let tally = dashboard.mark_day(james.id, DailyStatus::Absent).unwrap();

        assert_eq!(tally.recorded_days(), 3);
        let record = &dashboard.payroll_records(None)[0];
        assert_eq!(record.days_worked, 2);
        assert_eq!(record.leaves_taken, 1);
        assert_eq!(record.deduction, dec!(100));
    }

    #[test]
    fn marking_resets_processed_record_to_pending() {
        let mut dashboard = Dashboard::new(june());
        let james = hire(&mut dashboard, "James Wilson", dec!(2200));
        dashboard.mark_day(james.id, DailyStatus::Present).unwrap();
        dashboard.process_payroll(james.id).unwrap();

        dashboard.mark_day(james.id, DailyStatus::Absent).unwrap();

        assert_eq!(dashboard.payroll_records(None)[0].status, PayrollStatus::Pending);
    }

    #[test]
    fn reset_clears_all_tallies() {
        let mut dashboard = Dashboard::new(june());
        let a = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        let b = hire(&mut dashboard, "Michael Smith", dec!(5200));
        dashboard.mark_day(a.id, DailyStatus::Present).unwrap();
        dashboard.mark_day(b.id, DailyStatus::Absent).unwrap();

        assert_eq!(dashboard.reset_attendance().unwrap(), 2);
        assert!(dashboard.tallies().is_empty());
        assert!(dashboard.payroll_records(None).is_empty());
    }
}
