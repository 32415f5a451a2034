use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::Dashboard;
use crate::model::{
    contract::ContractStatus, employee::EmploymentStatus, leave_request::LeaveStatus,
    payroll::PayrollStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = "June 2025")]
    pub period: String,
    pub total_employees: usize,
    pub active_employees: usize,
    #[schema(value_type = f64)]
    pub payroll_processed: Decimal,
    pub payroll_pending: usize,
    pub leave_approved: usize,
    pub leave_pending: usize,
    pub contracts_total: usize,
    pub contracts_pending_signature: usize,
}

impl Dashboard {
    pub fn stats(&self) -> DashboardStats {
        let count_leave = |status: LeaveStatus| {
            self.leave_requests
                .values()
                .filter(|r| r.status == status)
                .count()
        };

        DashboardStats {
            period: self.period.label(),
            total_employees: self.employees.len(),
            active_employees: self
                .employees
                .values()
                .filter(|e| e.status == EmploymentStatus::Active)
                .count(),
            payroll_processed: self.payroll_totals().processed_amount,
            payroll_pending: self
                .payroll
                .iter()
                .filter(|r| r.status == PayrollStatus::Pending)
                .count(),
            leave_approved: count_leave(LeaveStatus::Approved),
            leave_pending: count_leave(LeaveStatus::Pending),
            contracts_total: self.contracts.len(),
            contracts_pending_signature: self
                .contracts
                .values()
                .filter(|c| c.status == ContractStatus::PendingSignature)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{hire, june};
    use super::*;
    use crate::model::attendance::AttendanceTally;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_dashboard() {
        let stats = Dashboard::new(june()).stats();
        assert_eq!(stats.period, "June 2025");
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.payroll_processed, Decimal::ZERO);
    }

    #[test]
    fn counts_processed_payroll() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        let michael = hire(&mut dashboard, "Michael Smith", dec!(2200));
        dashboard.set_tally(AttendanceTally::empty(sarah.id)).unwrap();
        dashboard.set_tally(AttendanceTally::empty(michael.id)).unwrap();
        dashboard.process_payroll(sarah.id).unwrap();

        let stats = dashboard.stats();

        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.active_employees, 2);
        assert_eq!(stats.payroll_processed, dec!(4800));
        assert_eq!(stats.payroll_pending, 1);
    }
}
