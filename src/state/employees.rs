use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{Dashboard, next_id};
use crate::error::{AppError, AppResult};
use crate::model::employee::{
    Employee, EmployeeUpdate, EmploymentStatus, NewEmployee, is_wallet_address,
};

#[derive(Debug, Default, Clone)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub status: Option<EmploymentStatus>,
    /// Case-insensitive match on name or position
    pub search: Option<String>,
}

impl EmployeeFilter {
    fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = &self.department {
            if !employee.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !employee.name.to_lowercase().contains(&needle)
                && !employee.position.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

fn require_text(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub(super) fn validate_salary(salary: Decimal) -> AppResult<()> {
    if salary < Decimal::ZERO {
        return Err(AppError::validation("salary must not be negative"));
    }
    if salary.normalize().scale() > 2 {
        return Err(AppError::validation("salary must not have more than two decimal places"));
    }
    Ok(())
}

fn validate_wallet(wallet: &str) -> AppResult<()> {
    if !is_wallet_address(wallet) {
        return Err(AppError::validation(
            "wallet address must be 0x followed by 40 hex characters",
        ));
    }
    Ok(())
}

impl Dashboard {
    pub fn add_employee(&mut self, input: NewEmployee) -> AppResult<Employee> {
        let name = require_text("name", &input.name)?;
        let department = require_text("department", &input.department)?;
        let position = require_text("position", &input.position)?;
        validate_salary(input.base_salary)?;
        validate_wallet(input.wallet_address.trim())?;

        let employee = Employee {
            id: next_id(&mut self.ids.employee),
            name,
            department,
            position,
            base_salary: input.base_salary,
            status: input.status.unwrap_or_default(),
            wallet_address: input.wallet_address.trim().to_string(),
        };

        info!(employee_id = employee.id, name = %employee.name, "Employee added");
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    pub fn employee(&self, id: u64) -> AppResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Employee {id}")))
    }

    /// Matching employees ordered by id.
    pub fn employees(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        self.employees
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn update_employee(&mut self, id: u64, changes: EmployeeUpdate) -> AppResult<Employee> {
        let mut updated = self.employee(id)?.clone();

        if let Some(name) = &changes.name {
            updated.name = require_text("name", name)?;
        }
        if let Some(department) = &changes.department {
            updated.department = require_text("department", department)?;
        }
        if let Some(position) = &changes.position {
            updated.position = require_text("position", position)?;
        }
        if let Some(salary) = changes.base_salary {
            validate_salary(salary)?;
            updated.base_salary = salary;
        }
        if let Some(wallet) = &changes.wallet_address {
            validate_wallet(wallet.trim())?;
            updated.wallet_address = wallet.trim().to_string();
        }
        if let Some(status) = changes.status {
            updated.status = status;
        }

        self.employees.insert(id, updated.clone());
        info!(employee_id = id, "Employee updated");

        if changes.base_salary.is_some() {
            self.regenerate_record(id)?;
        } else if changes.name.is_some() {
            self.rename_in_payroll(id, &updated.name);
        }
        Ok(updated)
    }

    /// Drops the employee together with their attendance tally.
    pub fn remove_employee(&mut self, id: u64) -> AppResult<Employee> {
        let removed = self.employees.remove(&id).ok_or_else(|| {
            warn!(employee_id = id, "Delete requested for unknown employee");
            AppError::not_found(format!("Employee {id}"))
        })?;
        self.attendance.remove(&id);
        self.regenerate_record(id)?;

        info!(employee_id = id, "Employee removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{hire, june, new_employee};
    use super::*;
    use crate::model::attendance::AttendanceTally;
    use rust_decimal_macros::dec;

    #[test]
    fn ids_are_sequential() {
        let mut dashboard = Dashboard::new(june());
        let a = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        let b = hire(&mut dashboard, "Michael Smith", dec!(5200));
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.status, EmploymentStatus::Active);
    }

    #[test]
    fn rejects_bad_wallet_and_salary() {
        let mut dashboard = Dashboard::new(june());

        let mut input = new_employee("Emily Davis", dec!(4100));
        input.wallet_address = "0x123".into();
        assert!(matches!(dashboard.add_employee(input), Err(AppError::Validation(_))));

        let input = new_employee("Emily Davis", dec!(-10));
        assert!(matches!(dashboard.add_employee(input), Err(AppError::Validation(_))));

        let input = new_employee("Emily Davis", dec!(4100.005));
        assert!(matches!(dashboard.add_employee(input), Err(AppError::Validation(_))));

        let input = new_employee("   ", dec!(4100));
        assert!(matches!(dashboard.add_employee(input), Err(AppError::Validation(_))));

        assert_eq!(dashboard.employee_count(), 0);
    }

    #[test]
    fn filter_by_department_status_and_search() {
        let mut dashboard = Dashboard::new(june());
        hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        let mut marketing = new_employee("Emily Davis", dec!(4100));
        marketing.department = "Marketing".into();
        marketing.status = Some(EmploymentStatus::OnLeave);
        dashboard.add_employee(marketing).unwrap();

        let by_department = dashboard.employees(&EmployeeFilter {
            department: Some("marketing".into()),
            ..Default::default()
        });
        assert_eq!(by_department.len(), 1);
        assert_eq!(by_department[0].name, "Emily Davis");

        let on_leave = dashboard.employees(&EmployeeFilter {
            status: Some(EmploymentStatus::OnLeave),
            ..Default::default()
        });
        assert_eq!(on_leave.len(), 1);

        let search = dashboard.employees(&EmployeeFilter {
            search: Some("JOHN".into()),
            ..Default::default()
        });
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].name, "Sarah Johnson");
    }

    #[test]
    fn salary_change_regenerates_payroll() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        dashboard
            .set_tally(AttendanceTally {
                employee_id: sarah.id,
                present_days: 18,
                absent_days: 4,
                late_days: 0,
            })
            .unwrap();

        dashboard
            .update_employee(
                sarah.id,
                EmployeeUpdate {
                    base_salary: Some(dec!(2200)),
                    ..Default::default()
                },
            )
            .unwrap();

        let record = &dashboard.payroll_records(None)[0];
        assert_eq!(record.base_salary, dec!(2200));
        assert_eq!(record.deduction, dec!(400));
    }

    #[test]
    fn removing_employee_drops_tally_and_record() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        dashboard.set_tally(AttendanceTally::empty(sarah.id)).unwrap();
        assert_eq!(dashboard.payroll_records(None).len(), 1);

        dashboard.remove_employee(sarah.id).unwrap();

        assert!(dashboard.tally(sarah.id).is_err());
        assert!(dashboard.payroll_records(None).is_empty());
        assert!(matches!(
            dashboard.remove_employee(sarah.id),
            Err(AppError::NotFound(_))
        ));
    }
}
