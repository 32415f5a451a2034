//! Derives payroll records from salary and attendance.
//!
//! `deduction = base_salary * absent_days / 22` and
//! `final_amount = base_salary - deduction`, both rounded half-up to cents.
//! The final amount is taken from the already rounded deduction so the two
//! always add back up to the base salary.

use std::collections::BTreeMap;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{
    attendance::{AttendanceTally, REFERENCE_DAYS},
    employee::Employee,
    payroll::{PayrollRecord, PayrollStatus, Period},
};

#[derive(Debug, Display, PartialEq, Eq)]
pub enum PayrollCalcError {
    #[display(fmt = "base salary of employee {} is negative ({})", employee_id, salary)]
    NegativeSalary { employee_id: u64, salary: Decimal },

    #[display(
        fmt = "employee {} has {} absent days but the reference period has only {}",
        employee_id,
        absent_days,
        REFERENCE_DAYS
    )]
    AbsenceOutOfRange { employee_id: u64, absent_days: u32 },

    #[display(
        fmt = "attendance of employee {} cannot be used for employee {}",
        tally_employee_id,
        employee_id
    )]
    MismatchedTally {
        employee_id: u64,
        tally_employee_id: u64,
    },
}

impl std::error::Error for PayrollCalcError {}

/// Records for every employee that has a tally, plus the ids that had none.
#[derive(Debug, Default, PartialEq)]
pub struct PayrollBatch {
    pub records: Vec<PayrollRecord>,
    pub skipped: Vec<u64>,
}

pub fn round_cents(value: Decimal) -> Decimal {
    // Inputs are validated non-negative, where away-from-zero is half-up.
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn deduction_for(base_salary: Decimal, absent_days: u32) -> Decimal {
    round_cents(base_salary * Decimal::from(absent_days) / Decimal::from(REFERENCE_DAYS))
}

pub fn calculate(
    employee: &Employee,
    tally: &AttendanceTally,
    period: Period,
) -> Result<PayrollRecord, PayrollCalcError> {
    if tally.employee_id != employee.id {
        return Err(PayrollCalcError::MismatchedTally {
            employee_id: employee.id,
            tally_employee_id: tally.employee_id,
        });
    }
    if employee.base_salary < Decimal::ZERO {
        return Err(PayrollCalcError::NegativeSalary {
            employee_id: employee.id,
            salary: employee.base_salary,
        });
    }
    if tally.absent_days > REFERENCE_DAYS {
        return Err(PayrollCalcError::AbsenceOutOfRange {
            employee_id: employee.id,
            absent_days: tally.absent_days,
        });
    }

    let deduction = deduction_for(employee.base_salary, tally.absent_days);
    let final_amount = round_cents(employee.base_salary - deduction);

    Ok(PayrollRecord {
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        days_worked: tally.days_worked(),
        leaves_taken: tally.absent_days,
        base_salary: employee.base_salary,
        deduction,
        final_amount,
        status: PayrollStatus::Pending,
        period,
    })
}

/// Runs [`calculate`] over the whole roster. Stops at the first invalid input.
pub fn calculate_all<'a>(
    roster: impl IntoIterator<Item = &'a Employee>,
    tallies: &BTreeMap<u64, AttendanceTally>,
    period: Period,
) -> Result<PayrollBatch, PayrollCalcError> {
    let mut batch = PayrollBatch::default();

    for employee in roster {
        match tallies.get(&employee.id) {
            Some(tally) => batch.records.push(calculate(employee, tally, period)?),
            None => batch.skipped.push(employee.id),
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::EmploymentStatus;
    use rust_decimal_macros::dec;

    fn employee(id: u64, salary: Decimal) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            department: "Engineering".into(),
            position: "Engineer".into(),
            base_salary: salary,
            status: EmploymentStatus::Active,
            wallet_address: "0xb794f5ea0ba39494ce839613fffba74279579268".into(),
        }
    }

    fn tally(id: u64, present: u32, absent: u32, late: u32) -> AttendanceTally {
        AttendanceTally {
            employee_id: id,
            present_days: present,
            absent_days: absent,
            late_days: late,
        }
    }

    fn june() -> Period {
        Period::new(6, 2025).unwrap()
    }

    #[test]
    fn four_absences_on_4800() {
        let record = calculate(&employee(1, dec!(4800)), &tally(1, 18, 4, 0), june()).unwrap();

        assert_eq!(record.deduction, dec!(872.73));
        assert_eq!(record.final_amount, dec!(3927.27));
        assert_eq!(record.days_worked, 18);
        assert_eq!(record.leaves_taken, 4);
        assert_eq!(record.status, PayrollStatus::Pending);
        assert_eq!(record.period, june());
    }

    #[test]
    fn no_absences_pays_full_salary() {
        let record = calculate(&employee(1, dec!(5250.50)), &tally(1, 20, 0, 2), june()).unwrap();

        assert_eq!(record.deduction, Decimal::ZERO);
        assert_eq!(record.final_amount, dec!(5250.50));
        assert_eq!(record.days_worked, 22);
    }

    #[test]
    fn full_absence_pays_nothing() {
        let record = calculate(&employee(1, dec!(3999.99)), &tally(1, 0, 22, 0), june()).unwrap();

        assert_eq!(record.deduction, dec!(3999.99));
        assert_eq!(record.final_amount, Decimal::ZERO);
    }

    #[test]
    fn final_plus_deduction_is_base() {
        for salary in [dec!(1000), dec!(1234.57), dec!(7777.77), dec!(0.01)] {
            for absent in 0..=REFERENCE_DAYS {
                let record =
                    calculate(&employee(1, salary), &tally(1, 0, absent, 0), june()).unwrap();
                assert_eq!(record.deduction + record.final_amount, salary);
                assert!(record.deduction.scale() <= 2);
            }
        }
    }

    #[test]
    fn midpoint_rounds_up() {
        // 0.11 * 1 / 22 = 0.005 exactly
        assert_eq!(deduction_for(dec!(0.11), 1), dec!(0.01));
        assert_eq!(round_cents(dec!(2.345)), dec!(2.35));
        assert_eq!(round_cents(dec!(2.3449)), dec!(2.34));
    }

    #[test]
    fn recalculation_is_deterministic() {
        let e = employee(2, dec!(6100));
        let t = tally(2, 15, 5, 2);
        let first = calculate(&e, &t, june()).unwrap();
        let second = calculate(&e, &t, june()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn absences_beyond_period_are_rejected() {
        let err = calculate(&employee(1, dec!(4800)), &tally(1, 0, 23, 0), june()).unwrap_err();
        assert_eq!(
            err,
            PayrollCalcError::AbsenceOutOfRange {
                employee_id: 1,
                absent_days: 23
            }
        );
    }

    #[test]
    fn negative_salary_is_rejected() {
        let err = calculate(&employee(1, dec!(-1)), &tally(1, 22, 0, 0), june()).unwrap_err();
        assert!(matches!(err, PayrollCalcError::NegativeSalary { .. }));
    }

    #[test]
    fn zero_salary_is_allowed() {
        let record = calculate(&employee(1, dec!(0)), &tally(1, 10, 12, 0), june()).unwrap();
        assert_eq!(record.final_amount, Decimal::ZERO);
    }

    #[test]
    fn tally_must_belong_to_employee() {
        let err = calculate(&employee(1, dec!(4800)), &tally(2, 22, 0, 0), june()).unwrap_err();
        assert!(matches!(err, PayrollCalcError::MismatchedTally { .. }));
    }

    #[test]
    fn batch_skips_employees_without_attendance() {
        let roster = vec![employee(1, dec!(4800)), employee(2, dec!(5000)), employee(3, dec!(6000))];
        let mut tallies = BTreeMap::new();
        tallies.insert(1, tally(1, 18, 4, 0));
        tallies.insert(3, tally(3, 22, 0, 0));

        let batch = calculate_all(&roster, &tallies, june()).unwrap();

        assert_eq!(batch.skipped, vec![2]);
        let ids: Vec<u64> = batch.records.iter().map(|r| r.employee_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
