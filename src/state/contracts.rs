use chrono::Utc;
use tracing::{info, warn};

use super::{Dashboard, employees::validate_salary, next_id};
use crate::error::{AppError, AppResult};
use crate::model::contract::{
    Contract, ContractStatus, ContractType, DEFAULT_WORKING_HOURS, MAX_WORKING_HOURS, NewContract,
};

impl Dashboard {
    pub fn create_contract(&mut self, input: NewContract) -> AppResult<Contract> {
        let employee_name = self.employee(input.employee_id)?.name.clone();
        validate_salary(input.salary)?;

        let working_hours = input.working_hours.unwrap_or(DEFAULT_WORKING_HOURS);
        if !(1..=MAX_WORKING_HOURS).contains(&working_hours) {
            return Err(AppError::validation(format!(
                "working hours must be between 1 and {MAX_WORKING_HOURS}"
            )));
        }

        let end_date = match input.contract_type {
            ContractType::Permanent => None,
            _ => {
                let end = input.end_date.ok_or_else(|| {
                    AppError::validation(format!(
                        "{} contracts need an end_date",
                        input.contract_type
                    ))
                })?;
                if end < input.start_date {
                    return Err(AppError::validation("end_date cannot be before start_date"));
                }
                Some(end)
            }
        };

        let contract = Contract {
            id: next_id(&mut self.ids.contract),
            employee_id: input.employee_id,
            employee_name,
            contract_type: input.contract_type,
            start_date: input.start_date,
            end_date,
            salary: input.salary,
            working_hours,
            status: ContractStatus::PendingSignature,
            created_at: Utc::now(),
        };

        info!(
            contract_id = contract.id,
            employee_id = contract.employee_id,
            contract_type = %contract.contract_type,
            "Contract created"
        );
        self.contracts.insert(contract.id, contract.clone());
        Ok(contract)
    }

    pub fn contracts(&self, employee_id: Option<u64>) -> Vec<Contract> {
        self.contracts
            .values()
            .filter(|c| employee_id.is_none_or(|id| c.employee_id == id))
            .cloned()
            .collect()
    }

    fn move_contract(&mut self, id: u64, next: ContractStatus) -> AppResult<Contract> {
        let contract = self
            .contracts
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Contract {id}")))?;

        if !contract.status.can_become(next) {
            warn!(contract_id = id, from = %contract.status, to = %next, "Rejected contract change");
            return Err(AppError::transition(format!("contract {id}"), contract.status, next));
        }
        contract.status = next;
        info!(contract_id = id, status = %next, "Contract status changed");
        Ok(contract.clone())
    }

    pub fn sign_contract(&mut self, id: u64) -> AppResult<Contract> {
        self.move_contract(id, ContractStatus::Active)
    }

    pub fn terminate_contract(&mut self, id: u64) -> AppResult<Contract> {
        self.move_contract(id, ContractStatus::Terminated)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{hire, june};
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn contract_for(employee_id: u64, contract_type: ContractType) -> NewContract {
        NewContract {
            employee_id,
            contract_type,
            start_date: date(1, 1),
            end_date: Some(date(12, 31)),
            salary: dec!(4800),
            working_hours: None,
        }
    }

    #[test]
    fn permanent_contract_drops_end_date() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));

        let contract = dashboard
            .create_contract(contract_for(sarah.id, ContractType::Permanent))
            .unwrap();

        assert_eq!(contract.end_date, None);
        assert_eq!(contract.working_hours, DEFAULT_WORKING_HOURS);
        assert_eq!(contract.status, ContractStatus::PendingSignature);
    }

    #[test]
    fn fixed_term_needs_ordered_end_date() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));

        let mut input = contract_for(sarah.id, ContractType::FixedTerm);
        input.end_date = None;
        assert!(matches!(dashboard.create_contract(input), Err(AppError::Validation(_))));

        let mut input = contract_for(sarah.id, ContractType::Probation);
        input.end_date = Some(date(1, 1).pred_opt().unwrap());
        assert!(matches!(dashboard.create_contract(input), Err(AppError::Validation(_))));

        let input = contract_for(sarah.id, ContractType::FixedTerm);
        assert_eq!(dashboard.create_contract(input).unwrap().end_date, Some(date(12, 31)));
    }

    #[test]
    fn rejects_out_of_range_hours() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));

        let mut input = contract_for(sarah.id, ContractType::Permanent);
        input.working_hours = Some(0);
        assert!(dashboard.create_contract(input).is_err());
    }

    #[test]
    fn sign_then_terminate() {
        let mut dashboard = Dashboard::new(june());
        let sarah = hire(&mut dashboard, "Sarah Johnson", dec!(4800));
        let contract = dashboard
            .create_contract(contract_for(sarah.id, ContractType::Permanent))
            .unwrap();

        assert_eq!(dashboard.sign_contract(contract.id).unwrap().status, ContractStatus::Active);
        assert!(matches!(
            dashboard.sign_contract(contract.id),
            Err(AppError::InvalidTransition { .. })
        ));
        assert_eq!(
            dashboard.terminate_contract(contract.id).unwrap().status,
            ContractStatus::Terminated
        );
        assert_eq!(dashboard.contracts(Some(sarah.id)).len(), 1);
        assert!(dashboard.contracts(Some(99)).is_empty());
    }
}
