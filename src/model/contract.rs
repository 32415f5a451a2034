use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

pub const DEFAULT_WORKING_HOURS: u32 = 40;
pub const MAX_WORKING_HOURS: u32 = 168;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum ContractType {
    Permanent,
    FixedTerm,
    Probation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum ContractStatus {
    PendingSignature,
    Active,
    Terminated,
}

impl ContractStatus {
    pub fn can_become(self, next: ContractStatus) -> bool {
        matches!(
            (self, next),
            (ContractStatus::PendingSignature, ContractStatus::Active)
                | (ContractStatus::PendingSignature, ContractStatus::Terminated)
                | (ContractStatus::Active, ContractStatus::Terminated)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contract {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "Sarah Johnson")]
    pub employee_name: String,
    pub contract_type: ContractType,
    #[schema(example = "2025-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    /// Always empty for permanent contracts
    #[schema(example = "2025-12-31", format = "date", value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = f64, example = 4800.0)]
    pub salary: Decimal,
    #[schema(example = 40)]
    pub working_hours: u32,
    pub status: ContractStatus,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewContract {
    #[schema(example = 1)]
    pub employee_id: u64,
    pub contract_type: ContractType,
    #[schema(example = "2025-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-12-31", format = "date", value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = f64, example = 4800.0)]
    pub salary: Decimal,
    /// Weekly hours, 40 when omitted
    #[schema(example = 40)]
    pub working_hours: Option<u32>,
}
