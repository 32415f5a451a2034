use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Sarah Johnson",
        "department": "Human Resources",
        "position": "HR Manager",
        "base_salary": 4800.0,
        "status": "active",
        "wallet_address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Sarah Johnson")]
    pub name: String,

    #[schema(example = "Human Resources")]
    pub department: String,

    #[schema(example = "HR Manager")]
    pub position: String,

    /// Monthly base salary
    #[schema(value_type = f64, example = 4800.0)]
    pub base_salary: Decimal,

    pub status: EmploymentStatus,

    #[schema(example = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F")]
    pub wallet_address: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "Sarah Johnson")]
    pub name: String,
    #[schema(example = "Human Resources")]
    pub department: String,
    #[schema(example = "HR Manager")]
    pub position: String,
    #[schema(value_type = f64, example = 4800.0)]
    pub base_salary: Decimal,
    #[schema(example = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F")]
    pub wallet_address: String,
    #[serde(default)]
    pub status: Option<EmploymentStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    #[schema(value_type = Option<f64>, example = 5200.0)]
    pub base_salary: Option<Decimal>,
    pub wallet_address: Option<String>,
    pub status: Option<EmploymentStatus>,
}

/// `0x` followed by exactly 40 hex digits.
pub fn is_wallet_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_case_wallet() {
        assert!(is_wallet_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"));
    }

    #[test]
    fn rejects_malformed_wallets() {
        assert!(!is_wallet_address("71C7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_wallet_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976"));
        assert!(!is_wallet_address("0xZZC7656EC7ab88b098defB751B7401B5f6d8976F"));
    }

    #[test]
    fn status_round_trips_through_strum() {
        use std::str::FromStr;
        assert_eq!(EmploymentStatus::OnLeave.to_string(), "on_leave");
        assert_eq!(
            EmploymentStatus::from_str("inactive").unwrap(),
            EmploymentStatus::Inactive
        );
    }
}
