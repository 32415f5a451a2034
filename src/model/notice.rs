use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Message shown to the operator after an action completes.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Notice {
    #[schema(example = "Payroll Processed")]
    pub title: String,
    #[schema(example = "Payroll for Sarah Johnson has been recorded on the blockchain")]
    pub description: String,
    /// Pseudo transaction reference for actions recorded "on chain". Nothing is broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "0x3f8e5b7b9c4d2a1e0f7c6b5d4e3c2b1a")]
    pub tx_ref: Option<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tx_ref: None,
        }
    }

    pub fn on_chain(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tx_ref: Some(format!("0x{}", Uuid::new_v4().to_simple())),
            ..Self::new(title, description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_chain_notice_has_hex_reference() {
        let notice = Notice::on_chain("Attendance Recorded", "recorded");
        let tx = notice.tx_ref.unwrap();
        assert!(tx.starts_with("0x"));
        assert_eq!(tx.len(), 34);
        assert!(tx[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn plain_notice_omits_reference() {
        let json = serde_json::to_value(Notice::new("Leave Rejected", "rejected")).unwrap();
        assert!(json.get("tx_ref").is_none());
    }
}
