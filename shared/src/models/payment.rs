//! Payment proof submitted by a customer for manual verification

use serde::{Deserialize, Serialize};

/// Review status of a payment proof
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

super::wire_enum!(ProofStatus, "proof status", {
    Pending => "pending",
    Verified => "verified",
    Rejected => "rejected",
});

/// Outcome an admin can record for a pending proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDecision {
    Verified,
    Rejected,
}

super::wire_enum!(VerificationDecision, "verification decision", {
    Verified => "verified",
    Rejected => "rejected",
});

impl From<VerificationDecision> for ProofStatus {
    fn from(decision: VerificationDecision) -> Self {
        match decision {
            VerificationDecision::Verified => ProofStatus::Verified,
            VerificationDecision::Rejected => ProofStatus::Rejected,
        }
    }
}

/// Mobile-banking payment proof. Field names are snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentProof {
    pub transaction_id: String,
    #[serde(default)]
    pub sender_number: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: ProofStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<String>,
}

impl PaymentProof {
    pub fn is_pending(&self) -> bool {
        self.status == ProofStatus::Pending
    }
}
