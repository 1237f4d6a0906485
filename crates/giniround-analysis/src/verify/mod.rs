//! Contract and property verification for rounding primitives

pub mod contracts;
pub mod properties;

use serde::{Deserialize, Serialize};

pub use contracts::{Condition, ConditionResult, Contract, ContractChecker};
pub use properties::PropertyVerifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Proven,
    Violated(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub property: String,
    pub status: PropertyStatus,
    /// Number of inputs the property was checked against.
    pub checked: usize,
    pub counterexamples: Vec<String>,
}

impl VerificationResult {
    pub fn is_proven(&self) -> bool {
        self.status == PropertyStatus::Proven
    }
}
