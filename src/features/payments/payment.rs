//! Payment - Demo Row Type

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Success,
    Failed,
    Alex,
    Zebra,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Alex => "alex",
            PaymentStatus::Zebra => "zebra",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique ID, also the selection key
    pub id: String,
    /// Amount in whole dollars
    pub amount: u64,
    pub status: PaymentStatus,
    pub email: String,
}

impl Payment {
    pub fn new(id: &str, amount: u64, status: PaymentStatus, email: &str) -> Self {
        Self {
            id: id.to_string(),
            amount,
            status,
            email: email.to_string(),
        }
    }
}

/// The fixed data set served by the simulated backend
pub fn sample_payments() -> Vec<Payment> {
    use PaymentStatus::*;
    vec![
        Payment::new("728eg52f", 100, Pending, "1"),
        Payment::new("7283d52f", 200, Pending, "2"),
        Payment::new("728edk2f", 200, Alex, "3"),
        Payment::new("728el52f", 200, Zebra, "4"),
        Payment::new("728et52f", 200, Pending, "5"),
        Payment::new("728fd52f", 200, Pending, "6"),
        Payment::new("728ec52f", 200, Pending, "7"),
    ]
}
