use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::secrets::SecretChain;

const PAYMENT_ENTRY: &str = "payment_info";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    pub number: String,
    pub cvv: String,
}

impl PaymentCard {
    /// Only the last four digits are ever shown.
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** **** **** {}", tail)
    }
}

/// Card data kept in the same secret chain as the session credentials.
#[derive(Clone)]
pub struct PaymentVault {
    chain: Arc<SecretChain>,
}

impl PaymentVault {
    pub fn new(chain: Arc<SecretChain>) -> Self {
        Self { chain }
    }

    pub fn save(&self, number: &str, cvv: &str) -> Result<PaymentCard> {
        let number = number.trim();
        let cvv = cvv.trim();
        if number.is_empty() || cvv.is_empty() {
            anyhow::bail!("card number and CVV are required");
        }

        let card = PaymentCard {
            number: number.to_string(),
            cvv: cvv.to_string(),
        };
        let raw = serde_json::to_string(&card).context("serialize card")?;
        self.chain
            .set(PAYMENT_ENTRY, &raw)
            .context("store payment card")?;
        Ok(card)
    }

    pub fn load(&self) -> Option<PaymentCard> {
        let raw = self.chain.get(PAYMENT_ENTRY)?;
        match serde_json::from_str(&raw) {
            Ok(card) => Some(card),
            Err(err) => {
                tracing::warn!(error = %err, "saved card unreadable; purging");
                self.clear();
                None
            }
        }
    }

    pub fn clear(&self) {
        let failures = self.chain.delete(PAYMENT_ENTRY);
        if failures > 0 {
            tracing::warn!(failures, "payment data not cleared from every store");
        }
    }
}

#[cfg(test)]
#[path = "tests/payment_tests.rs"]
mod tests;
