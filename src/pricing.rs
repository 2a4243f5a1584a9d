//! How the submitted order total is treated.
//!
//! The total comes from the client. By default it is stored as submitted and a mismatch
//! with Σ price × quantity is only logged; the `verify` policy checks lines against the
//! menu and rejects a request whose total does not add up.

use crate::menu::Menu;
use crate::model::OrderDraft;
use std::str::FromStr;
use tracing::warn;

/// Totals are compared to the cent.
const TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalPolicy {
    #[default]
    Trust,
    Verify,
}

impl FromStr for TotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trust" => Ok(TotalPolicy::Trust),
            "verify" => Ok(TotalPolicy::Verify),
            other => Err(format!("expected trust or verify, got {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalCheck {
    Matches,
    /// Kept as submitted under [`TotalPolicy::Trust`].
    Mismatch { submitted: f64, computed: f64 },
}

impl TotalPolicy {
    /// Checks `draft` before anything is written. Errors are validation messages.
    pub fn check(&self, menu: &Menu, draft: &OrderDraft) -> Result<TotalCheck, String> {
        if *self == TotalPolicy::Verify {
            for line in &draft.items {
                match menu.price_of(&line.name) {
                    Some(price) if (price - line.price).abs() < TOLERANCE => {}
                    Some(_) => return Err(format!("Price of {} does not match the menu", line.name)),
                    None => return Err(format!("Unknown menu item: {}", line.name)),
                }
            }
        }

        let submitted = draft.order.total_amount;
        let computed = draft.computed_total();
        if (submitted - computed).abs() < TOLERANCE {
            return Ok(TotalCheck::Matches);
        }

        match self {
            TotalPolicy::Trust => {
                warn!(submitted, computed, "Order total differs from its items, keeping submitted total");
                Ok(TotalCheck::Mismatch { submitted, computed })
            }
            TotalPolicy::Verify => Err(format!(
                "Total amount {submitted} does not match items total {computed}"
            )),
        }
    }
}
