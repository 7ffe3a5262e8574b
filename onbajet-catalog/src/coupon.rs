use serde::{Deserialize, Serialize};

use crate::{check_amount, CatalogError};

/// How a coupon's value is read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// Dollars off.
    Flat,
    /// Percent off, 0–100.
    Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub label: String,
    pub kind: CouponKind,
    pub value: f64,
    /// Subtotal must reach this before the coupon applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_spend: Option<f64>,
    /// Upper bound on a percentage discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<f64>,
    /// Where the deal came from ("Restaurant app", "Promo", ...).
    pub source: String,
}

impl Coupon {
    pub fn flat(id: &str, label: &str, value: f64, source: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: CouponKind::Flat,
            value,
            min_spend: None,
            cap: None,
            source: source.to_string(),
        }
    }

    pub fn percent(id: &str, label: &str, value: f64, source: &str) -> Self {
        Self {
            kind: CouponKind::Percent,
            ..Self::flat(id, label, value, source)
        }
    }

    pub fn with_min_spend(mut self, min_spend: f64) -> Self {
        self.min_spend = Some(min_spend);
        self
    }

    pub fn with_cap(mut self, cap: f64) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Reject negative or non-finite numbers and percentages above 100.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let owner = format!("coupon {}", self.id);
        check_amount("value", &owner, self.value)?;
        if let Some(min_spend) = self.min_spend {
            check_amount("min_spend", &owner, min_spend)?;
        }
        if let Some(cap) = self.cap {
            check_amount("cap", &owner, cap)?;
        }
        if self.kind == CouponKind::Percent && self.value > 100.0 {
            return Err(CatalogError::InvalidInput(format!(
                "percentage of {} must be within 0-100, got {}",
                owner, self.value
            )));
        }
        Ok(())
    }
}
