use serde::{Deserialize, Serialize};
use onbajet_catalog::MenuItem;

use crate::{DealError, DealResult};

/// The viewer's search controls. Every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DealPreferences {
    /// Budget ceiling for the adjusted total.
    pub budget: f64,
    /// Free-text, comma-separated cuisine keywords.
    pub cuisine_query: String,
    pub include_coupons: bool,
    pub pickup_only: bool,
    pub show_above_budget: bool,
}

impl Default for DealPreferences {
    fn default() -> Self {
        Self {
            budget: 5.0,
            cuisine_query: "american, burgers, sandwiches".to_string(),
            include_coupons: true,
            pickup_only: false,
            show_above_budget: true,
        }
    }
}

impl DealPreferences {
    pub fn keywords(&self) -> Vec<String> {
        parse_cuisine_keywords(&self.cuisine_query)
    }

    pub fn validate(&self) -> DealResult<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            tracing::warn!("Rejected budget {}", self.budget);
            return Err(DealError::InvalidInput(format!(
                "budget must be a positive number, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}

/// Split on commas, trim, lowercase and drop empty entries.
pub fn parse_cuisine_keywords(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// True when no keywords are given or any keyword occurs in the item's tags.
pub fn matches_cuisine(item: &MenuItem, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let haystack = item.cuisine_haystack();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

pub fn matches_fulfillment(item: &MenuItem, pickup_only: bool) -> bool {
    !pickup_only || item.pickup_available
}
