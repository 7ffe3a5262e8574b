pub mod coupons;
pub mod evaluator;
pub mod filters;
pub mod models;
pub mod session;
pub mod travel;

pub use coupons::{apply_coupon, best_coupon, BestCoupon, CouponOutcome};
pub use evaluator::{evaluate_catalog, evaluate_item};
pub use filters::{parse_cuisine_keywords, DealPreferences};
pub use models::{EvaluatedItem, FulfillmentMode, TravelAdvice, TravelOption};
pub use session::{BudgetSession, Recomputation};
pub use travel::{TravelAdvisor, TravelConfig, TravelPreferences};

use onbajet_catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum DealError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<CatalogError> for DealError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidInput(msg) => DealError::InvalidInput(msg),
        }
    }
}

pub type DealResult<T> = Result<T, DealError>;

pub(crate) fn require_amount(field: &str, value: f64) -> DealResult<()> {
    if !value.is_finite() || value < 0.0 {
        tracing::warn!("Rejected {} = {}", field, value);
        return Err(DealError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}
