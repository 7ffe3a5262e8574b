pub mod coupon;
pub mod item;
pub mod mock;
pub mod provider;

pub use coupon::{Coupon, CouponKind};
pub use item::{GeoPoint, MenuItem};
pub use mock::mock_catalog;
pub use provider::CatalogProvider;

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub(crate) fn check_amount(field: &str, owner: &str, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidInput(format!(
            "{} of {} must be a non-negative amount, got {}",
            field, owner, value
        )));
    }
    Ok(())
}
