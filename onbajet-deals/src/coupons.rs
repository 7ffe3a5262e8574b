use serde::{Deserialize, Serialize};
use onbajet_catalog::{Coupon, CouponKind};

use crate::{require_amount, DealResult};

/// What one coupon is worth against a subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CouponOutcome {
    pub discount: f64,
    pub applied: bool,
}

impl CouponOutcome {
    fn none() -> Self {
        Self { discount: 0.0, applied: false }
    }

    fn of(discount: f64) -> Self {
        Self { discount, applied: discount > 0.0 }
    }
}

/// The winning coupon for a subtotal. `coupon` is `None` when nothing applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestCoupon {
    pub coupon: Option<Coupon>,
    pub discount: f64,
}

impl BestCoupon {
    pub fn none() -> Self {
        Self { coupon: None, discount: 0.0 }
    }
}

/// Price a single coupon against `subtotal`.
///
/// A percentage discount is limited by the coupon's cap only, not by the
/// subtotal; callers floor the adjusted total at zero.
pub fn apply_coupon(subtotal: f64, coupon: &Coupon) -> DealResult<CouponOutcome> {
    require_amount("subtotal", subtotal)?;

    if let Some(min_spend) = coupon.min_spend {
        if subtotal < min_spend {
            return Ok(CouponOutcome::none());
        }
    }

    let discount = match coupon.kind {
        CouponKind::Flat => coupon.value.min(subtotal),
        CouponKind::Percent => {
            let raw = (coupon.value / 100.0) * subtotal;
            match coupon.cap {
                Some(cap) => raw.min(cap),
                None => raw,
            }
        }
    };

    Ok(CouponOutcome::of(discount))
}

/// Pick the coupon with the largest discount. The first of equal discounts
/// wins.
pub fn best_coupon(subtotal: f64, coupons: &[Coupon]) -> DealResult<BestCoupon> {
    require_amount("subtotal", subtotal)?;
    let mut best = BestCoupon::none();

    for coupon in coupons {
        let outcome = apply_coupon(subtotal, coupon)?;
        if outcome.discount > best.discount {
            best = BestCoupon {
                coupon: Some(coupon.clone()),
                discount: outcome.discount,
            };
        }
    }

    Ok(best)
}
