use serde::{Deserialize, Serialize};

use crate::coupon::Coupon;
use crate::{check_amount, CatalogError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A dish offered by a vendor, with whatever deals currently apply to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub vendor: String,
    /// Cuisine tags, in display order.
    #[serde(default)]
    pub cuisine: Vec<String>,
    pub base_price: f64,
    /// Estimated fees and tax on top of the base price.
    pub est_fees_tax: f64,
    pub pickup_available: bool,
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// One-way distance from the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_mi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl MenuItem {
    /// Base price plus fees, before any discount.
    pub fn subtotal(&self) -> f64 {
        self.base_price + self.est_fees_tax
    }

    /// Cuisine tags joined with spaces and lowercased, the form keyword
    /// matching runs against.
    pub fn cuisine_haystack(&self) -> String {
        self.cuisine.join(" ").to_lowercase()
    }

    /// Boundary check applied before an item reaches the calculator.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "item \"{}\" has an empty id",
                self.name
            )));
        }

        let owner = format!("item {}", self.id);
        check_amount("base_price", &owner, self.base_price)?;
        check_amount("est_fees_tax", &owner, self.est_fees_tax)?;
        if let Some(distance) = self.distance_mi {
            check_amount("distance_mi", &owner, distance)?;
        }
        if let Some(point) = self.location {
            if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng) {
                return Err(CatalogError::InvalidInput(format!(
                    "location of {} is out of range: {}, {}",
                    owner, point.lat, point.lng
                )));
            }
        }

        for coupon in &self.coupons {
            coupon.validate()?;
        }

        Ok(())
    }
}
