use serde::{Deserialize, Serialize};
use onbajet_catalog::{Coupon, MenuItem};

/// A catalog item priced for one viewer's preferences. Derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub subtotal: f64,
    /// The single best coupon, if any gave a positive discount.
    pub coupon: Option<Coupon>,
    pub discount: f64,
    /// Subtotal minus discount, never below zero.
    pub adjusted: f64,
    pub fits_budget: bool,
}

impl EvaluatedItem {
    /// How far above the budget the adjusted total lands, zero when it fits.
    pub fn over_budget_by(&self, budget: f64) -> f64 {
        (self.adjusted - budget).max(0.0)
    }
}

/// Ways of getting the food.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentMode {
    Walk,
    Bike,
    PickupCar,
    Delivery,
}

impl FulfillmentMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            FulfillmentMode::Walk => "Walk",
            FulfillmentMode::Bike => "Bike",
            FulfillmentMode::PickupCar => "Pickup (Car)",
            FulfillmentMode::Delivery => "Delivery",
        }
    }
}

impl std::fmt::Display for FulfillmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelOption {
    pub mode: FulfillmentMode,
    pub eligible: bool,
    pub total: f64,
    pub note: String,
}

/// Cost breakdown and ranked fulfillment modes for the selected item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelAdvice {
    pub item_id: String,
    pub one_way_mi: f64,
    pub round_trip_mi: f64,
    pub mpg: f64,
    pub pickup_fuel_cost: f64,
    pub delivery_fee: f64,
    pub pickup_total: f64,
    pub delivery_total: f64,
    /// Eligible modes only, cheapest first.
    pub modes: Vec<TravelOption>,
}

impl TravelAdvice {
    /// The recommended mode.
    pub fn best(&self) -> Option<&TravelOption> {
        self.modes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onbajet_catalog::mock_catalog;

    #[test]
    fn test_over_budget_by() {
        let evaluated = EvaluatedItem {
            item: mock_catalog()[0].clone(),
            subtotal: 8.19,
            coupon: None,
            discount: 0.0,
            adjusted: 8.19,
            fits_budget: false,
        };
        assert!((evaluated.over_budget_by(5.0) - 3.19).abs() < 1e-9);
        assert_eq!(evaluated.over_budget_by(10.0), 0.0);
    }

    #[test]
    fn test_evaluated_item_flattens_menu_item() {
        let evaluated = EvaluatedItem {
            item: mock_catalog()[1].clone(),
            subtotal: 5.5,
            coupon: None,
            discount: 0.0,
            adjusted: 5.5,
            fits_budget: false,
        };
        let json = serde_json::to_value(&evaluated).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["vendor"], "Toasty Town");
        assert_eq!(json["adjusted"], 5.5);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(FulfillmentMode::PickupCar.to_string(), "Pickup (Car)");
        let json = serde_json::to_value(FulfillmentMode::PickupCar).unwrap();
        assert_eq!(json, "PICKUP_CAR");
    }
}
