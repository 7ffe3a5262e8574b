use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use onbajet_shared::format_usd;

use crate::models::{EvaluatedItem, FulfillmentMode, TravelAdvice, TravelOption};
use crate::{require_amount, DealResult};

/// Fee and distance constants for fulfillment ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// MPG assumed when the viewer gives none.
    pub inferred_mpg: f64,

    /// Delivery fee for vendors that do not offer pickup.
    pub delivery_only_fee: f64,

    /// Lowest delivery fee charged by vendors that also offer pickup.
    pub min_delivery_fee: f64,

    /// Share of the item's fees/tax used as the delivery fee estimate.
    pub delivery_fee_ratio: f64,

    /// Biking is always considered up to this many miles.
    pub bike_floor_mi: f64,

    /// Biking range as a multiple of the walking range.
    pub bike_walk_multiplier: f64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            inferred_mpg: 32.0,
            delivery_only_fee: 3.99,
            min_delivery_fee: 2.49,
            delivery_fee_ratio: 0.5,
            bike_floor_mi: 2.0,
            bike_walk_multiplier: 2.5,
        }
    }
}

/// The viewer's travel controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TravelPreferences {
    /// Furthest one-way distance the viewer is happy to walk.
    pub walk_max_mi: f64,
    /// Fuel price per gallon.
    pub gas_price: f64,
    /// Used instead of the inferred MPG when positive.
    pub mpg_override: Option<f64>,
}

impl Default for TravelPreferences {
    fn default() -> Self {
        Self {
            walk_max_mi: 1.0,
            gas_price: 3.75,
            mpg_override: None,
        }
    }
}

impl TravelPreferences {
    pub fn validate(&self) -> DealResult<()> {
        require_amount("walk_max_mi", self.walk_max_mi)?;
        require_amount("gas_price", self.gas_price)?;
        Ok(())
    }
}

/// Ranks the ways of getting an item by what they cost in total.
pub struct TravelAdvisor {
    config: TravelConfig,
}

impl TravelAdvisor {
    pub fn new(config: TravelConfig) -> Self {
        Self { config }
    }

    /// The MPG in effect: a positive override, else the inferred default.
    pub fn active_mpg(&self, prefs: &TravelPreferences) -> f64 {
        match prefs.mpg_override {
            Some(mpg) if mpg > 0.0 => mpg,
            _ => self.config.inferred_mpg,
        }
    }

    /// Fuel for a round trip; free when the MPG is not positive.
    pub fn fuel_cost(&self, round_trip_mi: f64, mpg: f64, gas_price: f64) -> f64 {
        if mpg > 0.0 {
            (round_trip_mi / mpg) * gas_price
        } else {
            0.0
        }
    }

    pub fn delivery_fee(&self, item: &EvaluatedItem) -> f64 {
        if item.item.pickup_available {
            self.config
                .min_delivery_fee
                .max(item.item.est_fees_tax * self.config.delivery_fee_ratio)
        } else {
            self.config.delivery_only_fee
        }
    }

    /// Advice for the selected item, or `None` when nothing is selected.
    pub fn recommend(
        &self,
        selected: Option<&EvaluatedItem>,
        prefs: &TravelPreferences,
    ) -> DealResult<Option<TravelAdvice>> {
        selected.map(|item| self.advise(item, prefs)).transpose()
    }

    pub fn advise(&self, item: &EvaluatedItem, prefs: &TravelPreferences) -> DealResult<TravelAdvice> {
        prefs.validate()?;

        let one_way = item.item.distance_mi.unwrap_or(0.0);
        let round_trip = one_way * 2.0;
        let mpg = self.active_mpg(prefs);

        let pickup_fuel_cost = self.fuel_cost(round_trip, mpg, prefs.gas_price);
        let delivery_fee = self.delivery_fee(item);
        let pickup_total = item.adjusted
            + if item.item.pickup_available { pickup_fuel_cost } else { 0.0 };
        let delivery_total = item.adjusted + delivery_fee;

        let can_walk = one_way <= prefs.walk_max_mi;
        let can_bike = one_way
            <= self
                .config
                .bike_floor_mi
                .max(prefs.walk_max_mi * self.config.bike_walk_multiplier);
        let distance_note = format!("~{:.1} mi one-way", round_tenths(one_way));

        let candidates = vec![
            TravelOption {
                mode: FulfillmentMode::Walk,
                eligible: can_walk,
                total: item.adjusted,
                note: distance_note.clone(),
            },
            TravelOption {
                mode: FulfillmentMode::Bike,
                eligible: can_bike,
                total: item.adjusted,
                note: distance_note,
            },
            TravelOption {
                mode: FulfillmentMode::PickupCar,
                eligible: true,
                total: pickup_total,
                note: format!(
                    "Fuel {} for {:.1} mi",
                    format_usd(pickup_fuel_cost),
                    round_tenths(round_trip)
                ),
            },
            TravelOption {
                mode: FulfillmentMode::Delivery,
                eligible: true,
                total: delivery_total,
                note: format!("Fees {}", format_usd(delivery_fee)),
            },
        ];

        let mut modes: Vec<TravelOption> = candidates.into_iter().filter(|m| m.eligible).collect();
        modes.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(Ordering::Equal));

        if let Some(best) = modes.first() {
            tracing::debug!(
                "Best way to get item {} is {} at {}",
                item.item.id,
                best.mode,
                format_usd(best.total)
            );
        }

        Ok(TravelAdvice {
            item_id: item.item.id.clone(),
            one_way_mi: one_way,
            round_trip_mi: round_trip,
            mpg,
            pickup_fuel_cost,
            delivery_fee,
            pickup_total,
            delivery_total,
            modes,
        })
    }
}

/// Half-up rounding to one decimal; `{:.1}` alone sends exact ties to even.
fn round_tenths(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

impl Default for TravelAdvisor {
    fn default() -> Self {
        Self::new(TravelConfig::default())
    }
}
