use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use onbajet_catalog::MenuItem;
use onbajet_core::Viewer;
use onbajet_shared::models::events::RecomputeEvent;

use crate::evaluator::evaluate_catalog;
use crate::filters::DealPreferences;
use crate::models::{EvaluatedItem, TravelAdvice};
use crate::travel::{TravelAdvisor, TravelPreferences};
use crate::DealResult;

/// Everything a viewer currently has dialed in. Each control change is
/// followed by an explicit [`BudgetSession::recompute`].
#[derive(Debug, Clone)]
pub struct BudgetSession {
    pub id: Uuid,
    pub viewer: Viewer,
    pub created_at: DateTime<Utc>,
    pub preferences: DealPreferences,
    pub travel: TravelPreferences,
    pub selected_id: Option<String>,
}

/// Output of one recompute.
#[derive(Debug, Clone, Serialize)]
pub struct Recomputation {
    pub session_id: Uuid,
    pub results: Vec<EvaluatedItem>,
    pub selected: Option<EvaluatedItem>,
    pub advice: Option<TravelAdvice>,
    pub computed_at: DateTime<Utc>,
}

impl Recomputation {
    pub fn within_budget_count(&self) -> usize {
        self.results.iter().filter(|r| r.fits_budget).count()
    }
}

impl BudgetSession {
    pub fn new(viewer: Viewer, preferences: DealPreferences, travel: TravelPreferences) -> Self {
        Self {
            id: Uuid::new_v4(),
            viewer,
            created_at: Utc::now(),
            preferences,
            travel,
            selected_id: None,
        }
    }

    pub fn set_budget(&mut self, budget: f64) {
        self.preferences.budget = budget;
    }

    pub fn set_cuisine_query(&mut self, query: impl Into<String>) {
        self.preferences.cuisine_query = query.into();
    }

    pub fn toggle_coupons(&mut self) -> bool {
        self.preferences.include_coupons = !self.preferences.include_coupons;
        self.preferences.include_coupons
    }

    pub fn toggle_pickup_only(&mut self) -> bool {
        self.preferences.pickup_only = !self.preferences.pickup_only;
        self.preferences.pickup_only
    }

    pub fn toggle_show_above_budget(&mut self) -> bool {
        self.preferences.show_above_budget = !self.preferences.show_above_budget;
        self.preferences.show_above_budget
    }

    pub fn select(&mut self, item_id: impl Into<String>) {
        self.selected_id = Some(item_id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn set_walk_max_mi(&mut self, miles: f64) {
        self.travel.walk_max_mi = miles;
    }

    pub fn set_gas_price(&mut self, price: f64) {
        self.travel.gas_price = price;
    }

    pub fn set_mpg_override(&mut self, mpg: Option<f64>) {
        self.travel.mpg_override = mpg;
    }

    /// Re-run the calculator over `catalog` with the current controls.
    ///
    /// The selection is looked up among the filtered results, so an item
    /// hidden by the current filters yields no selection and no advice.
    pub fn recompute(&self, catalog: &[MenuItem], advisor: &TravelAdvisor) -> DealResult<Recomputation> {
        let results = evaluate_catalog(catalog, &self.preferences)?;

        let selected = self
            .selected_id
            .as_deref()
            .and_then(|id| results.iter().find(|r| r.item.id == id))
            .cloned();
        let advice = advisor.recommend(selected.as_ref(), &self.travel)?;

        tracing::debug!(
            "Session {} ({}) recomputed: {} results, selection {:?}",
            self.id,
            self.viewer.label(),
            results.len(),
            selected.as_ref().map(|s| s.item.id.as_str())
        );

        Ok(Recomputation {
            session_id: self.id,
            results,
            selected,
            advice,
            computed_at: Utc::now(),
        })
    }

    /// Summarize a recompute for telemetry.
    pub fn event(&self, recomputation: &Recomputation) -> RecomputeEvent {
        RecomputeEvent {
            session_id: self.id,
            viewer: self.viewer.label().to_string(),
            timestamp: recomputation.computed_at.timestamp(),
            budget: self.preferences.budget,
            result_count: recomputation.results.len(),
            within_budget_count: recomputation.within_budget_count(),
            selected_item_id: recomputation.selected.as_ref().map(|s| s.item.id.clone()),
            best_mode: recomputation
                .advice
                .as_ref()
                .and_then(|a| a.best())
                .map(|m| m.mode.display_name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FulfillmentMode;
    use crate::DealError;
    use onbajet_catalog::mock_catalog;

    fn session() -> BudgetSession {
        BudgetSession::new(Viewer::Guest, DealPreferences::default(), TravelPreferences::default())
    }

    #[test]
    fn test_recompute_without_selection() {
        let out = session().recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        assert_eq!(out.results.len(), 2);
        assert!(out.selected.is_none());
        assert!(out.advice.is_none());
        assert_eq!(out.within_budget_count(), 1);
    }

    #[test]
    fn test_recompute_with_selection() {
        let mut session = session();
        session.select("1");
        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();

        assert_eq!(out.selected.as_ref().unwrap().item.id, "1");
        let advice = out.advice.as_ref().unwrap();
        assert_eq!(advice.best().unwrap().mode, FulfillmentMode::Bike);

        let event = session.event(&out);
        assert_eq!(event.session_id, session.id);
        assert_eq!(event.viewer, "guest");
        assert_eq!(event.selected_item_id.as_deref(), Some("1"));
        assert_eq!(event.best_mode.as_deref(), Some("Bike"));
        assert_eq!(event.result_count, 2);
    }

    #[test]
    fn test_selection_hidden_by_filters() {
        let mut session = session();
        session.select("1");
        assert!(!session.toggle_show_above_budget());

        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        assert_eq!(out.results.len(), 1);
        assert!(out.selected.is_none());
        assert!(out.advice.is_none());

        // Raising the budget brings it back.
        session.set_budget(10.0);
        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        assert_eq!(out.selected.unwrap().item.id, "1");
    }

    #[test]
    fn test_controls_feed_recompute() {
        let mut session = session();
        session.select("1");
        session.set_walk_max_mi(1.5);
        session.set_gas_price(5.0);
        session.set_mpg_override(Some(20.0));

        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        let advice = out.advice.unwrap();
        assert_eq!(advice.best().unwrap().mode, FulfillmentMode::Walk);
        assert!((advice.pickup_fuel_cost - 2.4 / 20.0 * 5.0).abs() < 1e-9);

        assert!(!session.toggle_coupons());
        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        assert!(out.results.iter().all(|r| r.coupon.is_none()));

        session.set_cuisine_query("sushi");
        let out = session.recompute(&mock_catalog(), &TravelAdvisor::default()).unwrap();
        assert!(out.results.is_empty());

        session.clear_selection();
        assert!(session.selected_id.is_none());
    }

    #[test]
    fn test_recompute_is_repeatable() {
        let mut session = session();
        session.select("2");
        let catalog = mock_catalog();
        let advisor = TravelAdvisor::default();
        let first = session.recompute(&catalog, &advisor).unwrap();
        let second = session.recompute(&catalog, &advisor).unwrap();
        assert_eq!(first.results, second.results);
        assert_eq!(first.advice, second.advice);
    }

    #[test]
    fn test_pickup_only_toggle() {
        let mut session = session();
        assert!(session.toggle_pickup_only());
        let mut catalog = mock_catalog();
        catalog[1].pickup_available = false;
        let out = session.recompute(&catalog, &TravelAdvisor::default()).unwrap();
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].item.id, "1");
    }

    #[test]
    fn test_invalid_budget_surfaces() {
        let mut session = session();
        session.set_budget(-1.0);
        assert!(matches!(
            session.recompute(&mock_catalog(), &TravelAdvisor::default()),
            Err(DealError::InvalidInput(_))
        ));
    }
}
