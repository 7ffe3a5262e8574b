use axum::{
    extract::State,
    Extension,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use onbajet_core::Viewer;
use onbajet_deals::{
    BudgetSession, DealPreferences, EvaluatedItem, Recomputation, TravelAdvice, TravelPreferences,
};

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Search controls; anything left out falls back to the configured defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchDealsRequest {
    pub budget: Option<f64>,
    pub cuisine_query: Option<String>,
    pub include_coupons: Option<bool>,
    pub pickup_only: Option<bool>,
    pub show_above_budget: Option<bool>,
}

impl SearchDealsRequest {
    pub fn into_preferences(self, defaults: &DealPreferences) -> DealPreferences {
        DealPreferences {
            budget: self.budget.unwrap_or(defaults.budget),
            cuisine_query: self.cuisine_query.unwrap_or_else(|| defaults.cuisine_query.clone()),
            include_coupons: self.include_coupons.unwrap_or(defaults.include_coupons),
            pickup_only: self.pickup_only.unwrap_or(defaults.pickup_only),
            show_above_budget: self.show_above_budget.unwrap_or(defaults.show_above_budget),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TravelRequest {
    pub walk_max_mi: Option<f64>,
    pub gas_price: Option<f64>,
    pub mpg_override: Option<f64>,
}

impl TravelRequest {
    pub fn into_preferences(self, defaults: &TravelPreferences) -> TravelPreferences {
        TravelPreferences {
            walk_max_mi: self.walk_max_mi.unwrap_or(defaults.walk_max_mi),
            gas_price: self.gas_price.unwrap_or(defaults.gas_price),
            mpg_override: self.mpg_override.or(defaults.mpg_override),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendRequest {
    pub item_id: String,
    #[serde(default)]
    pub preferences: SearchDealsRequest,
    #[serde(default)]
    pub travel: TravelRequest,
}

#[derive(Debug, Serialize)]
pub struct EvaluatedItemResponse {
    #[serde(flatten)]
    pub evaluated: EvaluatedItem,
    pub over_budget_by: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchDealsResponse {
    pub session_id: Uuid,
    pub budget: f64,
    pub results: Vec<EvaluatedItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub session_id: Uuid,
    pub item: EvaluatedItemResponse,
    pub advice: TravelAdvice,
}

fn to_response(evaluated: EvaluatedItem, budget: f64) -> EvaluatedItemResponse {
    EvaluatedItemResponse {
        over_budget_by: evaluated.over_budget_by(budget),
        evaluated,
    }
}

async fn run_session(state: &AppState, session: &BudgetSession) -> Result<Recomputation, AppError> {
    let catalog = state.catalog.list_items().await?;
    let out = session.recompute(&catalog, &state.advisor)?;
    let event = session.event(&out);
    tracing::info!(
        session_id = %event.session_id,
        viewer = %event.viewer,
        results = event.result_count,
        within_budget = event.within_budget_count,
        within_budget_ratio = event.within_budget_ratio(),
        best_mode = ?event.best_mode,
        "Deals recomputed"
    );
    Ok(out)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/deals/search
/// Rank the catalog against the viewer's budget and filters.
pub async fn search_deals(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Json(req): Json<SearchDealsRequest>,
) -> Result<Json<SearchDealsResponse>, AppError> {
    let preferences = req.into_preferences(&state.defaults.deals);
    let session = BudgetSession::new(viewer, preferences, state.defaults.travel.clone());
    let out = run_session(&state, &session).await?;

    let budget = session.preferences.budget;
    Ok(Json(SearchDealsResponse {
        session_id: session.id,
        budget,
        results: out.results.into_iter().map(|r| to_response(r, budget)).collect(),
    }))
}

/// POST /v1/deals/recommend
/// Rank fulfillment modes for one item. The item must survive the search
/// filters sent alongside it.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let preferences = req.preferences.into_preferences(&state.defaults.deals);
    let travel = req.travel.into_preferences(&state.defaults.travel);

    let mut session = BudgetSession::new(viewer, preferences, travel);
    session.select(req.item_id.clone());
    let out = run_session(&state, &session).await?;

    let (item, advice) = match (out.selected, out.advice) {
        (Some(item), Some(advice)) => (item, advice),
        _ => {
            return Err(AppError::NotFound(format!(
                "Item {} is not among the current results",
                req.item_id
            )))
        }
    };

    Ok(Json(RecommendResponse {
        session_id: session.id,
        item: to_response(item, session.preferences.budget),
        advice,
    }))
}
