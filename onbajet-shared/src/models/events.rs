use uuid::Uuid;

/// Emitted once per session recompute so the presentation layer (or a log
/// pipeline) can follow what a viewer was shown.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct RecomputeEvent {
    pub session_id: Uuid,
    pub viewer: String,
    pub timestamp: i64,
    pub budget: f64,
    pub result_count: usize,
    pub within_budget_count: usize,
    pub selected_item_id: Option<String>,
    pub best_mode: Option<String>,
}

impl RecomputeEvent {
    /// Share of the shown results that fit the budget, 0.0 when nothing was shown.
    pub fn within_budget_ratio(&self) -> f64 {
        if self.result_count == 0 {
            0.0
        } else {
            self.within_budget_count as f64 / self.result_count as f64
        }
    }
}
