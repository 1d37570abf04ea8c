use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use tracing::info;
use serde::Deserialize;
use shared::{RecentTransactionsResponse, RemoteTransaction};

use crate::AppState;

/// Upper bound on `limit` to keep payloads small
const MAX_RECENT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct RecentTransactionsQuery {
    pub limit: Option<usize>,
}

/// Recent transactions in the remote sign convention (positive = expense)
pub async fn recent_transactions(
    State(state): State<AppState>,
    Query(query): Query<RecentTransactionsQuery>,
) -> impl IntoResponse {
    info!("GET /api/transactions/recent - query: {:?}", query);

    let default_limit = state.services.config.recent_transactions_limit as usize;
    let limit = query.limit.unwrap_or(default_limit).min(MAX_RECENT_LIMIT);

    Json(sample_recent(&state, limit))
}

fn sample_recent(state: &AppState, limit: usize) -> RecentTransactionsResponse {
    let now = Utc::now();
    let base_id = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let transactions = state
        .services
        .transactions
        .sample_recent_transactions(now.date_naive(), limit, &mut rand::thread_rng(), base_id)
        .iter()
        .map(RemoteTransaction::from_transaction)
        .collect();

    RecentTransactionsResponse { transactions }
}
