//! Card distribution API handlers.
//!
//! # Examples
//!
//! Deal to four people:
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/cards/distribute \
//!   -H "Content-Type: application/json" \
//!   -d '{"numberOfPeople": 4}'
//! ```

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use card_dealer::{Deal, DealError, PlayerCount};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AppState, request_id::RequestId};
use crate::{logging, metrics};

/// Request body; `numberOfPeople` may be a JSON number or a numeric string.
#[derive(Debug, Default, Deserialize)]
pub struct DistributePayload {
    #[serde(rename = "numberOfPeople", default)]
    pub number_of_people: Option<Value>,
}

impl DistributePayload {
    /// Strict parse of the raw field into a player count.
    ///
    /// # Errors
    ///
    /// Missing, `null`, fractional, boolean, negative, zero and non-numeric
    /// values are `DealError::InvalidInput`.
    pub fn player_count(&self) -> Result<PlayerCount, DealError> {
        match &self.number_of_people {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(int) => PlayerCount::try_from(int),
                None => Err(DealError::InvalidInput(n.to_string())),
            },
            Some(Value::String(s)) => PlayerCount::parse(s),
            Some(other) => Err(DealError::InvalidInput(other.to_string())),
            None => Err(DealError::InvalidInput("missing numberOfPeople".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeResponse {
    pub success: bool,
    /// One comma-joined token string per person
    pub distributed_cards: Vec<String>,
    pub number_of_people: usize,
}

impl From<Deal> for DistributeResponse {
    fn from(deal: Deal) -> Self {
        Self {
            success: true,
            distributed_cards: deal.distributed_cards(),
            number_of_people: deal.number_of_people.get(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

impl From<&DealError> for ErrorResponse {
    fn from(err: &DealError) -> Self {
        Self {
            success: false,
            status: err.status_code(),
            message: err.client_message().to_string(),
        }
    }
}

/// Map a dealer error onto an HTTP status and client-safe body
pub fn error_response(err: &DealError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

/// Validate, shuffle and deal, recording logs and metrics for the outcome.
///
/// Shared by the JSON and HTML handlers.
pub fn run_distribution(
    state: &AppState,
    request_id: &RequestId,
    players: Result<PlayerCount, DealError>,
) -> Result<Deal, DealError> {
    let result = players.and_then(|players| state.dealer.distribute(players));

    match &result {
        Ok(deal) => {
            let people = deal.number_of_people.get();
            metrics::deals_total(people);
            logging::log_deal(request_id.as_str(), Some(people), None);
        }
        Err(e) => {
            metrics::deal_failures_total(e.kind());
            logging::log_deal(request_id.as_str(), None, Some(e.kind()));
        }
    }

    result
}

/// Shuffle a deck and deal it to `numberOfPeople` players.
///
/// # Request Body
///
/// ```json
/// { "numberOfPeople": 4 }
/// ```
///
/// # Response
///
/// Returns `200 OK` with one token string per person:
/// ```json
/// {
///   "success": true,
///   "distributedCards": ["S-7,H-K,...", "D-A,C-X,...", "...", "..."],
///   "numberOfPeople": 4
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body unreadable, or count missing, non-numeric, ≤ 0 or above the cap
/// - `500 Internal Server Error`: Shuffle could not be seeded or the deal was irregular
///
/// Both return `{"success": false, "status": <code>, "message": "..."}`.
pub async fn distribute(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<DistributePayload>, JsonRejection>,
) -> Result<Json<DistributeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let players = match payload {
        Ok(Json(payload)) => payload.player_count(),
        Err(rejection) => Err(DealError::InvalidInput(rejection.body_text())),
    };

    run_distribution(&state, &request_id, players)
        .map(|deal| Json(DistributeResponse::from(deal)))
        .map_err(|e| error_response(&e))
}
