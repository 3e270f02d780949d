/// Event endpoints
///
/// # Endpoints
///
/// - `GET /api/events` - List all events, optionally `?category=<name>`
/// - `GET /api/events/category/:category` - List events in one category
/// - `POST /api/events` - Create an event
///
/// Category filtering is exact and case-sensitive. A name that is not a
/// category returns an empty list, not an error.

use crate::{
    app::AppState,
    error::ApiResult,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use gathering_shared::{
    models::event::Event,
    validation::{validate_event, EventCandidate},
};
use serde::Deserialize;

/// Query string for the event list
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    /// Only return events in this category
    pub category: Option<String>,
}

/// List events
///
/// # Endpoint
///
/// ```text
/// GET /api/events
/// GET /api/events?category=social
/// ```
///
/// # Response
///
/// Events in ascending id order:
///
/// ```json
/// [
///   {
///     "id": 2,
///     "title": "Community Potluck Dinner",
///     "date": "2023-10-02",
///     "time": "18:30",
///     "location": "Community Hall, 45 Park Avenue",
///     "description": "Bring your favorite dish...",
///     "category": "social"
///   }
/// ]
/// ```
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Event>>> {
    let Query(query) = query?;
    let store = state.store.read().await;

    let events = match query.category.as_deref() {
        Some(category) => store.get_events_by_category(category),
        None => store.get_all_events(),
    };

    Ok(Json(events))
}

/// List events in a category
///
/// # Endpoint
///
/// ```text
/// GET /api/events/category/charity
/// ```
pub async fn list_events_in_category(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Event>>> {
    let Path(category) = path?;
    let events = state.store.read().await.get_events_by_category(&category);

    Ok(Json(events))
}

/// Create an event
///
/// # Endpoint
///
/// ```text
/// POST /api/events
/// Content-Type: application/json
///
/// {
///   "title": "Food Drive",
///   "date": "2023-11-05",
///   "time": "09:00",
///   "location": "Main Hall",
///   "description": "A drive to collect food for families in need.",
///   "category": "charity"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored event, including its new `id`.
///
/// # Errors
///
/// - `400 Bad Request`: Body is not JSON
/// - `422 Unprocessable Entity`: One or more fields failed validation
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventCandidate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let Json(candidate) = payload?;

    let new_event = validate_event(candidate).map_err(|failure| {
        tracing::debug!(errors = failure.errors.len(), "Rejected event candidate");
        failure
    })?;

    let event = state.store.write().await.create_event(new_event);
    tracing::info!(event_id = event.id, category = %event.category, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}
