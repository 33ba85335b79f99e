//! REST API handlers for checkout sessions
//!
//! This module implements the HTTP endpoints a checkout screen drives:
//! opening a session, forwarding each user action as a mutation, and
//! streaming recomputed summaries.

use super::{helpers::*, models::*, state::Session, state::SharedState};
use crate::{
    error::{ApiError, CheckoutError},
    pricing::{CheckoutSummary, ShippingMethod, ShippingRates},
};
use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use futures_util::stream::{self, Stream, StreamExt};

/// Creates routes for checkout operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/addresses", get(list_saved_addresses))
        .route("/shipping-methods", get(list_shipping_methods))
        .route("/checkout", post(open_checkout))
        .route(
            "/checkout/:session_id",
            get(get_checkout).delete(close_checkout),
        )
        .route("/checkout/:session_id/quantity", post(set_quantity))
        .route(
            "/checkout/:session_id/quantity/adjust",
            post(adjust_quantity),
        )
        .route("/checkout/:session_id/shipping", post(set_shipping_method))
        .route("/checkout/:session_id/payment", post(set_payment_method))
        .route("/checkout/:session_id/discount", post(set_discount_code))
        .route("/checkout/:session_id/address/mode", post(set_address_mode))
        .route(
            "/checkout/:session_id/address/saved",
            post(select_saved_address),
        )
        .route(
            "/checkout/:session_id/address/guest",
            post(set_guest_address),
        )
        .route(
            "/checkout/:session_id/summary/stream",
            get(stream_summary),
        )
}

/// Applies one mutation to a session and returns the resulting snapshot.
///
/// The session's entry lock is held only for the duration of the call.
fn mutate<F>(
    state: &SharedState,
    session_id: &str,
    apply: F,
) -> Result<Json<CheckoutSnapshot>, ApiError>
where
    F: FnOnce(&mut Session) -> Result<CheckoutSummary, CheckoutError>,
{
    let mut session = state
        .sessions
        .get_mut(session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))?;

    if let Err(err) = apply(session.value_mut()) {
        tracing::warn!(session_id, error = %err, "checkout mutation rejected");
        return Err(err.into());
    }

    Ok(Json(session.snapshot()?))
}

/// Endpoint: GET /addresses
async fn list_saved_addresses(State(state): State<SharedState>) -> Json<Vec<Address>> {
    Json(state.catalog.saved_addresses.clone())
}

/// Endpoint: GET /shipping-methods
async fn list_shipping_methods(State(state): State<SharedState>) -> Json<ShippingRates> {
    Json(state.catalog.shipping_rates.clone())
}

/// Endpoint: POST /checkout
/// Opens a session seeded from the catalog. An existing session with the
/// same id is restarted.
async fn open_checkout(
    State(state): State<SharedState>,
    payload: Option<Json<OpenSessionInput>>,
) -> Result<Json<SessionResponse>, ApiError> {
    let requested = payload.and_then(|Json(input)| input.session_id);
    let session_id = get_or_create_session_id(requested);
    let snapshot = state.open_session(&session_id)?;

    Ok(Json(SessionResponse {
        status: "opened".to_string(),
        session_id,
        checkout: Some(snapshot),
    }))
}

/// Endpoint: GET /checkout/:session_id
async fn get_checkout(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;
    Ok(Json(session.snapshot()?))
}

/// Endpoint: DELETE /checkout/:session_id
async fn close_checkout(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    if !state.close_session(&session_id) {
        return Err(ApiError::SessionNotFound(session_id));
    }

    Ok(Json(SessionResponse {
        status: "closed".to_string(),
        session_id,
        checkout: None,
    }))
}

/// Endpoint: POST /checkout/:session_id/quantity
async fn set_quantity(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<SetQuantityInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.set_quantity(&input.item_id, input.quantity)
    })
}

/// Endpoint: POST /checkout/:session_id/quantity/adjust
async fn adjust_quantity(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<AdjustQuantityInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.adjust_quantity(&input.item_id, input.delta)
    })
}

/// Endpoint: POST /checkout/:session_id/shipping
async fn set_shipping_method(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<ShippingInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        let method: ShippingMethod = input.method.parse()?;
        session.set_shipping_method(method)
    })
}

/// Endpoint: POST /checkout/:session_id/payment
async fn set_payment_method(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<PaymentInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.set_payment_method(input.method)
    })
}

/// Endpoint: POST /checkout/:session_id/discount
async fn set_discount_code(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<DiscountInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.set_discount_code(input.code)
    })
}

/// Endpoint: POST /checkout/:session_id/address/mode
async fn set_address_mode(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<AddressModeInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.set_address_mode(input.guest)
    })
}

/// Endpoint: POST /checkout/:session_id/address/saved
async fn select_saved_address(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<SavedAddressInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| {
        session.select_saved_address(&input.address_id)
    })
}

/// Endpoint: POST /checkout/:session_id/address/guest
async fn set_guest_address(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(input): Json<GuestAddressInput>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    mutate(&state, &session_id, |session| session.set_guest_address(input))
}

/// Endpoint: GET /checkout/:session_id/summary/stream
/// Server-Sent Events: the current summary first, then one `summary` event
/// per emission until the session is closed.
async fn stream_summary(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let mut rx = state
        .sessions
        .get(&session_id)
        .map(|session| session.observer().subscribe())
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;

    let current = *rx.borrow_and_update();
    let initial = stream::once(async move { summary_event(&current) });
    let updates = stream::unfold(rx, |mut rx| async move {
        // Errors once the session, and with it the sender, is dropped.
        rx.changed().await.ok()?;
        let summary = *rx.borrow_and_update();
        Some((summary_event(&summary), rx))
    });

    tracing::debug!(session_id, "summary stream subscribed");
    Ok(Sse::new(initial.chain(updates)).keep_alive(KeepAlive::default()))
}

fn summary_event(summary: &CheckoutSummary) -> Result<Event, axum::Error> {
    Event::default().event("summary").json_data(summary)
}
