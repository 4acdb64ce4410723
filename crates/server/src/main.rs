// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};
use alms_slot_api::{
    ApiError, AuthenticatedActor, BookingIdentityRequest, BookingOutcome, BookingPayload,
    ConflictDecision, CreateMonasteryRequest, CreateOrUpdateBookingRequest, CreateSlotRequest,
    GenerateWeekdaySlotsRequest, ListSlotsRequest, RecordConfirmationRequest,
    RegisterAdminRequest, ResolveIdentityRequest, Role, UpdateMealTimeRequest,
    UpdatePolicyRequest, UpdateSlotRequest, approve_booking, cancel_booking, confirm_booking,
    create_monastery, create_or_update_booking, create_slot, delete_slot, generate_weekday_slots,
    get_confirmation_log, get_monastery, get_occupancy, list_admins, list_monastery_bookings,
    list_slot_bookings, list_slots, mark_delivered, mark_not_delivered,
    record_manual_confirmation, register_admin, resolve_identity, toggle_availability,
    update_confirmation_policy, update_meal_time, update_slot,
};
use alms_slot_persistence::Persistence;

/// Alms Slot Server - HTTP server for the donation-slot booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the booking engine.
    persistence: Arc<Mutex<Persistence>>,
}

// ============================================================================
// Request/response wrappers
// ============================================================================

/// API request for creating a slot, with actor attribution.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateSlotApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// The monastery the slot belongs to.
    monastery_id: i64,
    /// The donation date (ISO 8601).
    slot_date: String,
    /// The meal type (breakfast, lunch or dinner).
    meal_type: String,
    /// Serving time (HH:MM), defaults to the monastery's meal default.
    time_of_day: Option<String>,
    /// Expected meal count, defaults to the monastery's seating capacity.
    monks_capacity: Option<i32>,
    /// Advisory cap on distinct bookings.
    max_donors: Option<i32>,
    /// Free-form staff notes shown to donors.
    booking_notes: Option<String>,
}

/// API request for updating a slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateSlotApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// Serving time (HH:MM).
    time_of_day: String,
    /// Expected meal count.
    monks_capacity: i32,
    /// Advisory cap on distinct bookings.
    max_donors: i32,
    /// Free-form staff notes.
    booking_notes: Option<String>,
}

/// API request carrying only actor attribution.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
}

/// API request for bulk weekday generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GenerateSlotsApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// The monastery to generate slots for.
    monastery_id: i64,
    /// The first calendar day of the window (ISO 8601).
    start_date: String,
    /// Calendar days to cover. Defaults to 30.
    days: Option<u16>,
    /// Expected meal count for generated slots.
    default_capacity: Option<i32>,
    /// Advisory booking cap for generated slots.
    default_max_donors: Option<i32>,
}

/// API request for creating or updating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BookingApiRequest {
    /// The acting actor's id (admin id or donor id).
    actor_id: i64,
    /// The actor's role (`admin` books on the donor's behalf).
    actor_role: String,
    /// The slot being booked.
    slot_id: i64,
    /// The identity making the booking.
    identity: BookingIdentityRequest,
    /// The donor-supplied fields.
    payload: BookingPayload,
    /// The conflict decision, when answering a returned conflict.
    decision: Option<ConflictDecision>,
}

/// API request for updating a monastery's confirmation policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdatePolicyApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// Days before the donation date at which reminders become due.
    reminder_days: Vec<u8>,
    /// Whether donor-initiated bookings require staff approval.
    require_monastery_approval: bool,
}

/// API request for changing a monastery's default meal time.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateMealTimeApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// The meal whose default time changes.
    meal_type: String,
    /// The new default time (HH:MM).
    time_of_day: String,
}

/// API request for recording a manual confirmation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RecordConfirmationApiRequest {
    /// The acting admin's id.
    actor_id: i64,
    /// The actor's role.
    actor_role: String,
    /// The confirmation kind (`5_day`, `1_day`, `monastery_approval`).
    kind: String,
    /// How the donor was reached.
    method: String,
    /// Optional notes about the contact.
    notes: Option<String>,
}

/// Query parameters for listing slots.
#[derive(Debug, Deserialize)]
struct ListSlotsQuery {
    /// The monastery to list slots for.
    monastery_id: i64,
    /// Range start, inclusive (ISO 8601).
    from_date: String,
    /// Range end, inclusive (ISO 8601).
    to_date: String,
}

/// Query parameters for identity resolution.
#[derive(Debug, Deserialize)]
struct ResolveIdentityQuery {
    /// The monastery whose guest profiles are in scope.
    monastery_id: i64,
    /// The phone number to resolve.
    phone: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DuplicateSlot { .. }
            | ApiError::SlotHasBookings { .. }
            | ApiError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::IdentityNotFound { .. } | ApiError::ResourceNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "donor" => Ok(Role::Donor),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'donor'"),
        }),
    }
}

fn actor_from(actor_id: i64, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    Ok(AuthenticatedActor::new(actor_id, parse_role(actor_role)?))
}

/// The current UTC timestamp in RFC 3339 form.
///
/// The clock is read here, at the transport boundary; everything below
/// takes it as an explicit argument.
fn now_rfc3339() -> Result<String, HttpError> {
    OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| HttpError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// The current UTC calendar date.
fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

// ============================================================================
// Monastery handlers
// ============================================================================

/// Handler for POST `/monasteries`.
async fn handle_create_monastery(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateMonasteryRequest>,
) -> Result<Response, HttpError> {
    info!(name = %req.name, "Handling create_monastery request");
    let mut persistence = app_state.persistence.lock().await;
    let response = create_monastery(&mut persistence, &req)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/monasteries/{monastery_id}`.
async fn handle_get_monastery(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = get_monastery(&mut persistence, monastery_id)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/monasteries/{monastery_id}/policy`.
async fn handle_update_policy(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
    Json(req): Json<UpdatePolicyApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let request = UpdatePolicyRequest {
        monastery_id,
        reminder_days: req.reminder_days,
        require_monastery_approval: req.require_monastery_approval,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = update_confirmation_policy(&mut persistence, &request, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/monasteries/{monastery_id}/meal_time`.
async fn handle_update_meal_time(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
    Json(req): Json<UpdateMealTimeApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let request = UpdateMealTimeRequest {
        monastery_id,
        meal_type: req.meal_type,
        time_of_day: req.time_of_day,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = update_meal_time(&mut persistence, &request, &actor)?;
    Ok(Json(response).into_response())
}

/// API request for registering a monastery admin.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterAdminApiRequest {
    /// The admin's display name.
    display_name: String,
}

/// Handler for POST `/monasteries/{monastery_id}/admins`.
async fn handle_register_admin(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
    Json(req): Json<RegisterAdminApiRequest>,
) -> Result<Response, HttpError> {
    let request = RegisterAdminRequest {
        monastery_id,
        display_name: req.display_name,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = register_admin(&mut persistence, &request)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/monasteries/{monastery_id}/admins`.
async fn handle_list_admins(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_admins(&mut persistence, monastery_id)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/monasteries/{monastery_id}/bookings`.
///
/// The staff triage view: active bookings with their
/// outstanding-confirmation classification as of today.
async fn handle_list_monastery_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(monastery_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_monastery_bookings(&mut persistence, monastery_id, today_utc())?;
    Ok(Json(response).into_response())
}

// ============================================================================
// Slot handlers
// ============================================================================

/// Handler for POST `/slots`.
async fn handle_create_slot(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSlotApiRequest>,
) -> Result<Response, HttpError> {
    info!(
        monastery_id = req.monastery_id,
        slot_date = %req.slot_date,
        meal_type = %req.meal_type,
        "Handling create_slot request"
    );
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let request = CreateSlotRequest {
        monastery_id: req.monastery_id,
        slot_date: req.slot_date,
        meal_type: req.meal_type,
        time_of_day: req.time_of_day,
        monks_capacity: req.monks_capacity,
        max_donors: req.max_donors,
        booking_notes: req.booking_notes,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = create_slot(&mut persistence, &request, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/slots`.
async fn handle_list_slots(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListSlotsQuery>,
) -> Result<Response, HttpError> {
    let request = ListSlotsRequest {
        monastery_id: query.monastery_id,
        from_date: query.from_date,
        to_date: query.to_date,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = list_slots(&mut persistence, &request)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/slots/generate`.
async fn handle_generate_slots(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<GenerateSlotsApiRequest>,
) -> Result<Response, HttpError> {
    info!(
        monastery_id = req.monastery_id,
        start_date = %req.start_date,
        "Handling generate_weekday_slots request"
    );
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let request = GenerateWeekdaySlotsRequest {
        monastery_id: req.monastery_id,
        start_date: req.start_date,
        days: req.days,
        default_capacity: req.default_capacity,
        default_max_donors: req.default_max_donors,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = generate_weekday_slots(&mut persistence, &request, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/slots/{slot_id}/update`.
async fn handle_update_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<i64>,
    Json(req): Json<UpdateSlotApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let request = UpdateSlotRequest {
        slot_id,
        time_of_day: req.time_of_day,
        monks_capacity: req.monks_capacity,
        max_donors: req.max_donors,
        booking_notes: req.booking_notes,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = update_slot(&mut persistence, &request, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/slots/{slot_id}/toggle`.
async fn handle_toggle_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let mut persistence = app_state.persistence.lock().await;
    let response = toggle_availability(&mut persistence, slot_id, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/slots/{slot_id}/delete`.
async fn handle_delete_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let mut persistence = app_state.persistence.lock().await;
    let response = delete_slot(&mut persistence, slot_id, &actor)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/slots/{slot_id}/occupancy`.
async fn handle_get_occupancy(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = get_occupancy(&mut persistence, slot_id)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/slots/{slot_id}/bookings`.
async fn handle_list_slot_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(slot_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = list_slot_bookings(&mut persistence, slot_id)?;
    Ok(Json(response).into_response())
}

// ============================================================================
// Identity and booking handlers
// ============================================================================

/// Handler for GET `/identity/resolve`.
async fn handle_resolve_identity(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ResolveIdentityQuery>,
) -> Result<Response, HttpError> {
    let request = ResolveIdentityRequest {
        monastery_id: query.monastery_id,
        phone: query.phone,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = resolve_identity(&mut persistence, &request)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings`.
///
/// Returns a `BookingOutcome`: created, updated, conflict or aborted.
/// A conflict is a 200 response — it is a structured result the caller
/// answers, not an error.
async fn handle_create_or_update_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BookingApiRequest>,
) -> Result<Response, HttpError> {
    info!(slot_id = req.slot_id, "Handling booking request");
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let request = CreateOrUpdateBookingRequest {
        slot_id: req.slot_id,
        identity: req.identity,
        payload: req.payload,
        decision: req.decision,
    };
    let mut persistence = app_state.persistence.lock().await;
    let outcome: BookingOutcome =
        create_or_update_booking(&mut persistence, &request, &actor, &now)?;
    Ok(Json(outcome).into_response())
}

/// Handler for POST `/bookings/{booking_id}/cancel`.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Response, HttpError> {
    let now: String = now_rfc3339()?;
    let mut persistence = app_state.persistence.lock().await;
    let response = cancel_booking(&mut persistence, booking_id, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings/{booking_id}/approve`.
async fn handle_approve_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let mut persistence = app_state.persistence.lock().await;
    let response = approve_booking(&mut persistence, booking_id, &actor, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings/{booking_id}/confirm`.
async fn handle_confirm_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let mut persistence = app_state.persistence.lock().await;
    let response = confirm_booking(&mut persistence, booking_id, &actor, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings/{booking_id}/delivered`.
async fn handle_mark_delivered(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let mut persistence = app_state.persistence.lock().await;
    let response = mark_delivered(&mut persistence, booking_id, &actor, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings/{booking_id}/not_delivered`.
async fn handle_mark_not_delivered(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let mut persistence = app_state.persistence.lock().await;
    let response = mark_not_delivered(&mut persistence, booking_id, &actor, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for POST `/bookings/{booking_id}/confirmations`.
async fn handle_record_confirmation(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<RecordConfirmationApiRequest>,
) -> Result<Response, HttpError> {
    let actor = actor_from(req.actor_id, &req.actor_role)?;
    let now: String = now_rfc3339()?;
    let request = RecordConfirmationRequest {
        booking_id,
        kind: req.kind,
        method: req.method,
        notes: req.notes,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response = record_manual_confirmation(&mut persistence, &request, &actor, &now)?;
    Ok(Json(response).into_response())
}

/// Handler for GET `/bookings/{booking_id}/confirmations`.
async fn handle_get_confirmation_log(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = get_confirmation_log(&mut persistence, booking_id)?;
    Ok(Json(response).into_response())
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/monasteries", post(handle_create_monastery))
        .route("/monasteries/{monastery_id}", get(handle_get_monastery))
        .route("/monasteries/{monastery_id}/policy", post(handle_update_policy))
        .route(
            "/monasteries/{monastery_id}/meal_time",
            post(handle_update_meal_time),
        )
        .route(
            "/monasteries/{monastery_id}/admins",
            post(handle_register_admin).get(handle_list_admins),
        )
        .route(
            "/monasteries/{monastery_id}/bookings",
            get(handle_list_monastery_bookings),
        )
        .route("/slots", post(handle_create_slot).get(handle_list_slots))
        .route("/slots/generate", post(handle_generate_slots))
        .route("/slots/{slot_id}/update", post(handle_update_slot))
        .route("/slots/{slot_id}/toggle", post(handle_toggle_availability))
        .route("/slots/{slot_id}/delete", post(handle_delete_slot))
        .route("/slots/{slot_id}/occupancy", get(handle_get_occupancy))
        .route("/slots/{slot_id}/bookings", get(handle_list_slot_bookings))
        .route("/identity/resolve", get(handle_resolve_identity))
        .route("/bookings", post(handle_create_or_update_booking))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route("/bookings/{booking_id}/approve", post(handle_approve_booking))
        .route("/bookings/{booking_id}/confirm", post(handle_confirm_booking))
        .route("/bookings/{booking_id}/delivered", post(handle_mark_delivered))
        .route(
            "/bookings/{booking_id}/not_delivered",
            post(handle_mark_not_delivered),
        )
        .route(
            "/bookings/{booking_id}/confirmations",
            post(handle_record_confirmation).get(handle_get_confirmation_log),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let persistence: Persistence = match &args.database {
        Some(path) => {
            info!("Using SQLite database at {path}");
            Persistence::new_with_file(path)?
        }
        None => {
            info!("Using in-memory SQLite database");
            Persistence::new_in_memory()?
        }
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };
    let app: Router = build_router(app_state);

    let addr: String = format!("0.0.0.0:{}", args.port);
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
