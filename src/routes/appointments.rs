use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    errors::StoreError,
    extract::ValidJson,
    models::{Appointment, AppointmentPayload, CreatedResponse, ErrorResponse},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/appointments", post(create_appointment))
}

/// Store an appointment request from the contact form
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "appointments",
    request_body = AppointmentPayload,
    responses(
        (status = 201, description = "Appointment request stored", body = CreatedResponse),
        (status = 422, description = "Invalid appointment fields", body = ErrorResponse),
        (status = 500, description = "Document store failure", body = ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    ValidJson(appointment): ValidJson<Appointment>,
) -> Result<(StatusCode, Json<CreatedResponse>), StoreError> {
    let id = state.db.create_appointment(&appointment).await?;
    info!("Stored appointment request {} for {}", id, appointment.service_type);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
