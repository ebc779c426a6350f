use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::CarRequest;
use super::CarResponseData;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_car(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> Result<ApiSuccess<CarResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .car_service
        .create_car(&auth_user.user_id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::CREATED, car.into()))
}
