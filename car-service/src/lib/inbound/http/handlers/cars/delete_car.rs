use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CarResponseData;
use crate::domain::car::models::CarId;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_car(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    car_id: Result<Path<i32>, PathRejection>,
) -> Result<ApiSuccess<CarResponseData>, ApiError> {
    let Path(car_id) = car_id?;

    state
        .car_service
        .delete_car(&auth_user.user_id, CarId(car_id))
        .await
        .map_err(ApiError::from)
        .map(|ref car| ApiSuccess::new(StatusCode::OK, car.into()))
}
