use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CarListingResponseData;
use crate::domain::car::ports::CarServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_cars(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<CarListingResponseData>>, ApiError> {
    state
        .car_service
        .list_cars(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|cars| {
            ApiSuccess::new(
                StatusCode::OK,
                cars.iter().map(CarListingResponseData::from).collect(),
            )
        })
}
