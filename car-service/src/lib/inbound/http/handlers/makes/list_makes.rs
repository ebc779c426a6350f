use axum::extract::State;
use axum::http::StatusCode;

use super::MakeResponseData;
use crate::domain::make::ports::MakeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_makes(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<MakeResponseData>>, ApiError> {
    state
        .make_service
        .list_makes()
        .await
        .map_err(ApiError::from)
        .map(|makes| {
            ApiSuccess::new(
                StatusCode::OK,
                makes.iter().map(MakeResponseData::from).collect(),
            )
        })
}
