use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::CreateMakeRequest;
use super::MakeResponseData;
use crate::domain::make::errors::MakeError;
use crate::domain::make::models::MakeName;
use crate::domain::make::ports::MakeServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_make(
    State(state): State<AppState>,
    payload: Result<Json<CreateMakeRequest>, JsonRejection>,
) -> Result<ApiSuccess<MakeResponseData>, ApiError> {
    let Json(body) = payload?;
    let name = MakeName::new(body.name).map_err(MakeError::from)?;

    state
        .make_service
        .create_make(name)
        .await
        .map_err(ApiError::from)
        .map(|ref make| ApiSuccess::new(StatusCode::CREATED, make.into()))
}
