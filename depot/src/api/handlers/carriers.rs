use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::carriers::{CarrierCreate, CarrierResponse, CarrierUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/carriers",
    tag = "carriers",
    summary = "List carriers",
    responses(
        (status = 200, description = "All carriers, wrapped in `data`", body = Vec<CarrierResponse>),
        (status = 204, description = "No carriers exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_carriers(State(state): State<AppState>) -> Result<Response> {
    let carriers = state.carriers().list().await?;
    Ok(collection(carriers.into_iter().map(CarrierResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/carriers",
    tag = "carriers",
    summary = "Create carrier",
    request_body = CarrierCreate,
    responses(
        (status = 201, description = "Carrier created", body = CarrierResponse),
        (status = 409, description = "CID already registered or unknown locality", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_carrier(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<CarrierCreate>,
) -> Result<(StatusCode, Json<Data<CarrierResponse>>)> {
    let carrier = state.carriers().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(CarrierResponse::from(carrier))))
}

#[utoipa::path(
    get,
    path = "/carriers/{id}",
    tag = "carriers",
    summary = "Get carrier",
    params(("id" = i32, Path, description = "Carrier ID")),
    responses(
        (status = 200, description = "Carrier details", body = CarrierResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Carrier not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_carrier(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<CarrierResponse>>> {
    let carrier = state.carriers().get(id).await?;
    Ok(Data::new(CarrierResponse::from(carrier)))
}

#[utoipa::path(
    patch,
    path = "/carriers/{id}",
    tag = "carriers",
    summary = "Update carrier",
    request_body = CarrierUpdate,
    params(("id" = i32, Path, description = "Carrier ID")),
    responses(
        (status = 200, description = "Carrier updated", body = CarrierResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Carrier not found", body = crate::errors::ErrorBody),
        (status = 409, description = "CID already registered or unknown locality", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_carrier(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<CarrierUpdate>,
) -> Result<Json<Data<CarrierResponse>>> {
    let carrier = state.carriers().update(id, update.into()).await?;
    Ok(Data::new(CarrierResponse::from(carrier)))
}

#[utoipa::path(
    delete,
    path = "/carriers/{id}",
    tag = "carriers",
    summary = "Delete carrier",
    params(("id" = i32, Path, description = "Carrier ID")),
    responses(
        (status = 204, description = "Carrier deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Carrier not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_carrier(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.carriers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
