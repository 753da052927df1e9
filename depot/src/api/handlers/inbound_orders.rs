use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::inbound_orders::{InboundOrderCreate, InboundOrderResponse, InboundOrderUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/inbound-orders",
    tag = "inbound-orders",
    summary = "List inbound orders",
    responses(
        (status = 200, description = "All inbound orders, wrapped in `data`", body = Vec<InboundOrderResponse>),
        (status = 204, description = "No inbound orders exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_inbound_orders(State(state): State<AppState>) -> Result<Response> {
    let orders = state.inbound_orders().list().await?;
    Ok(collection(orders.into_iter().map(InboundOrderResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/inbound-orders",
    tag = "inbound-orders",
    summary = "Create inbound order",
    request_body = InboundOrderCreate,
    responses(
        (status = 201, description = "Inbound order created", body = InboundOrderResponse),
        (status = 409, description = "Order number already registered or unknown employee, batch or warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_inbound_order(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<InboundOrderCreate>,
) -> Result<(StatusCode, Json<Data<InboundOrderResponse>>)> {
    let order = state.inbound_orders().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(InboundOrderResponse::from(order))))
}

#[utoipa::path(
    get,
    path = "/inbound-orders/{id}",
    tag = "inbound-orders",
    summary = "Get inbound order",
    params(("id" = i32, Path, description = "Inbound order ID")),
    responses(
        (status = 200, description = "Inbound order details", body = InboundOrderResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Inbound order not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_inbound_order(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<InboundOrderResponse>>> {
    let order = state.inbound_orders().get(id).await?;
    Ok(Data::new(InboundOrderResponse::from(order)))
}

#[utoipa::path(
    patch,
    path = "/inbound-orders/{id}",
    tag = "inbound-orders",
    summary = "Update inbound order",
    request_body = InboundOrderUpdate,
    params(("id" = i32, Path, description = "Inbound order ID")),
    responses(
        (status = 200, description = "Inbound order updated", body = InboundOrderResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Inbound order not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Order number already registered or unknown employee, batch or warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_inbound_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<InboundOrderUpdate>,
) -> Result<Json<Data<InboundOrderResponse>>> {
    let order = state.inbound_orders().update(id, update.into()).await?;
    Ok(Data::new(InboundOrderResponse::from(order)))
}

#[utoipa::path(
    delete,
    path = "/inbound-orders/{id}",
    tag = "inbound-orders",
    summary = "Delete inbound order",
    params(("id" = i32, Path, description = "Inbound order ID")),
    responses(
        (status = 204, description = "Inbound order deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Inbound order not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_inbound_order(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.inbound_orders().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
