use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::purchase_orders::{PurchaseOrderCreate, PurchaseOrderResponse, PurchaseOrderUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/purchase-orders",
    tag = "purchase-orders",
    summary = "List purchase orders",
    responses(
        (status = 200, description = "All purchase orders, wrapped in `data`", body = Vec<PurchaseOrderResponse>),
        (status = 204, description = "No purchase orders exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_purchase_orders(State(state): State<AppState>) -> Result<Response> {
    let orders = state.purchase_orders().list().await?;
    Ok(collection(orders.into_iter().map(PurchaseOrderResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/purchase-orders",
    tag = "purchase-orders",
    summary = "Create purchase order",
    request_body = PurchaseOrderCreate,
    responses(
        (status = 201, description = "Purchase order created", body = PurchaseOrderResponse),
        (status = 409, description = "Order number already registered or unknown buyer", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_purchase_order(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<PurchaseOrderCreate>,
) -> Result<(StatusCode, Json<Data<PurchaseOrderResponse>>)> {
    let order = state.purchase_orders().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(PurchaseOrderResponse::from(order))))
}

#[utoipa::path(
    get,
    path = "/purchase-orders/{id}",
    tag = "purchase-orders",
    summary = "Get purchase order",
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 200, description = "Purchase order details", body = PurchaseOrderResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Purchase order not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_purchase_order(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<PurchaseOrderResponse>>> {
    let order = state.purchase_orders().get(id).await?;
    Ok(Data::new(PurchaseOrderResponse::from(order)))
}

#[utoipa::path(
    patch,
    path = "/purchase-orders/{id}",
    tag = "purchase-orders",
    summary = "Update purchase order",
    request_body = PurchaseOrderUpdate,
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 200, description = "Purchase order updated", body = PurchaseOrderResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Purchase order not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Order number already registered or unknown buyer", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_purchase_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<PurchaseOrderUpdate>,
) -> Result<Json<Data<PurchaseOrderResponse>>> {
    let order = state.purchase_orders().update(id, update.into()).await?;
    Ok(Data::new(PurchaseOrderResponse::from(order)))
}

#[utoipa::path(
    delete,
    path = "/purchase-orders/{id}",
    tag = "purchase-orders",
    summary = "Delete purchase order",
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 204, description = "Purchase order deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Purchase order not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_purchase_order(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.purchase_orders().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::purchase_orders::PurchaseOrderResponse;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_purchase_order_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let buyer = create_test_buyer(&pool, "B-1").await;

        app.get("/api/v1/purchase-orders")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let body = json!({
            "order_number": "PO-1",
            "order_date": "2025-03-02",
            "tracking_code": "TRK-1",
            "buyer_id": buyer.id,
            "product_record_id": 1,
            "order_status_id": 1
        });
        let response = app.post("/api/v1/purchase-orders").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<PurchaseOrderResponse> = response.json();
        assert_eq!(created.data.buyer_id, buyer.id);

        app.post("/api/v1/purchase-orders")
            .json(&body)
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .patch(&format!("/api/v1/purchase-orders/{}", created.data.id))
            .json(&json!({"order_status_id": 2}))
            .await;
        response.assert_status_ok();
        let updated: Data<PurchaseOrderResponse> = response.json();
        assert_eq!(updated.data.order_status_id, 2);
        assert_eq!(updated.data.tracking_code, "TRK-1");

        let response = app.get(&format!("/api/v1/purchase-orders/{}", created.data.id)).await;
        response.assert_status_ok();
        let fetched: Data<PurchaseOrderResponse> = response.json();
        assert_eq!(fetched.data, updated.data);

        app.delete(&format!("/api/v1/purchase-orders/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.delete(&format!("/api/v1/purchase-orders/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_purchase_order_with_unknown_buyer_conflicts(pool: PgPool) {
        let app = create_test_app(pool);

        let response = app
            .post("/api/v1/purchase-orders")
            .json(&json!({
                "order_number": "PO-1",
                "order_date": "2025-03-02",
                "tracking_code": "TRK-1",
                "buyer_id": 77,
                "product_record_id": 1,
                "order_status_id": 1
            }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(
            error["message"],
            "Purchase order: buyer_id does not reference an existing record"
        );
    }

    #[tokio::test]
    async fn test_bad_order_date_is_rejected() {
        let app = create_lazy_test_app();

        let response = app
            .post("/api/v1/purchase-orders")
            .json(&json!({
                "order_number": "PO-1",
                "order_date": "yesterday",
                "tracking_code": "TRK-1",
                "buyer_id": 1,
                "product_record_id": 1,
                "order_status_id": 1
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
