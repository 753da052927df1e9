use crate::AppState;
use crate::api::extractors::{IdPath, ReportParams, ReportQuery, ValidatedJson};
use crate::api::models::buyers::{BuyerCreate, BuyerPurchaseOrdersReport, BuyerResponse, BuyerUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/buyers",
    tag = "buyers",
    summary = "List buyers",
    responses(
        (status = 200, description = "All buyers, wrapped in `data`", body = Vec<BuyerResponse>),
        (status = 204, description = "No buyers exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_buyers(State(state): State<AppState>) -> Result<Response> {
    let buyers = state.buyers().list().await?;
    Ok(collection(buyers.into_iter().map(BuyerResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/buyers",
    tag = "buyers",
    summary = "Create buyer",
    request_body = BuyerCreate,
    responses(
        (status = 201, description = "Buyer created", body = BuyerResponse),
        (status = 409, description = "Card number already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_buyer(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<BuyerCreate>,
) -> Result<(StatusCode, Json<Data<BuyerResponse>>)> {
    let buyer = state.buyers().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(BuyerResponse::from(buyer))))
}

#[utoipa::path(
    get,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Get buyer",
    params(("id" = i32, Path, description = "Buyer ID")),
    responses(
        (status = 200, description = "Buyer details", body = BuyerResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Buyer not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_buyer(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<BuyerResponse>>> {
    let buyer = state.buyers().get(id).await?;
    Ok(Data::new(BuyerResponse::from(buyer)))
}

#[utoipa::path(
    patch,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Update buyer",
    request_body = BuyerUpdate,
    params(("id" = i32, Path, description = "Buyer ID")),
    responses(
        (status = 200, description = "Buyer updated", body = BuyerResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Buyer not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Card number already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_buyer(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<BuyerUpdate>,
) -> Result<Json<Data<BuyerResponse>>> {
    let buyer = state.buyers().update(id, update.into()).await?;
    Ok(Data::new(BuyerResponse::from(buyer)))
}

#[utoipa::path(
    delete,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Delete buyer",
    params(("id" = i32, Path, description = "Buyer ID")),
    responses(
        (status = 204, description = "Buyer deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Buyer not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Purchase orders still reference the buyer", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_buyer(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.buyers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/buyers/report-purchase-orders",
    tag = "buyers",
    summary = "Count purchase orders per buyer",
    params(ReportParams),
    responses(
        (status = 200, description = "Purchase order counts", body = Vec<BuyerPurchaseOrdersReport>),
        (status = 204, description = "No buyers exist"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Buyer not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn report_purchase_orders(State(state): State<AppState>, ReportQuery(id): ReportQuery) -> Result<Response> {
    let report = state.buyers().report_purchase_orders(id).await?;
    Ok(collection(report.into_iter().map(BuyerPurchaseOrdersReport::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::buyers::{BuyerPurchaseOrdersReport, BuyerResponse};
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_buyer_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone());

        app.get("/api/v1/buyers").await.assert_status(StatusCode::NO_CONTENT);

        let body = json!({"card_number_id": "40123456", "first_name": "Grace", "last_name": "Hopper"});
        let response = app.post("/api/v1/buyers").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<BuyerResponse> = response.json();

        let response = app.post("/api/v1/buyers").json(&body).await;
        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(error["message"], "Buyer with card_number_id 40123456 already exists");

        let response = app
            .patch(&format!("/api/v1/buyers/{}", created.data.id))
            .json(&json!({"first_name": "Amazing Grace"}))
            .await;
        response.assert_status_ok();
        let updated: Data<BuyerResponse> = response.json();
        assert_eq!(updated.data.first_name, "Amazing Grace");
        assert_eq!(updated.data.card_number_id, "40123456");

        app.delete(&format!("/api/v1/buyers/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/v1/buyers/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_report_purchase_orders(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let busy = create_test_buyer(&pool, "B-1").await;
        let idle = create_test_buyer(&pool, "B-2").await;
        create_test_purchase_order(&pool, "PO-1", busy.id).await;
        create_test_purchase_order(&pool, "PO-2", busy.id).await;

        let response = app.get("/api/v1/buyers/report-purchase-orders").await;
        response.assert_status_ok();
        let report: Data<Vec<BuyerPurchaseOrdersReport>> = response.json();
        let counts: Vec<_> = report.data.iter().map(|r| (r.id, r.purchase_orders_count)).collect();
        assert_eq!(counts, vec![(busy.id, 2), (idle.id, 0)]);

        let response = app
            .get("/api/v1/buyers/report-purchase-orders")
            .add_query_param("id", idle.id)
            .await;
        response.assert_status_ok();
        let report: Data<Vec<BuyerPurchaseOrdersReport>> = response.json();
        assert_eq!(report.data[0].purchase_orders_count, 0);

        app.get("/api/v1/buyers/report-purchase-orders")
            .add_query_param("id", idle.id + 100)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_delete_buyer_with_orders_conflicts(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let buyer = create_test_buyer(&pool, "B-1").await;
        create_test_purchase_order(&pool, "PO-1", buyer.id).await;

        app.delete(&format!("/api/v1/buyers/{}", buyer.id))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_report_without_buyers_is_no_content(pool: PgPool) {
        let app = create_test_app(pool);
        app.get("/api/v1/buyers/report-purchase-orders")
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}
