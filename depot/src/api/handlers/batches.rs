use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::batches::{BatchCreate, BatchResponse, BatchUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/product-batches",
    tag = "product-batches",
    summary = "List product batches",
    responses(
        (status = 200, description = "All batches, wrapped in `data`", body = Vec<BatchResponse>),
        (status = 204, description = "No batches exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_batches(State(state): State<AppState>) -> Result<Response> {
    let batches = state.batches().list().await?;
    Ok(collection(batches.into_iter().map(BatchResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/product-batches",
    tag = "product-batches",
    summary = "Create product batch",
    request_body = BatchCreate,
    responses(
        (status = 201, description = "Batch created", body = BatchResponse),
        (status = 409, description = "Batch number already registered or unknown product or section", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body or inconsistent quantities and dates", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_batch(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<BatchCreate>,
) -> Result<(StatusCode, Json<Data<BatchResponse>>)> {
    let batch = state.batches().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(BatchResponse::from(batch))))
}

#[utoipa::path(
    get,
    path = "/product-batches/{id}",
    tag = "product-batches",
    summary = "Get product batch",
    params(("id" = i32, Path, description = "Batch ID")),
    responses(
        (status = 200, description = "Batch details", body = BatchResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Batch not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_batch(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<BatchResponse>>> {
    let batch = state.batches().get(id).await?;
    Ok(Data::new(BatchResponse::from(batch)))
}

#[utoipa::path(
    patch,
    path = "/product-batches/{id}",
    tag = "product-batches",
    summary = "Update product batch",
    request_body = BatchUpdate,
    params(("id" = i32, Path, description = "Batch ID")),
    responses(
        (status = 200, description = "Batch updated", body = BatchResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Batch not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Batch number already registered or unknown product or section", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body or inconsistent quantities and dates", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_batch(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<BatchUpdate>,
) -> Result<Json<Data<BatchResponse>>> {
    let batch = state.batches().update(id, update.into()).await?;
    Ok(Data::new(BatchResponse::from(batch)))
}

#[utoipa::path(
    delete,
    path = "/product-batches/{id}",
    tag = "product-batches",
    summary = "Delete product batch",
    params(("id" = i32, Path, description = "Batch ID")),
    responses(
        (status = 204, description = "Batch deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Batch not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Inbound orders still reference the batch", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_batch(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.batches().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::batches::BatchResponse;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use serde_json::json;
    use sqlx::PgPool;

    fn batch_body(batch_number: i32, product_id: i32, section_id: i32) -> serde_json::Value {
        json!({
            "batch_number": batch_number,
            "current_quantity": 20,
            "initial_quantity": 50,
            "current_temperature": -10.0,
            "minimum_temperature": -18.0,
            "due_date": "2025-06-30",
            "manufacturing_date": "2025-03-01",
            "manufacturing_hour": 8,
            "product_id": product_id,
            "section_id": section_id
        })
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_batch_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let section = create_test_section(&pool, 1).await;
        let product = create_test_product(&pool, "P-1").await;

        app.get("/api/v1/product-batches")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = app
            .post("/api/v1/product-batches")
            .json(&batch_body(111, product.id, section.id))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<BatchResponse> = response.json();
        assert_eq!(created.data.due_date, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        app.post("/api/v1/product-batches")
            .json(&batch_body(111, product.id, section.id))
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .patch(&format!("/api/v1/product-batches/{}", created.data.id))
            .json(&json!({"current_quantity": 15}))
            .await;
        response.assert_status_ok();
        let updated: Data<BatchResponse> = response.json();
        assert_eq!(updated.data.current_quantity, 15);
        assert_eq!(updated.data.initial_quantity, 50);

        app.patch(&format!("/api/v1/product-batches/{}", created.data.id))
            .json(&json!({"initial_quantity": 10}))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        app.delete(&format!("/api/v1/product-batches/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/v1/product-batches/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_batch_with_unknown_section_conflicts(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let product = create_test_product(&pool, "P-1").await;

        let response = app
            .post("/api/v1/product-batches")
            .json(&batch_body(1, product.id, 999))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(
            error["message"],
            "Product batch: section_id does not reference an existing record"
        );
    }

    #[tokio::test]
    async fn test_invalid_batches_are_rejected_before_the_database() {
        let app = create_lazy_test_app();

        let mut body = batch_body(1, 1, 1);
        body["manufacturing_hour"] = json!(24);
        let response = app.post("/api/v1/product-batches").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error: serde_json::Value = response.json();
        assert_eq!(error["message"], "manufacturing_hour: must be between 0 and 23");

        let mut body = batch_body(1, 1, 1);
        body["due_date"] = json!("30/06/2025");
        app.post("/api/v1/product-batches")
            .json(&body)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let mut body = batch_body(1, 1, 1);
        body["current_quantity"] = json!(60);
        let response = app.post("/api/v1/product-batches").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error: serde_json::Value = response.json();
        assert_eq!(
            error["message"],
            "current_quantity (60) must not exceed initial_quantity (50)"
        );
    }
}
