use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::sellers::{SellerCreate, SellerResponse, SellerUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/sellers",
    tag = "sellers",
    summary = "List sellers",
    responses(
        (status = 200, description = "All sellers, wrapped in `data`", body = Vec<SellerResponse>),
        (status = 204, description = "No sellers exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sellers(State(state): State<AppState>) -> Result<Response> {
    let sellers = state.sellers().list().await?;
    Ok(collection(sellers.into_iter().map(SellerResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/sellers",
    tag = "sellers",
    summary = "Create seller",
    request_body = SellerCreate,
    responses(
        (status = 201, description = "Seller created", body = SellerResponse),
        (status = 409, description = "CID already registered or unknown locality", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_seller(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<SellerCreate>,
) -> Result<(StatusCode, Json<Data<SellerResponse>>)> {
    let seller = state.sellers().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(SellerResponse::from(seller))))
}

#[utoipa::path(
    get,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Get seller",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller details", body = SellerResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_seller(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<SellerResponse>>> {
    let seller = state.sellers().get(id).await?;
    Ok(Data::new(SellerResponse::from(seller)))
}

#[utoipa::path(
    patch,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Update seller",
    request_body = SellerUpdate,
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller updated", body = SellerResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorBody),
        (status = 409, description = "CID already registered or unknown locality", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_seller(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<SellerUpdate>,
) -> Result<Json<Data<SellerResponse>>> {
    let seller = state.sellers().update(id, update.into()).await?;
    Ok(Data::new(SellerResponse::from(seller)))
}

#[utoipa::path(
    delete,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Delete seller",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Products still reference the seller", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_seller(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.sellers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::sellers::SellerResponse;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_create_seller_then_duplicate_cid(pool: PgPool) {
        let app = create_test_app(pool);

        let body = json!({
            "cid": 123,
            "company_name": "TEST",
            "address": "x",
            "telephone": "999"
        });

        let response = app.post("/api/v1/sellers").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<SellerResponse> = response.json();
        assert!(created.data.id > 0);
        assert_eq!(created.data.cid, 123);
        assert_eq!(created.data.locality_id, None);

        let response = app.post("/api/v1/sellers").json(&body).await;
        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(error["code"], "conflict");
        assert_eq!(error["message"], "Seller with cid 123 already exists");

        let response = app.get("/api/v1/sellers").await;
        response.assert_status_ok();
        let all: Data<Vec<SellerResponse>> = response.json();
        assert_eq!(all.data.len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_create_seller_in_locality(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let locality = create_test_locality(&pool, "1000").await;

        let response = app
            .post("/api/v1/sellers")
            .json(&json!({
                "cid": 5,
                "company_name": "TEST",
                "address": "x",
                "telephone": "999",
                "locality_id": locality.id
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: Data<SellerResponse> = response.json();
        assert_eq!(created.data.locality_id, Some(locality.id));
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_create_seller_with_unknown_locality(pool: PgPool) {
        let app = create_test_app(pool);

        let response = app
            .post("/api/v1/sellers")
            .json(&json!({
                "cid": 1,
                "company_name": "TEST",
                "address": "x",
                "telephone": "999",
                "locality_id": 4242
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(error["message"], "Seller: locality_id does not reference an existing record");
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_get_update_delete_seller(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let locality = create_test_locality(&pool, "1000").await;
        let seller = create_test_seller(&pool, 7, locality.id).await;

        let response = app.get(&format!("/api/v1/sellers/{}", seller.id)).await;
        response.assert_status_ok();

        let response = app
            .patch(&format!("/api/v1/sellers/{}", seller.id))
            .json(&json!({"telephone": "123"}))
            .await;
        response.assert_status_ok();
        let updated: Data<SellerResponse> = response.json();
        assert_eq!(updated.data.telephone, "123");
        assert_eq!(updated.data.cid, 7);
        assert_eq!(updated.data.company_name, seller.company_name);

        app.delete(&format!("/api/v1/sellers/{}", seller.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.delete(&format!("/api/v1/sellers/{}", seller.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_missing_seller_is_404(pool: PgPool) {
        let app = create_test_app(pool);

        app.get("/api/v1/sellers/99").await.assert_status(StatusCode::NOT_FOUND);
        app.patch("/api/v1/sellers/99")
            .json(&json!({"telephone": "1"}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        app.delete("/api/v1/sellers/99").await.assert_status(StatusCode::NOT_FOUND);
    }
}
