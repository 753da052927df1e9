use crate::AppState;
use crate::api::extractors::{IdPath, ReportParams, ReportQuery, ValidatedJson};
use crate::api::models::localities::{
    LocalityCarriersReport, LocalityCreate, LocalityResponse, LocalitySellersReport, LocalityUpdate,
};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/localities",
    tag = "localities",
    summary = "List localities",
    responses(
        (status = 200, description = "All localities, wrapped in `data`", body = Vec<LocalityResponse>),
        (status = 204, description = "No localities exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_localities(State(state): State<AppState>) -> Result<Response> {
    let localities = state.localities().list().await?;
    Ok(collection(localities.into_iter().map(LocalityResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/localities",
    tag = "localities",
    summary = "Create locality",
    request_body = LocalityCreate,
    responses(
        (status = 201, description = "Locality created", body = LocalityResponse),
        (status = 409, description = "Zip code already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_locality(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<LocalityCreate>,
) -> Result<(StatusCode, Json<Data<LocalityResponse>>)> {
    let locality = state.localities().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(LocalityResponse::from(locality))))
}

#[utoipa::path(
    get,
    path = "/localities/{id}",
    tag = "localities",
    summary = "Get locality",
    params(("id" = i32, Path, description = "Locality ID")),
    responses(
        (status = 200, description = "Locality details", body = LocalityResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Locality not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_locality(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<LocalityResponse>>> {
    let locality = state.localities().get(id).await?;
    Ok(Data::new(LocalityResponse::from(locality)))
}

#[utoipa::path(
    patch,
    path = "/localities/{id}",
    tag = "localities",
    summary = "Update locality",
    request_body = LocalityUpdate,
    params(("id" = i32, Path, description = "Locality ID")),
    responses(
        (status = 200, description = "Locality updated", body = LocalityResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Locality not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Zip code already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_locality(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<LocalityUpdate>,
) -> Result<Json<Data<LocalityResponse>>> {
    let locality = state.localities().update(id, update.into()).await?;
    Ok(Data::new(LocalityResponse::from(locality)))
}

#[utoipa::path(
    delete,
    path = "/localities/{id}",
    tag = "localities",
    summary = "Delete locality",
    params(("id" = i32, Path, description = "Locality ID")),
    responses(
        (status = 204, description = "Locality deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Locality not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Sellers or carriers still reference the locality", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_locality(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.localities().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/localities/report-sellers",
    tag = "localities",
    summary = "Count sellers per locality",
    params(ReportParams),
    responses(
        (status = 200, description = "Seller counts", body = Vec<LocalitySellersReport>),
        (status = 204, description = "No localities exist"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Locality not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn report_sellers(State(state): State<AppState>, ReportQuery(id): ReportQuery) -> Result<Response> {
    let report = state.localities().report_sellers(id).await?;
    Ok(collection(report.into_iter().map(LocalitySellersReport::from).collect()))
}

#[utoipa::path(
    get,
    path = "/localities/report-carriers",
    tag = "localities",
    summary = "Count carriers per locality",
    params(ReportParams),
    responses(
        (status = 200, description = "Carrier counts", body = Vec<LocalityCarriersReport>),
        (status = 204, description = "No localities exist"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Locality not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn report_carriers(State(state): State<AppState>, ReportQuery(id): ReportQuery) -> Result<Response> {
    let report = state.localities().report_carriers(id).await?;
    Ok(collection(report.into_iter().map(LocalityCarriersReport::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::localities::{LocalityCarriersReport, LocalityResponse, LocalitySellersReport};
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_locality_crud(pool: PgPool) {
        let app = create_test_app(pool.clone());

        app.get("/api/v1/localities").await.assert_status(StatusCode::NO_CONTENT);

        let body = json!({
            "zip_code": "6700",
            "locality_name": "Lujan",
            "province_name": "Buenos Aires",
            "country_name": "Argentina"
        });
        let response = app.post("/api/v1/localities").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<LocalityResponse> = response.json();

        app.post("/api/v1/localities")
            .json(&body)
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app.get(&format!("/api/v1/localities/{}", created.data.id)).await;
        response.assert_status_ok();
        let fetched: Data<LocalityResponse> = response.json();
        assert_eq!(fetched.data, created.data);

        let response = app
            .patch(&format!("/api/v1/localities/{}", created.data.id))
            .json(&json!({"locality_name": "Mercedes"}))
            .await;
        response.assert_status_ok();
        let updated: Data<LocalityResponse> = response.json();
        assert_eq!(updated.data.locality_name, "Mercedes");
        assert_eq!(updated.data.zip_code, "6700");

        app.delete(&format!("/api/v1/localities/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/v1/localities/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_update_to_taken_zip_code_conflicts(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let first = create_test_locality(&pool, "1000").await;
        create_test_locality(&pool, "2000").await;

        app.patch(&format!("/api/v1/localities/{}", first.id))
            .json(&json!({"zip_code": "2000"}))
            .await
            .assert_status(StatusCode::CONFLICT);

        // Re-submitting the record's own key is not a conflict
        app.patch(&format!("/api/v1/localities/{}", first.id))
            .json(&json!({"zip_code": "1000"}))
            .await
            .assert_status_ok();
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_delete_referenced_locality_conflicts(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let locality = create_test_locality(&pool, "1000").await;
        create_test_seller(&pool, 1, locality.id).await;

        let response = app.delete(&format!("/api/v1/localities/{}", locality.id)).await;
        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "conflict");
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_report_sellers(pool: PgPool) {
        let app = create_test_app(pool.clone());

        app.get("/api/v1/localities/report-sellers")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let busy = create_test_locality(&pool, "1000").await;
        let quiet = create_test_locality(&pool, "2000").await;
        create_test_seller(&pool, 1, busy.id).await;
        create_test_seller(&pool, 2, busy.id).await;

        let response = app.get("/api/v1/localities/report-sellers").await;
        response.assert_status_ok();
        let report: Data<Vec<LocalitySellersReport>> = response.json();
        let counts: Vec<_> = report.data.iter().map(|r| (r.locality_id, r.sellers_count)).collect();
        assert_eq!(counts, vec![(busy.id, 2), (quiet.id, 0)]);

        let response = app
            .get("/api/v1/localities/report-sellers")
            .add_query_param("id", quiet.id)
            .await;
        response.assert_status_ok();
        let report: Data<Vec<LocalitySellersReport>> = response.json();
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.data[0].sellers_count, 0);
        assert_eq!(report.data[0].locality_name, quiet.locality_name);

        app.get("/api/v1/localities/report-sellers")
            .add_query_param("id", quiet.id + 100)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_report_carriers(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let locality = create_test_locality(&pool, "1000").await;
        create_test_carrier(&pool, "CID#1", locality.id).await;

        let response = app
            .get("/api/v1/localities/report-carriers")
            .add_query_param("id", locality.id)
            .await;
        response.assert_status_ok();
        let report: Data<Vec<LocalityCarriersReport>> = response.json();
        assert_eq!(report.data[0].carriers_count, 1);
    }

    #[tokio::test]
    async fn test_rejections_happen_before_the_database() {
        let app = create_lazy_test_app();

        app.get("/api/v1/localities/abc").await.assert_status(StatusCode::BAD_REQUEST);
        app.get("/api/v1/localities/report-sellers?id=abc")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = app
            .post("/api/v1/localities")
            .json(&json!({"zip_code": "", "locality_name": "x", "province_name": "y", "country_name": "z"}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "zip_code: must not be empty");

        app.post("/api/v1/localities")
            .json(&json!({"zip_code": "1"}))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
