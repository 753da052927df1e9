use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::warehouses::{WarehouseCreate, WarehouseResponse, WarehouseUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/warehouses",
    tag = "warehouses",
    summary = "List warehouses",
    responses(
        (status = 200, description = "All warehouses, wrapped in `data`", body = Vec<WarehouseResponse>),
        (status = 204, description = "No warehouses exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_warehouses(State(state): State<AppState>) -> Result<Response> {
    let warehouses = state.warehouses().list().await?;
    Ok(collection(warehouses.into_iter().map(WarehouseResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/warehouses",
    tag = "warehouses",
    summary = "Create warehouse",
    request_body = WarehouseCreate,
    responses(
        (status = 201, description = "Warehouse created", body = WarehouseResponse),
        (status = 409, description = "Warehouse code already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<WarehouseCreate>,
) -> Result<(StatusCode, Json<Data<WarehouseResponse>>)> {
    let warehouse = state.warehouses().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(WarehouseResponse::from(warehouse))))
}

#[utoipa::path(
    get,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Get warehouse",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse details", body = WarehouseResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Warehouse not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_warehouse(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<WarehouseResponse>>> {
    let warehouse = state.warehouses().get(id).await?;
    Ok(Data::new(WarehouseResponse::from(warehouse)))
}

#[utoipa::path(
    patch,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Update warehouse",
    request_body = WarehouseUpdate,
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse updated", body = WarehouseResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Warehouse not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Warehouse code already registered", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<WarehouseUpdate>,
) -> Result<Json<Data<WarehouseResponse>>> {
    let warehouse = state.warehouses().update(id, update.into()).await?;
    Ok(Data::new(WarehouseResponse::from(warehouse)))
}

#[utoipa::path(
    delete,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Delete warehouse",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Warehouse not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Sections, employees or inbound orders still reference the warehouse", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_warehouse(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.warehouses().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::warehouses::WarehouseResponse;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_warehouse_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone());

        app.get("/api/v1/warehouses").await.assert_status(StatusCode::NO_CONTENT);

        let body = json!({
            "warehouse_code": "WH-1",
            "address": "Ruta 5 km 60",
            "telephone": "555",
            "minimum_capacity": 10,
            "minimum_temperature": -5.5
        });
        let response = app.post("/api/v1/warehouses").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<WarehouseResponse> = response.json();
        assert_eq!(created.data.minimum_temperature, -5.5);

        app.post("/api/v1/warehouses")
            .json(&body)
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .patch(&format!("/api/v1/warehouses/{}", created.data.id))
            .json(&json!({"minimum_capacity": 20}))
            .await;
        response.assert_status_ok();
        let updated: Data<WarehouseResponse> = response.json();
        assert_eq!(updated.data.minimum_capacity, 20);
        assert_eq!(updated.data.warehouse_code, "WH-1");

        app.delete(&format!("/api/v1/warehouses/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/v1/warehouses/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_delete_warehouse_with_employees_conflicts(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let warehouse = create_test_warehouse(&pool, "WH-1").await;
        create_test_employee(&pool, "EMP-1", warehouse.id).await;

        let response = app.delete(&format!("/api/v1/warehouses/{}", warehouse.id)).await;
        response.assert_status(StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(
            error["message"],
            format!("Warehouse with ID {} is still referenced by other records", warehouse.id)
        );
    }
}
