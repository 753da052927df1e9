use crate::AppState;
use crate::api::extractors::{IdPath, ReportParams, ReportQuery, ValidatedJson};
use crate::api::models::employees::{EmployeeCreate, EmployeeInboundOrdersReport, EmployeeResponse, EmployeeUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    summary = "List employees",
    responses(
        (status = 200, description = "All employees, wrapped in `data`", body = Vec<EmployeeResponse>),
        (status = 204, description = "No employees exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Response> {
    let employees = state.employees().list().await?;
    Ok(collection(employees.into_iter().map(EmployeeResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    summary = "Create employee",
    request_body = EmployeeCreate,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 409, description = "Card number already registered or unknown warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<EmployeeCreate>,
) -> Result<(StatusCode, Json<Data<EmployeeResponse>>)> {
    let employee = state.employees().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(EmployeeResponse::from(employee))))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Get employee",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_employee(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<EmployeeResponse>>> {
    let employee = state.employees().get(id).await?;
    Ok(Data::new(EmployeeResponse::from(employee)))
}

#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Update employee",
    request_body = EmployeeUpdate,
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Card number already registered or unknown warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<EmployeeUpdate>,
) -> Result<Json<Data<EmployeeResponse>>> {
    let employee = state.employees().update(id, update.into()).await?;
    Ok(Data::new(EmployeeResponse::from(employee)))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Delete employee",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Inbound orders still reference the employee", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_employee(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.employees().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/employees/report-inbound-orders",
    tag = "employees",
    summary = "Count inbound orders per employee",
    params(ReportParams),
    responses(
        (status = 200, description = "Inbound order counts", body = Vec<EmployeeInboundOrdersReport>),
        (status = 204, description = "No employees exist"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn report_inbound_orders(State(state): State<AppState>, ReportQuery(id): ReportQuery) -> Result<Response> {
    let report = state.employees().report_inbound_orders(id).await?;
    Ok(collection(report.into_iter().map(EmployeeInboundOrdersReport::from).collect()))
}

#[cfg(test)]
mod tests {
    use crate::api::models::Data;
    use crate::api::models::employees::{EmployeeInboundOrdersReport, EmployeeResponse};
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_employee_lifecycle(pool: PgPool) {
        let app = create_test_app(pool.clone());
        let warehouse = create_test_warehouse(&pool, "WH-1").await;

        app.get("/api/v1/employees").await.assert_status(StatusCode::NO_CONTENT);

        let body = json!({
            "card_number_id": "EMP-1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "warehouse_id": warehouse.id
        });
        let response = app.post("/api/v1/employees").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        let created: Data<EmployeeResponse> = response.json();

        app.post("/api/v1/employees")
            .json(&body)
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .patch(&format!("/api/v1/employees/{}", created.data.id))
            .json(&json!({"last_name": "Byron"}))
            .await;
        response.assert_status_ok();
        let updated: Data<EmployeeResponse> = response.json();
        assert_eq!(updated.data.last_name, "Byron");
        assert_eq!(updated.data.first_name, "Ada");

        let response = app.get(&format!("/api/v1/employees/{}", created.data.id)).await;
        response.assert_status_ok();
        let fetched: Data<EmployeeResponse> = response.json();
        assert_eq!(fetched.data, updated.data);

        app.delete(&format!("/api/v1/employees/{}", created.data.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.delete(&format!("/api/v1/employees/{}", created.data.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    #[cfg_attr(not(feature = "db-tests"), ignore = "requires a Postgres DATABASE_URL")]
    async fn test_report_inbound_orders(pool: PgPool) {
        let app = create_test_app(pool.clone());

        app.get("/api/v1/employees/report-inbound-orders")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let order = create_test_inbound_order(&pool, "ORD-1").await;
        let idle = create_test_employee(&pool, "EMP-IDLE", order.warehouse_id).await;

        let response = app.get("/api/v1/employees/report-inbound-orders").await;
        response.assert_status_ok();
        let report: Data<Vec<EmployeeInboundOrdersReport>> = response.json();
        let counts: Vec<_> = report.data.iter().map(|r| (r.id, r.inbound_orders_count)).collect();
        assert_eq!(counts, vec![(order.employee_id, 1), (idle.id, 0)]);

        let response = app
            .get("/api/v1/employees/report-inbound-orders")
            .add_query_param("id", idle.id)
            .await;
        response.assert_status_ok();
        let report: Data<Vec<EmployeeInboundOrdersReport>> = response.json();
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.data[0].card_number_id, "EMP-IDLE");
        assert_eq!(report.data[0].inbound_orders_count, 0);

        app.get("/api/v1/employees/report-inbound-orders")
            .add_query_param("id", idle.id + 100)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
