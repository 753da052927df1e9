use crate::AppState;
use crate::api::extractors::{IdPath, ReportParams, ReportQuery, ValidatedJson};
use crate::api::models::sections::{SectionCreate, SectionProductsReport, SectionResponse, SectionUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/sections",
    tag = "sections",
    summary = "List sections",
    responses(
        (status = 200, description = "All sections, wrapped in `data`", body = Vec<SectionResponse>),
        (status = 204, description = "No sections exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sections(State(state): State<AppState>) -> Result<Response> {
    let sections = state.sections().list().await?;
    Ok(collection(sections.into_iter().map(SectionResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/sections",
    tag = "sections",
    summary = "Create section",
    request_body = SectionCreate,
    responses(
        (status = 201, description = "Section created", body = SectionResponse),
        (status = 409, description = "Section number already registered or unknown warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body or capacity bounds", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_section(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<SectionCreate>,
) -> Result<(StatusCode, Json<Data<SectionResponse>>)> {
    let section = state.sections().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(SectionResponse::from(section))))
}

#[utoipa::path(
    get,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Get section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section details", body = SectionResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Section not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_section(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<SectionResponse>>> {
    let section = state.sections().get(id).await?;
    Ok(Data::new(SectionResponse::from(section)))
}

#[utoipa::path(
    patch,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Update section",
    request_body = SectionUpdate,
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section updated", body = SectionResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Section not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Section number already registered or unknown warehouse", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body or capacity bounds", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_section(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<SectionUpdate>,
) -> Result<Json<Data<SectionResponse>>> {
    let section = state.sections().update(id, update.into()).await?;
    Ok(Data::new(SectionResponse::from(section)))
}

#[utoipa::path(
    delete,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Delete section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Section not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Product batches still reference the section", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_section(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.sections().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/sections/report-products",
    tag = "sections",
    summary = "Count stocked products per section",
    description = "Sums `current_quantity` over the product batches stored in each section.",
    params(ReportParams),
    responses(
        (status = 200, description = "Product counts", body = Vec<SectionProductsReport>),
        (status = 204, description = "No sections exist"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Section not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn report_products(State(state): State<AppState>, ReportQuery(id): ReportQuery) -> Result<Response> {
    let report = state.sections().report_products(id).await?;
    Ok(collection(report.into_iter().map(SectionProductsReport::from).collect()))
}
