use crate::AppState;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::models::products::{ProductCreate, ProductResponse, ProductUpdate};
use crate::api::models::{Data, collection};
use crate::errors::Result;
use axum::{Json, extract::State, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    summary = "List products",
    responses(
        (status = 200, description = "All products, wrapped in `data`", body = Vec<ProductResponse>),
        (status = 204, description = "No products exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(State(state): State<AppState>) -> Result<Response> {
    let products = state.products().list().await?;
    Ok(collection(products.into_iter().map(ProductResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    summary = "Create product",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 409, description = "Product code already registered or unknown seller", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(create): ValidatedJson<ProductCreate>,
) -> Result<(StatusCode, Json<Data<ProductResponse>>)> {
    let product = state.products().create(create.into()).await?;
    Ok((StatusCode::CREATED, Data::new(ProductResponse::from(product))))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    summary = "Get product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Product not found", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<Data<ProductResponse>>> {
    let product = state.products().get(id).await?;
    Ok(Data::new(ProductResponse::from(product)))
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    summary = "Update product",
    request_body = ProductUpdate,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Product not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Product code already registered or unknown seller", body = crate::errors::ErrorBody),
        (status = 422, description = "Invalid request body", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<ProductUpdate>,
) -> Result<Json<Data<ProductResponse>>> {
    let product = state.products().update(id, update.into()).await?;
    Ok(Data::new(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    summary = "Delete product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id", body = crate::errors::ErrorBody),
        (status = 404, description = "Product not found", body = crate::errors::ErrorBody),
        (status = 409, description = "Product batches still reference the product", body = crate::errors::ErrorBody),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode> {
    state.products().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
