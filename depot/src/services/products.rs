//! Product rules: unique product codes and an existing seller.

use crate::db::{
    handlers::{Products, Repository},
    models::products::{ProductCreateDBRequest, ProductDBResponse, ProductUpdateDBRequest},
};
use crate::errors::Result;
use crate::services::{already_exists, classify_delete, classify_write, db_error, not_found};
use crate::types::ProductId;
use sqlx::PgPool;

const RESOURCE: &str = "Product";

#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

impl ProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ProductDBResponse>> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Ok(Products::new(&mut conn).list().await?)
    }

    pub async fn get(&self, id: ProductId) -> Result<ProductDBResponse> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        Products::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, id))
    }

    pub async fn create(&self, request: ProductCreateDBRequest) -> Result<ProductDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Products::new(&mut tx);

        if repo.exists(&request.product_code).await? {
            return Err(already_exists(RESOURCE, "product_code", &request.product_code));
        }
        let product = repo.create(&request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, request: ProductUpdateDBRequest) -> Result<ProductDBResponse> {
        let mut tx = self.db.begin().await.map_err(db_error)?;
        let mut repo = Products::new(&mut tx);

        let current = repo.get_by_id(id).await?.ok_or_else(|| not_found(RESOURCE, id))?;
        if let Some(code) = &request.product_code
            && *code != current.product_code
            && repo.exists(code).await?
        {
            return Err(already_exists(RESOURCE, "product_code", code));
        }
        let product = repo.update(id, &request).await.map_err(|e| classify_write(RESOURCE, e))?;

        tx.commit().await.map_err(db_error)?;
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> Result<()> {
        let mut conn = self.db.acquire().await.map_err(db_error)?;
        let deleted = Products::new(&mut conn)
            .delete(id)
            .await
            .map_err(|e| classify_delete(RESOURCE, id, e))?;

        if deleted { Ok(()) } else { Err(not_found(RESOURCE, id)) }
    }
}
