//! Fixtures for handler and repository tests.
//!
//! Records are inserted through the repositories directly, bypassing the services, so a
//! test can set up state that the API itself would reject.

use crate::config::{Config, PoolSettings};
use crate::db::handlers::{
    Batches, Buyers, Carriers, Employees, InboundOrders, Localities, Products, PurchaseOrders, Repository, Sections, Sellers,
    Warehouses,
};
use crate::db::models::{
    batches::{BatchCreateDBRequest, BatchDBResponse},
    buyers::{BuyerCreateDBRequest, BuyerDBResponse},
    carriers::{CarrierCreateDBRequest, CarrierDBResponse},
    employees::{EmployeeCreateDBRequest, EmployeeDBResponse},
    inbound_orders::{InboundOrderCreateDBRequest, InboundOrderDBResponse},
    localities::{LocalityCreateDBRequest, LocalityDBResponse},
    products::{ProductCreateDBRequest, ProductDBResponse},
    purchase_orders::{PurchaseOrderCreateDBRequest, PurchaseOrderDBResponse},
    sections::{SectionCreateDBRequest, SectionDBResponse},
    sellers::{SellerCreateDBRequest, SellerDBResponse},
    warehouses::{WarehouseCreateDBRequest, WarehouseDBResponse},
};
use crate::types::{BuyerId, LocalityId, ProductId, SectionId, WarehouseId};
use crate::{AppState, build_router};
use axum_test::TestServer;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub fn create_test_config() -> Config {
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    };
    config.database.pool = PoolSettings {
        max_connections: 2,
        min_connections: 0,
        ..Default::default()
    };
    config
}

pub fn create_test_app(pool: PgPool) -> TestServer {
    let state = AppState::builder().db(pool).config(create_test_config()).build();
    let router = build_router(&state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

/// App over a pool that never connects, for requests rejected before any query runs.
pub fn create_lazy_test_app() -> TestServer {
    let config = create_test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("Failed to create lazy pool");
    create_test_app(pool)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

async fn next_value(pool: &PgPool, table: &str, column: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(&format!("SELECT COALESCE(MAX({column}), 0) + 1 FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to compute next value")
}

pub async fn create_test_locality(pool: &PgPool, zip_code: &str) -> LocalityDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Localities::new(&mut conn)
        .create(&LocalityCreateDBRequest {
            zip_code: zip_code.to_string(),
            locality_name: format!("Locality {zip_code}"),
            province_name: "Buenos Aires".to_string(),
            country_name: "Argentina".to_string(),
        })
        .await
        .expect("Failed to create test locality")
}

pub async fn create_test_seller(pool: &PgPool, cid: i32, locality_id: LocalityId) -> SellerDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Sellers::new(&mut conn)
        .create(&SellerCreateDBRequest {
            cid,
            company_name: format!("Seller {cid}"),
            address: "Av. Siempre Viva 742".to_string(),
            telephone: "555-0100".to_string(),
            locality_id: Some(locality_id),
        })
        .await
        .expect("Failed to create test seller")
}

pub async fn create_test_carrier(pool: &PgPool, cid: &str, locality_id: LocalityId) -> CarrierDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Carriers::new(&mut conn)
        .create(&CarrierCreateDBRequest {
            cid: cid.to_string(),
            company_name: format!("Carrier {cid}"),
            address: "Ruta 5 km 60".to_string(),
            telephone: "555-0200".to_string(),
            locality_id,
        })
        .await
        .expect("Failed to create test carrier")
}

pub async fn create_test_warehouse(pool: &PgPool, warehouse_code: &str) -> WarehouseDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Warehouses::new(&mut conn)
        .create(&WarehouseCreateDBRequest {
            warehouse_code: warehouse_code.to_string(),
            address: "Calle Falsa 123".to_string(),
            telephone: "555-0300".to_string(),
            minimum_capacity: 10,
            minimum_temperature: -5.0,
        })
        .await
        .expect("Failed to create test warehouse")
}

/// Creates a section in a warehouse of its own (current 10, minimum 5, maximum 50).
pub async fn create_test_section(pool: &PgPool, section_number: i32) -> SectionDBResponse {
    let warehouse = create_test_warehouse(pool, &format!("WH-SEC-{section_number}")).await;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Sections::new(&mut conn)
        .create(&SectionCreateDBRequest {
            section_number,
            current_temperature: 2.0,
            minimum_temperature: -10.0,
            current_capacity: 10,
            minimum_capacity: 5,
            maximum_capacity: 50,
            warehouse_id: warehouse.id,
            product_type_id: 1,
        })
        .await
        .expect("Failed to create test section")
}

/// Creates a product sold by a fresh seller in a fresh locality.
pub async fn create_test_product(pool: &PgPool, product_code: &str) -> ProductDBResponse {
    let locality = create_test_locality(pool, &format!("ZIP-{product_code}")).await;
    let cid = next_value(pool, "sellers", "cid").await;
    let seller = create_test_seller(pool, cid, locality.id).await;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Products::new(&mut conn)
        .create(&ProductCreateDBRequest {
            product_code: product_code.to_string(),
            description: format!("Product {product_code}"),
            width: 1.5,
            height: 2.0,
            length: 3.0,
            net_weight: 4.2,
            expiration_rate: 0.5,
            recommended_freezing_temperature: -18.0,
            freezing_rate: 1.0,
            product_type_id: 1,
            seller_id: seller.id,
        })
        .await
        .expect("Failed to create test product")
}

pub async fn create_test_batch(
    pool: &PgPool,
    batch_number: i32,
    product_id: ProductId,
    section_id: SectionId,
    current_quantity: i32,
) -> BatchDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Batches::new(&mut conn)
        .create(&BatchCreateDBRequest {
            batch_number,
            current_quantity,
            initial_quantity: current_quantity,
            current_temperature: -2.0,
            minimum_temperature: -8.0,
            due_date: date(2025, 12, 31),
            manufacturing_date: date(2025, 1, 15),
            manufacturing_hour: 9,
            product_id,
            section_id,
        })
        .await
        .expect("Failed to create test batch")
}

pub async fn create_test_employee(pool: &PgPool, card_number_id: &str, warehouse_id: WarehouseId) -> EmployeeDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Employees::new(&mut conn)
        .create(&EmployeeCreateDBRequest {
            card_number_id: card_number_id.to_string(),
            first_name: "Juana".to_string(),
            last_name: "Azurduy".to_string(),
            warehouse_id,
        })
        .await
        .expect("Failed to create test employee")
}

/// Creates an order with the whole chain behind it: warehouse, employee, section, product and batch.
pub async fn create_test_inbound_order(pool: &PgPool, order_number: &str) -> InboundOrderDBResponse {
    let warehouse = create_test_warehouse(pool, &format!("WH-{order_number}")).await;
    let employee = create_test_employee(pool, &format!("EMP-{order_number}"), warehouse.id).await;
    let section_number = next_value(pool, "sections", "section_number").await;
    let section = create_test_section(pool, section_number).await;
    let product = create_test_product(pool, &format!("PRD-{order_number}")).await;
    let batch_number = next_value(pool, "product_batches", "batch_number").await;
    let batch = create_test_batch(pool, batch_number, product.id, section.id, 20).await;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    InboundOrders::new(&mut conn)
        .create(&InboundOrderCreateDBRequest {
            order_number: order_number.to_string(),
            order_date: date(2025, 3, 1),
            employee_id: employee.id,
            product_batch_id: batch.id,
            warehouse_id: warehouse.id,
        })
        .await
        .expect("Failed to create test inbound order")
}

pub async fn create_test_buyer(pool: &PgPool, card_number_id: &str) -> BuyerDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Buyers::new(&mut conn)
        .create(&BuyerCreateDBRequest {
            card_number_id: card_number_id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        })
        .await
        .expect("Failed to create test buyer")
}

pub async fn create_test_purchase_order(pool: &PgPool, order_number: &str, buyer_id: BuyerId) -> PurchaseOrderDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    PurchaseOrders::new(&mut conn)
        .create(&PurchaseOrderCreateDBRequest {
            order_number: order_number.to_string(),
            order_date: date(2025, 3, 2),
            tracking_code: format!("TRK-{order_number}"),
            buyer_id,
            product_record_id: 1,
            order_status_id: 1,
        })
        .await
        .expect("Failed to create test purchase order")
}
