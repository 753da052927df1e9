//! # depot: warehouse inventory API
//!
//! `depot` is a REST service over PostgreSQL that tracks the physical side of a distribution
//! business: where things are stored, who supplies them, who moves them and who buys them.
//!
//! ## Resources
//!
//! - **Localities** hold sellers and carriers and report how many of each they have.
//! - **Warehouses** are split into **sections** with capacity and temperature limits.
//! - **Products** belong to sellers; stock arrives as **product batches** stored in sections.
//! - **Employees** work in a warehouse and register **inbound orders** of batches.
//! - **Buyers** place **purchase orders**.
//!
//! Every resource is served under `/api/v1` with list, create, get, update and delete
//! operations. Count reports live next to their parent resource, e.g.
//! `GET /api/v1/sections/report-products?id=3`.
//!
//! ## Architecture
//!
//! Requests flow through three layers:
//!
//! 1. [`api::handlers`] bind and validate the request, then call a service.
//! 2. [`services`] own the rules: natural-key uniqueness, capacity and quantity checks, and
//!    the mapping of constraint violations onto [`errors::Error`]. Writes run in a transaction.
//! 3. [`db::handlers`] repositories issue the SQL.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use depot::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = depot::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     depot::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//! }
//! ```
//!
//! Migrations run on startup. They can also be applied directly:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::migrate::MigrateError> {
//! depot::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod services;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;
use crate::services::{
    BatchService, BuyerService, CarrierService, EmployeeService, InboundOrderService, LocalityService, ProductService,
    PurchaseOrderService, SectionService, SellerService, WarehouseService,
};
use api::handlers;
use axum::http::HeaderValue;
use axum::{Json, Router, http, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Services are cheap to build (they hold a clone of the pool), so handlers ask for a fresh
/// one per request through the accessors below.
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// let sellers = state.sellers().list().await?;
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

impl AppState {
    pub fn localities(&self) -> LocalityService {
        LocalityService::new(self.db.clone())
    }

    pub fn sellers(&self) -> SellerService {
        SellerService::new(self.db.clone())
    }

    pub fn carriers(&self) -> CarrierService {
        CarrierService::new(self.db.clone())
    }

    pub fn warehouses(&self) -> WarehouseService {
        WarehouseService::new(self.db.clone())
    }

    pub fn sections(&self) -> SectionService {
        SectionService::new(self.db.clone())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.db.clone())
    }

    pub fn batches(&self) -> BatchService {
        BatchService::new(self.db.clone())
    }

    pub fn employees(&self) -> EmployeeService {
        EmployeeService::new(self.db.clone())
    }

    pub fn inbound_orders(&self) -> InboundOrderService {
        InboundOrderService::new(self.db.clone())
    }

    pub fn buyers(&self) -> BuyerService {
        BuyerService::new(self.db.clone())
    }

    pub fn purchase_orders(&self) -> PurchaseOrderService {
        PurchaseOrderService::new(self.db.clone())
    }
}

/// Get the depot database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect the pool described by the config and bring the schema up to date.
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;
    let options = PgConnectOptions::from_str(&config.database.url)?.log_slow_statements(
        log::LevelFilter::Warn,
        Duration::from_millis(config.slow_statement_threshold_ms),
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect_with(options)
        .await?;

    migrator().run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let allow_origin = if config.cors.allowed_origins.contains(&CorsOrigin::Wildcard) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::DELETE,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(config.cors.allow_credentials)
        .expose_headers(vec![http::header::LOCATION]);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Localities
        .route("/localities", get(handlers::localities::list_localities).post(handlers::localities::create_locality))
        .route("/localities/report-sellers", get(handlers::localities::report_sellers))
        .route("/localities/report-carriers", get(handlers::localities::report_carriers))
        .route(
            "/localities/{id}",
            get(handlers::localities::get_locality)
                .patch(handlers::localities::update_locality)
                .delete(handlers::localities::delete_locality),
        )
        // Sellers
        .route("/sellers", get(handlers::sellers::list_sellers).post(handlers::sellers::create_seller))
        .route(
            "/sellers/{id}",
            get(handlers::sellers::get_seller)
                .patch(handlers::sellers::update_seller)
                .delete(handlers::sellers::delete_seller),
        )
        // Carriers
        .route("/carriers", get(handlers::carriers::list_carriers).post(handlers::carriers::create_carrier))
        .route(
            "/carriers/{id}",
            get(handlers::carriers::get_carrier)
                .patch(handlers::carriers::update_carrier)
                .delete(handlers::carriers::delete_carrier),
        )
        // Warehouses
        .route("/warehouses", get(handlers::warehouses::list_warehouses).post(handlers::warehouses::create_warehouse))
        .route(
            "/warehouses/{id}",
            get(handlers::warehouses::get_warehouse)
                .patch(handlers::warehouses::update_warehouse)
                .delete(handlers::warehouses::delete_warehouse),
        )
        // Sections
        .route("/sections", get(handlers::sections::list_sections).post(handlers::sections::create_section))
        .route("/sections/report-products", get(handlers::sections::report_products))
        .route(
            "/sections/{id}",
            get(handlers::sections::get_section)
                .patch(handlers::sections::update_section)
                .delete(handlers::sections::delete_section),
        )
        // Products
        .route("/products", get(handlers::products::list_products).post(handlers::products::create_product))
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        // Product batches
        .route("/product-batches", get(handlers::batches::list_batches).post(handlers::batches::create_batch))
        .route(
            "/product-batches/{id}",
            get(handlers::batches::get_batch)
                .patch(handlers::batches::update_batch)
                .delete(handlers::batches::delete_batch),
        )
        // Employees
        .route("/employees", get(handlers::employees::list_employees).post(handlers::employees::create_employee))
        .route("/employees/report-inbound-orders", get(handlers::employees::report_inbound_orders))
        .route(
            "/employees/{id}",
            get(handlers::employees::get_employee)
                .patch(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        // Inbound orders
        .route(
            "/inbound-orders",
            get(handlers::inbound_orders::list_inbound_orders).post(handlers::inbound_orders::create_inbound_order),
        )
        .route(
            "/inbound-orders/{id}",
            get(handlers::inbound_orders::get_inbound_order)
                .patch(handlers::inbound_orders::update_inbound_order)
                .delete(handlers::inbound_orders::delete_inbound_order),
        )
        // Buyers
        .route("/buyers", get(handlers::buyers::list_buyers).post(handlers::buyers::create_buyer))
        .route("/buyers/report-purchase-orders", get(handlers::buyers::report_purchase_orders))
        .route(
            "/buyers/{id}",
            get(handlers::buyers::get_buyer)
                .patch(handlers::buyers::update_buyer)
                .delete(handlers::buyers::delete_buyer),
        )
        // Purchase orders
        .route(
            "/purchase-orders",
            get(handlers::purchase_orders::list_purchase_orders).post(handlers::purchase_orders::create_purchase_order),
        )
        .route(
            "/purchase-orders/{id}",
            get(handlers::purchase_orders::get_purchase_order)
                .patch(handlers::purchase_orders::update_purchase_order)
                .delete(handlers::purchase_orders::delete_purchase_order),
        )
}

/// Build the application router.
///
/// Mounts the resource routes under `/api/v1`, the OpenAPI document and its Scalar
/// rendering, `/healthz`, and `/internal/metrics` when metrics are enabled. CORS and
/// request tracing wrap everything.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/v1", api_routes().with_state(state.clone()))
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;
    let mut router = router.layer(cors_layer);

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// A configured server: pool connected, migrations applied, router built.
///
/// ```ignore
/// let app = Application::new(config).await?;
/// app.serve(shutdown_signal()).await?;
/// ```
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting depot with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;
        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(&state)?;

        Ok(Self { router, config, pool })
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Serve until `shutdown` resolves, then close the pool and flush telemetry.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Depot listening on http://{}, docs at http://localhost:{}/api/docs",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
