//! OpenAPI document for the `/api/v1` surface.
//!
//! Served as JSON at `/api-docs/openapi.json` and rendered with Scalar at `/api/docs`.

use utoipa::OpenApi;

use crate::api;
use crate::errors::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    servers((url = "/api/v1", description = "Depot API")),
    paths(
        api::handlers::localities::list_localities,
        api::handlers::localities::create_locality,
        api::handlers::localities::get_locality,
        api::handlers::localities::update_locality,
        api::handlers::localities::delete_locality,
        api::handlers::localities::report_sellers,
        api::handlers::localities::report_carriers,
        api::handlers::sellers::list_sellers,
        api::handlers::sellers::create_seller,
        api::handlers::sellers::get_seller,
        api::handlers::sellers::update_seller,
        api::handlers::sellers::delete_seller,
        api::handlers::carriers::list_carriers,
        api::handlers::carriers::create_carrier,
        api::handlers::carriers::get_carrier,
        api::handlers::carriers::update_carrier,
        api::handlers::carriers::delete_carrier,
        api::handlers::warehouses::list_warehouses,
        api::handlers::warehouses::create_warehouse,
        api::handlers::warehouses::get_warehouse,
        api::handlers::warehouses::update_warehouse,
        api::handlers::warehouses::delete_warehouse,
        api::handlers::sections::list_sections,
        api::handlers::sections::create_section,
        api::handlers::sections::get_section,
        api::handlers::sections::update_section,
        api::handlers::sections::delete_section,
        api::handlers::sections::report_products,
        api::handlers::products::list_products,
        api::handlers::products::create_product,
        api::handlers::products::get_product,
        api::handlers::products::update_product,
        api::handlers::products::delete_product,
        api::handlers::batches::list_batches,
        api::handlers::batches::create_batch,
        api::handlers::batches::get_batch,
        api::handlers::batches::update_batch,
        api::handlers::batches::delete_batch,
        api::handlers::employees::list_employees,
        api::handlers::employees::create_employee,
        api::handlers::employees::get_employee,
        api::handlers::employees::update_employee,
        api::handlers::employees::delete_employee,
        api::handlers::employees::report_inbound_orders,
        api::handlers::inbound_orders::list_inbound_orders,
        api::handlers::inbound_orders::create_inbound_order,
        api::handlers::inbound_orders::get_inbound_order,
        api::handlers::inbound_orders::update_inbound_order,
        api::handlers::inbound_orders::delete_inbound_order,
        api::handlers::buyers::list_buyers,
        api::handlers::buyers::create_buyer,
        api::handlers::buyers::get_buyer,
        api::handlers::buyers::update_buyer,
        api::handlers::buyers::delete_buyer,
        api::handlers::buyers::report_purchase_orders,
        api::handlers::purchase_orders::list_purchase_orders,
        api::handlers::purchase_orders::create_purchase_order,
        api::handlers::purchase_orders::get_purchase_order,
        api::handlers::purchase_orders::update_purchase_order,
        api::handlers::purchase_orders::delete_purchase_order,
    ),
    components(
        schemas(
            ErrorBody,
            api::models::localities::LocalityCreate,
            api::models::localities::LocalityUpdate,
            api::models::localities::LocalityResponse,
            api::models::localities::LocalitySellersReport,
            api::models::localities::LocalityCarriersReport,
            api::models::sellers::SellerCreate,
            api::models::sellers::SellerUpdate,
            api::models::sellers::SellerResponse,
            api::models::carriers::CarrierCreate,
            api::models::carriers::CarrierUpdate,
            api::models::carriers::CarrierResponse,
            api::models::warehouses::WarehouseCreate,
            api::models::warehouses::WarehouseUpdate,
            api::models::warehouses::WarehouseResponse,
            api::models::sections::SectionCreate,
            api::models::sections::SectionUpdate,
            api::models::sections::SectionResponse,
            api::models::sections::SectionProductsReport,
            api::models::products::ProductCreate,
            api::models::products::ProductUpdate,
            api::models::products::ProductResponse,
            api::models::batches::BatchCreate,
            api::models::batches::BatchUpdate,
            api::models::batches::BatchResponse,
            api::models::employees::EmployeeCreate,
            api::models::employees::EmployeeUpdate,
            api::models::employees::EmployeeResponse,
            api::models::employees::EmployeeInboundOrdersReport,
            api::models::inbound_orders::InboundOrderCreate,
            api::models::inbound_orders::InboundOrderUpdate,
            api::models::inbound_orders::InboundOrderResponse,
            api::models::buyers::BuyerCreate,
            api::models::buyers::BuyerUpdate,
            api::models::buyers::BuyerResponse,
            api::models::buyers::BuyerPurchaseOrdersReport,
            api::models::purchase_orders::PurchaseOrderCreate,
            api::models::purchase_orders::PurchaseOrderUpdate,
            api::models::purchase_orders::PurchaseOrderResponse,
        )
    ),
    tags(
        (name = "localities", description = "Postal localities and the per-locality seller and carrier counts."),
        (name = "sellers", description = "Companies supplying products, each based in a locality."),
        (name = "carriers", description = "Transport companies, each based in a locality."),
        (name = "warehouses", description = "Physical storage sites."),
        (name = "sections", description = "Temperature-controlled areas of a warehouse with capacity limits."),
        (name = "products", description = "Catalogue of products sold by sellers."),
        (name = "product-batches", description = "Stock of a product received into a section."),
        (name = "employees", description = "Warehouse staff and their inbound order counts."),
        (name = "inbound-orders", description = "Receipts of product batches into a warehouse."),
        (name = "buyers", description = "Customers and their purchase order counts."),
        (name = "purchase-orders", description = "Orders placed by buyers."),
    ),
    info(
        title = "Depot API",
        version = "1.0.0",
        description = "Warehouse inventory API.

## Responses

Successful bodies are wrapped in a `data` envelope. Listing an empty collection returns `204 No Content`.

## Errors

Errors carry a snake-cased `code` and a human readable `message`:

```json
{
  \"code\": \"not_found\",
  \"message\": \"Seller with ID 7 not found\"
}
```",
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/localities",
            "/localities/report-sellers",
            "/localities/report-carriers",
            "/sellers/{id}",
            "/carriers/{id}",
            "/warehouses/{id}",
            "/sections/report-products",
            "/products/{id}",
            "/product-batches/{id}",
            "/employees/report-inbound-orders",
            "/inbound-orders/{id}",
            "/buyers/report-purchase-orders",
            "/purchase-orders/{id}",
        ] {
            assert!(paths.iter().any(|p| *p == expected), "missing path {expected}");
        }
    }

    #[test]
    fn test_error_body_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ErrorBody"));
        assert!(components.schemas.contains_key("SectionProductsReport"));
    }
}
