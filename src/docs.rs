// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Checkout ---
        handlers::checkout::submit_order,

        // --- Delivery ---
        handlers::delivery::list_wilayas,
        handlers::delivery::list_offices,
        handlers::delivery::quote_fee,
        handlers::delivery::get_carrier_config,
        handlers::delivery::put_carrier_config,

        // --- Orders ---
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_status,
        handlers::orders::ship_order,
        handlers::orders::sync_order,
        handlers::orders::refresh_statuses,
        handlers::orders::delete_order,
    ),
    components(
        schemas(
            // --- Catálogo ---
            models::catalog::QuantityDiscount,
            models::catalog::ProductSize,

            // --- Regiões ---
            models::region::Wilaya,
            models::region::StopDesk,

            // --- Pedidos ---
            models::order::DeliveryType,
            models::order::OrderStatus,
            models::order::Customer,
            models::order::CartLine,
            models::order::Order,
            models::order::CheckoutCustomer,
            models::order::CheckoutItem,
            models::order::CheckoutRequest,

            // --- Entrega ---
            services::delivery::DeliveryStatus,
            services::delivery::DeliveryCredentials,
            services::delivery::ShipmentReceipt,
            services::shipping::RefreshSummary,

            // --- Payloads ---
            handlers::delivery::FeeQuote,
            handlers::delivery::CarrierConfigStatus,
            handlers::delivery::UpdateCarrierConfigPayload,
            handlers::orders::UpdateStatusPayload,
            handlers::orders::ShipOrderPayload,
            handlers::orders::SyncOrderPayload,
        )
    ),
    tags(
        (name = "Checkout", description = "Checkout da vitrine"),
        (name = "Delivery", description = "Wilayas, estações de retirada e credenciais"),
        (name = "Orders", description = "Gestão administrativa de pedidos")
    ),
    info(
        title = "Parfum Backend API",
        description = "Precificação de pedidos e expedição via transportadora",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
