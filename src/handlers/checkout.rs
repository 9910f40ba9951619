// src/handlers/checkout.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::order::{CheckoutRequest, Order},
};

// POST /api/checkout
#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Pedido registrado com preços do servidor", body = Order),
        (status = 400, description = "Carrinho ou cliente inválido")
    )
)]
pub async fn submit_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.checkout_service.checkout(payload).await?;

    tracing::info!(
        order_id = %order.id,
        order_number = order.order_number,
        total = order.total,
        "order received"
    );
    Ok((StatusCode::CREATED, Json(order)))
}
