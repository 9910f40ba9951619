// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::order::{DeliveryType, Order, OrderStatus},
    services::delivery::CARRIER_ECOTRACK,
    services::shipping::RefreshSummary,
};

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Todos os pedidos, mais recentes primeiro", body = [Order])
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_repo.list_orders().await?;
    Ok(Json(orders))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    ),
    responses(
        (status = 200, description = "Detalhe do pedido", body = Order),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_repo
        .get_order(id)
        .await?
        .ok_or(AppError::OrderNotFound)?;
    Ok(Json(order))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    #[schema(example = "confirmed")]
    pub status: OrderStatus,
}

// PATCH /api/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    request_body = UpdateStatusPayload,
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    ),
    responses(
        (status = 200, description = "Status atualizado", body = Order),
        (status = 409, description = "Transição não permitida")
    )
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .shipping_service
        .transition_order(id, payload.status)
        .await?;
    Ok(Json(order))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipOrderPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "ecotrack")]
    pub carrier: String,

    #[validate(length(min = 1, message = "required"))]
    pub tracking_number: String,

    /// Tipo de entrega efetivo, quando difere do escolhido no checkout.
    pub delivery_type: Option<DeliveryType>,
}

// POST /api/orders/{id}/ship
#[utoipa::path(
    post,
    path = "/api/orders/{id}/ship",
    tag = "Orders",
    request_body = ShipOrderPayload,
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    ),
    responses(
        (status = 200, description = "Rastreamento atribuído manualmente", body = Order),
        (status = 409, description = "Pedido não está confirmado")
    )
)]
pub async fn ship_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShipOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .shipping_service
        .ship_order(
            id,
            &payload.carrier,
            &payload.tracking_number,
            payload.delivery_type,
        )
        .await?;
    Ok(Json(order))
}

fn default_carrier() -> String {
    CARRIER_ECOTRACK.to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncOrderPayload {
    #[serde(default = "default_carrier")]
    #[schema(example = "ecotrack")]
    pub carrier: String,

    /// Refaz a sincronização mesmo com rastreamento já gravado.
    #[serde(default)]
    pub force: bool,
}

// POST /api/orders/{id}/sync
#[utoipa::path(
    post,
    path = "/api/orders/{id}/sync",
    tag = "Orders",
    request_body = SyncOrderPayload,
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    ),
    responses(
        (status = 200, description = "Remessa criada na transportadora", body = Order),
        (status = 409, description = "Pedido já sincronizado"),
        (status = 424, description = "Transportadora sem credenciais"),
        (status = 422, description = "Transportadora recusou os dados")
    )
)]
pub async fn sync_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SyncOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .shipping_service
        .sync_order(id, &payload.carrier, payload.force)
        .await?;
    Ok(Json(order))
}

// POST /api/orders/refresh-statuses
#[utoipa::path(
    post,
    path = "/api/orders/refresh-statuses",
    tag = "Orders",
    responses(
        (status = 200, description = "Resumo da rodada de polling", body = RefreshSummary)
    )
)]
pub async fn refresh_statuses(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.shipping_service.refresh_statuses().await?;
    tracing::info!(
        checked = summary.checked,
        updated = summary.updated,
        failed = summary.failed,
        "carrier status refresh finished"
    );
    Ok(Json(summary))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    ),
    responses(
        (status = 204, description = "Pedido removido"),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.order_repo.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
