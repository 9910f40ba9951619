// src/handlers/delivery.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::order::DeliveryType,
    models::region::{StopDesk, Wilaya},
    services::delivery::DeliveryCredentials,
};

// GET /api/delivery/wilayas
#[utoipa::path(
    get,
    path = "/api/delivery/wilayas",
    tag = "Delivery",
    responses(
        (status = 200, description = "Tabela de wilayas com tarifas", body = [Wilaya])
    )
)]
pub async fn list_wilayas(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.reference.wilayas().to_vec())
}

// GET /api/delivery/wilayas/{id}/offices
#[utoipa::path(
    get,
    path = "/api/delivery/wilayas/{id}/offices",
    tag = "Delivery",
    params(
        ("id" = i64, Path, description = "Código da wilaya (1-58)")
    ),
    responses(
        (status = 200, description = "Estações de retirada; nunca vazio", body = [StopDesk])
    )
)]
pub async fn list_offices(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    Json(app_state.reference.offices_for(id))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FeeQuery {
    pub wilaya_id: i64,
    pub delivery_type: DeliveryType,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub wilaya_id: i64,
    pub delivery_type: DeliveryType,
    pub fee: i64,
}

// GET /api/delivery/fee
#[utoipa::path(
    get,
    path = "/api/delivery/fee",
    tag = "Delivery",
    params(FeeQuery),
    responses(
        (status = 200, description = "Cotação de frete; zero para wilaya desconhecida", body = FeeQuote)
    )
)]
pub async fn quote_fee(
    State(app_state): State<AppState>,
    Query(query): Query<FeeQuery>,
) -> impl IntoResponse {
    let fee = app_state
        .reference
        .delivery_fee(query.wilaya_id, query.delivery_type);
    Json(FeeQuote {
        wilaya_id: query.wilaya_id,
        delivery_type: query.delivery_type,
        fee,
    })
}

/// Presença de credenciais, sem nunca ecoar o token.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarrierConfigStatus {
    pub carrier_id: String,
    pub configured: bool,
    pub api_id: Option<String>,
}

// GET /api/delivery/config/{carrier}
#[utoipa::path(
    get,
    path = "/api/delivery/config/{carrier}",
    tag = "Delivery",
    params(
        ("carrier" = String, Path, description = "Identificador da transportadora")
    ),
    responses(
        (status = 200, description = "Estado das credenciais", body = CarrierConfigStatus)
    )
)]
pub async fn get_carrier_config(
    State(app_state): State<AppState>,
    Path(carrier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = app_state.delivery_config_repo.get_credentials(&carrier).await?;
    Ok(Json(CarrierConfigStatus {
        carrier_id: carrier,
        configured: credentials.is_some(),
        api_id: credentials.map(|c| c.api_id),
    }))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarrierConfigPayload {
    #[validate(length(min = 1, message = "required"))]
    pub api_id: String,

    #[validate(length(min = 1, message = "required"))]
    pub api_token: String,
}

// PUT /api/delivery/config/{carrier}
#[utoipa::path(
    put,
    path = "/api/delivery/config/{carrier}",
    tag = "Delivery",
    request_body = UpdateCarrierConfigPayload,
    params(
        ("carrier" = String, Path, description = "Identificador da transportadora")
    ),
    responses(
        (status = 204, description = "Credenciais gravadas")
    )
)]
pub async fn put_carrier_config(
    State(app_state): State<AppState>,
    Path(carrier): Path<String>,
    Json(payload): Json<UpdateCarrierConfigPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .delivery_config_repo
        .upsert_credentials(
            &carrier,
            &DeliveryCredentials {
                api_id: payload.api_id,
                api_token: payload.api_token,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
