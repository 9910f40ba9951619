// src/services/delivery.rs

pub mod ecotrack;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::error::AppError;
use crate::data::ReferenceData;
use crate::models::order::{DeliveryType, Order, OrderStatus};
use crate::models::region::StopDesk;

pub const CARRIER_ECOTRACK: &str = "ecotrack";

/// Status de entrega do ponto de vista da transportadora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl DeliveryStatus {
    /// Status de pedido correspondente, quando o polling deve atualizar o
    /// registro. `Shipped`/`Pending` não mudam nada.
    pub fn to_order_status(self) -> Option<OrderStatus> {
        match self {
            DeliveryStatus::Delivered => Some(OrderStatus::Delivered),
            DeliveryStatus::Returned => Some(OrderStatus::Returned),
            DeliveryStatus::Cancelled => Some(OrderStatus::Cancelled),
            DeliveryStatus::Shipped | DeliveryStatus::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCredentials {
    pub api_id: String,
    pub api_token: String,
}

/// Resultado de uma criação de remessa. `actual_delivery_type` pode divergir
/// do pedido quando o fallback office -> domicílio foi acionado; nesse caso
/// `note` explica o motivo para o operador.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentReceipt {
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,
    pub actual_delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    async fn create_order(
        &self,
        order: &Order,
        credentials: &DeliveryCredentials,
    ) -> Result<ShipmentReceipt, AppError>;

    /// Nunca falha: qualquer problema (endpoint fora, resposta estranha)
    /// vira o default seguro `Shipped`, para o polling em lote não abortar.
    async fn get_order_status(
        &self,
        tracking_number: &str,
        credentials: &DeliveryCredentials,
    ) -> DeliveryStatus;

    /// Capacidade opcional; `None` quando a transportadora não expõe a
    /// lista de desks.
    fn stop_desks(&self, _wilaya_id: i64) -> Option<Vec<StopDesk>> {
        None
    }
}

/// Registro simples transportadora -> provider.
#[derive(Clone)]
pub struct DeliveryRegistry {
    providers: HashMap<&'static str, Arc<dyn DeliveryProvider>>,
}

impl DeliveryRegistry {
    pub fn new(reference: Arc<ReferenceData>, ecotrack_base_url: String) -> Self {
        let mut providers: HashMap<&'static str, Arc<dyn DeliveryProvider>> = HashMap::new();
        let ecotrack = Arc::new(ecotrack::EcotrackProvider::new(reference, ecotrack_base_url));
        providers.insert(CARRIER_ECOTRACK, ecotrack);
        Self { providers }
    }

    pub fn get(&self, carrier_id: &str) -> Option<Arc<dyn DeliveryProvider>> {
        self.providers.get(carrier_id).cloned()
    }
}
