// src/services/shipping.rs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::{DeliveryConfigRepository, OrderRepository};
use crate::models::order::{DeliveryType, Order, OrderStatus};
use crate::services::delivery::DeliveryRegistry;

/// Resultado de uma rodada de sincronização de status com as transportadoras.
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub checked: u32,
    pub updated: u32,
    pub failed: u32,
}

/// Guarda de sincronização. Sem `force`, um rastreamento existente bloqueia
/// o reenvio; com `force`, um pedido já expedido pode ser recriado na
/// transportadora (o rastreamento antigo é substituído). Fora esse caso, a
/// máquina de estados decide.
fn ensure_syncable(order: &Order, force: bool) -> Result<(), AppError> {
    if let Some(tracking) = &order.tracking_number {
        if !force {
            return Err(AppError::AlreadySynced(tracking.clone()));
        }
        if order.status == OrderStatus::Shipped {
            return Ok(());
        }
    }
    order.status.ensure_transition(OrderStatus::Shipped)
}

/// Expedição de pedidos: criação da remessa na transportadora, atribuição
/// manual de rastreamento e o polling periódico de status.
#[derive(Clone)]
pub struct ShippingService {
    orders: OrderRepository,
    config: DeliveryConfigRepository,
    registry: DeliveryRegistry,
}

impl ShippingService {
    pub fn new(
        orders: OrderRepository,
        config: DeliveryConfigRepository,
        registry: DeliveryRegistry,
    ) -> Self {
        Self { orders, config, registry }
    }

    /// Cria o pedido na transportadora e grava o rastreamento retornado.
    /// Idempotente: um pedido já sincronizado é recusado, salvo `force`.
    pub async fn sync_order(
        &self,
        id: Uuid,
        carrier_id: &str,
        force: bool,
    ) -> Result<Order, AppError> {
        let order = self
            .orders
            .get_order(id)
            .await?
            .ok_or(AppError::OrderNotFound)?;
        ensure_syncable(&order, force)?;

        let provider = self
            .registry
            .get(carrier_id)
            .ok_or_else(|| AppError::UnknownCarrier(carrier_id.to_string()))?;
        let credentials = self
            .config
            .get_credentials(provider.id())
            .await?
            .ok_or_else(|| AppError::CarrierNotConfigured(carrier_id.to_string()))?;

        let receipt = provider.create_order(&order, &credentials).await?;
        if let Some(note) = &receipt.note {
            tracing::warn!(order_id = %id, note, "carrier changed the delivery type");
        }

        self.orders
            .assign_shipment(
                id,
                provider.id(),
                &receipt.tracking_number,
                receipt.actual_delivery_type,
                OrderStatus::Shipped,
            )
            .await
    }

    /// Atribuição manual de transportadora e rastreamento, para remessas
    /// criadas fora do sistema. Não chama nenhuma API externa.
    pub async fn ship_order(
        &self,
        id: Uuid,
        carrier: &str,
        tracking_number: &str,
        delivery_type: Option<DeliveryType>,
    ) -> Result<Order, AppError> {
        let order = self
            .orders
            .get_order(id)
            .await?
            .ok_or(AppError::OrderNotFound)?;
        order.status.ensure_transition(OrderStatus::Shipped)?;

        self.orders
            .assign_shipment(
                id,
                carrier,
                tracking_number,
                delivery_type.unwrap_or(order.delivery_type),
                OrderStatus::Shipped,
            )
            .await
    }

    /// Transição de status guardada pela máquina de estados do pedido.
    pub async fn transition_order(
        &self,
        id: Uuid,
        next: OrderStatus,
    ) -> Result<Order, AppError> {
        let order = self
            .orders
            .get_order(id)
            .await?
            .ok_or(AppError::OrderNotFound)?;
        order.status.ensure_transition(next)?;
        self.orders.update_status(id, next).await
    }

    /// Consulta a transportadora para cada pedido expedido e aplica as
    /// transições terminais. Falhas são isoladas por pedido.
    pub async fn refresh_statuses(&self) -> Result<RefreshSummary, AppError> {
        let mut summary = RefreshSummary::default();

        for order in self.orders.list_orders().await? {
            if order.status != OrderStatus::Shipped {
                continue;
            }
            let (Some(carrier), Some(tracking)) = (&order.carrier, &order.tracking_number) else {
                continue;
            };
            let Some(provider) = self.registry.get(carrier) else {
                continue;
            };

            summary.checked += 1;
            let credentials = match self.config.get_credentials(provider.id()).await {
                Ok(Some(credentials)) => credentials,
                Ok(None) => {
                    summary.failed += 1;
                    continue;
                }
                Err(err) => {
                    tracing::error!(order_id = %order.id, error = %err, "credential lookup failed");
                    summary.failed += 1;
                    continue;
                }
            };

            let status = provider.get_order_status(tracking, &credentials).await;
            let Some(next) = status.to_order_status() else {
                continue;
            };
            if !order.status.can_transition(next) {
                continue;
            }
            match self.orders.update_status(order.id, next).await {
                Ok(_) => summary.updated += 1,
                Err(err) => {
                    tracing::error!(order_id = %order.id, error = %err, "status update failed");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{CartLine, Customer};
    use chrono::Utc;
    use uuid::Uuid;

    fn order(status: OrderStatus, tracking: Option<&str>) -> Order {
        Order {
            id: Uuid::new_v4(),
            order_number: 7,
            customer: Customer {
                full_name: "AMINE BENALI".into(),
                phone: "0555667788".into(),
                address: "12 rue Didouche Mourad".into(),
                wilaya: "Alger".into(),
                wilaya_id: Some(16),
                commune: "Kouba".into(),
            },
            items: vec![CartLine {
                product_id: "p1".into(),
                name: "Oud Royal".into(),
                selected_size: Some("50ml".into()),
                quantity: 1,
                unit_price: 1000,
                line_total: 1000,
            }],
            total: 1450,
            delivery_fee: 450,
            delivery_type: DeliveryType::Domicile,
            stop_desk: None,
            status,
            carrier: tracking.map(|_| "ecotrack".to_string()),
            tracking_number: tracking.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn confirmed_order_without_tracking_is_syncable() {
        assert!(ensure_syncable(&order(OrderStatus::Confirmed, None), false).is_ok());
    }

    #[test]
    fn existing_tracking_blocks_sync_without_force() {
        let err = ensure_syncable(&order(OrderStatus::Shipped, Some("ECO-1")), false)
            .unwrap_err();
        match err {
            AppError::AlreadySynced(tracking) => assert_eq!(tracking, "ECO-1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn force_allows_resync_of_a_shipped_order() {
        // O reenvio forçado substitui o rastreamento de um pedido já
        // expedido; a transição shipped -> shipped não se aplica aqui.
        assert!(ensure_syncable(&order(OrderStatus::Shipped, Some("ECO-1")), true).is_ok());
    }

    #[test]
    fn force_does_not_override_the_state_machine_elsewhere() {
        assert!(ensure_syncable(&order(OrderStatus::Pending, None), true).is_err());
        assert!(ensure_syncable(&order(OrderStatus::Delivered, Some("ECO-1")), true).is_err());
        assert!(ensure_syncable(&order(OrderStatus::Cancelled, None), false).is_err());
    }
}
