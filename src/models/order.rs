// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::models::catalog::ProductSize;
use crate::models::region::StopDesk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Office,
    Domicile,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Office => "office",
            DeliveryType::Domicile => "domicile",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "office" => Some(DeliveryType::Office),
            "domicile" => Some(DeliveryType::Domicile),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            "returned" => Some(OrderStatus::Returned),
            _ => None,
        }
    }

    /// Grafo de transições permitido. O "confirmed -> pending" é o desfazer
    /// explícito do operador; depois de "shipped" só a transportadora (ou um
    /// override do admin) decide o desfecho.
    pub fn can_transition(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Pending)
                | (Confirmed, Shipped)
                | (Shipped, Delivered)
                | (Shipped, Returned)
                | (Shipped, Cancelled)
        )
    }

    pub fn ensure_transition(&self, next: OrderStatus) -> Result<(), AppError> {
        if self.can_transition(next) {
            Ok(())
        } else {
            Err(AppError::InvalidStatusTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

/// Bloco do cliente, desnormalizado no pedido (nome da wilaya incluso).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub wilaya: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wilaya_id: Option<i64>,
    pub commune: String,
}

/// Linha do carrinho como persistida: preço unitário resolvido e total da
/// linha já com desconto. O invariante `total = Σ line_total + delivery_fee`
/// depende de `line_total` ser gravado, não recalculado.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    pub quantity: u32,
    pub unit_price: i64,
    pub line_total: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_number: i64,
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub total: i64,
    pub delivery_fee: i64,
    pub delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_desk: Option<StopDesk>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Pedido pronto para persistir: tudo menos o número sequencial, que é
/// alocado dentro da transação de escrita.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id: Uuid,
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub total: i64,
    pub delivery_fee: i64,
    pub delivery_type: DeliveryType,
    pub stop_desk: Option<StopDesk>,
    pub created_at: DateTime<Utc>,
}

// --- Payloads de checkout (vitrine) ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCustomer {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "AMINE BENALI")]
    pub full_name: String,

    /// Formato local de 10 dígitos (0XXXXXXXXX)
    #[validate(length(equal = 10, message = "phone must have 10 digits"))]
    #[schema(example = "0555667788")]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    pub address: String,

    #[schema(example = 16)]
    pub wilaya_id: i64,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Kouba")]
    pub commune: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    #[validate(length(min = 1, message = "required"))]
    pub product_id: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Oud Royal")]
    pub name: String,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    #[schema(example = 2)]
    pub quantity: u32,

    /// Preço base, usado quando o produto não tem tamanhos
    #[schema(example = 1000)]
    pub price: i64,

    #[serde(default)]
    pub sizes: Vec<ProductSize>,

    #[schema(example = "50ml")]
    pub selected_size: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[validate(nested)]
    pub customer: CheckoutCustomer,

    #[validate(length(min = 1, message = "cart is empty"), nested)]
    pub items: Vec<CheckoutItem>,

    pub delivery_type: DeliveryType,

    /// Obrigatório quando deliveryType = office
    pub stop_desk_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intended_transitions_are_allowed() {
        use OrderStatus::*;
        assert!(Pending.can_transition(Confirmed));
        assert!(Confirmed.can_transition(Pending));
        assert!(Confirmed.can_transition(Shipped));
        assert!(Shipped.can_transition(Delivered));
        assert!(Shipped.can_transition(Returned));
        assert!(Shipped.can_transition(Cancelled));
    }

    #[test]
    fn unlisted_transitions_are_rejected() {
        use OrderStatus::*;
        assert!(!Pending.can_transition(Shipped));
        assert!(!Pending.can_transition(Delivered));
        assert!(!Delivered.can_transition(Shipped));
        assert!(!Cancelled.can_transition(Pending));
        assert!(!Shipped.can_transition(Confirmed));
        assert!(Pending.ensure_transition(Shipped).is_err());
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Returned,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("unknown"), None);
    }
}
