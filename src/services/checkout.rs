// src/services/checkout.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::data::ReferenceData;
use crate::db::OrderRepository;
use crate::models::catalog::QuantityDiscount;
use crate::models::order::{
    CartLine, CheckoutItem, CheckoutRequest, Customer, DeliveryType, NewOrder, Order,
};
use crate::models::region::StopDesk;
use crate::services::pricing;

/// Orquestra o checkout da vitrine: validação, precificação no servidor e
/// persistência. Nenhum valor vindo do cliente é confiado para dinheiro.
#[derive(Clone)]
pub struct CheckoutService {
    repository: OrderRepository,
    reference: Arc<ReferenceData>,
}

impl CheckoutService {
    pub fn new(repository: OrderRepository, reference: Arc<ReferenceData>) -> Self {
        Self { repository, reference }
    }

    pub async fn checkout(&self, payload: CheckoutRequest) -> Result<Order, AppError> {
        let new_order = prepare_order(&self.reference, payload)?;
        self.repository.create_order(new_order).await
    }
}

/// Valida e precifica o pedido sem tocar em IO. Toda rejeição acontece aqui,
/// antes de qualquer escrita.
pub fn prepare_order(
    reference: &ReferenceData,
    payload: CheckoutRequest,
) -> Result<NewOrder, AppError> {
    payload.validate()?;

    // Formato local: 10 dígitos começando por 0 (o comprimento já foi
    // verificado pelo validator).
    if !payload.customer.phone.starts_with('0')
        || !payload.customer.phone.chars().all(|c| c.is_ascii_digit())
    {
        return Err(AppError::InvalidSubmission(
            "Phone number must be 10 digits starting with 0".into(),
        ));
    }

    let missing_sizes: Vec<&str> = payload
        .items
        .iter()
        .filter(|item| !item.sizes.is_empty() && item.selected_size.is_none())
        .map(|item| item.name.as_str())
        .collect();
    if !missing_sizes.is_empty() {
        return Err(AppError::InvalidSubmission(format!(
            "Please select a size for: {}",
            missing_sizes.join(", ")
        )));
    }

    let stop_desk = resolve_stop_desk(reference, &payload)?;

    let items: Vec<CartLine> = payload
        .items
        .iter()
        .map(|item| price_line(item))
        .collect::<Result<_, _>>()?;

    let subtotal = pricing::cart_subtotal(&items);
    let delivery_fee = reference.delivery_fee(payload.customer.wilaya_id, payload.delivery_type);
    let total = pricing::grand_total(subtotal, delivery_fee);

    let wilaya_name = reference
        .wilaya(payload.customer.wilaya_id)
        .map(|w| w.name.clone())
        .unwrap_or_default();

    Ok(NewOrder {
        id: Uuid::new_v4(),
        customer: Customer {
            full_name: payload.customer.full_name.trim().to_string(),
            phone: payload.customer.phone,
            address: payload.customer.address.trim().to_string(),
            wilaya: wilaya_name,
            wilaya_id: Some(payload.customer.wilaya_id),
            commune: payload.customer.commune.trim().to_string(),
        },
        items,
        total,
        delivery_fee,
        delivery_type: payload.delivery_type,
        stop_desk,
        created_at: Utc::now(),
    })
}

fn resolve_stop_desk(
    reference: &ReferenceData,
    payload: &CheckoutRequest,
) -> Result<Option<StopDesk>, AppError> {
    if payload.delivery_type != DeliveryType::Office {
        return Ok(None);
    }
    let desk_id = payload.stop_desk_id.ok_or_else(|| {
        AppError::InvalidSubmission("A pickup station is required for office delivery".into())
    })?;
    // A busca inclui a estação sintética de wilayas sem cobertura real.
    reference
        .offices_for(payload.customer.wilaya_id)
        .into_iter()
        .find(|desk| desk.id == desk_id)
        .map(Some)
        .ok_or_else(|| {
            AppError::InvalidSubmission(
                "The selected pickup station does not serve this wilaya".into(),
            )
        })
}

/// Resolve o preço unitário e os descontos do lado do servidor. Quando o item
/// tem tamanhos, o tamanho escolhido deve existir no catálogo enviado.
fn price_line(item: &CheckoutItem) -> Result<CartLine, AppError> {
    let (unit_price, discounts): (i64, &[QuantityDiscount]) = match &item.selected_size {
        Some(size_name) if !item.sizes.is_empty() => {
            let size = item
                .sizes
                .iter()
                .find(|s| s.size == *size_name)
                .ok_or_else(|| {
                    AppError::InvalidSubmission(format!(
                        "Unknown size \"{}\" for: {}",
                        size_name, item.name
                    ))
                })?;
            (size.price, size.discounts.as_slice())
        }
        _ => (item.price, &[]),
    };

    Ok(CartLine {
        product_id: item.product_id.clone(),
        name: item.name.clone(),
        selected_size: item.selected_size.clone(),
        quantity: item.quantity,
        unit_price,
        line_total: pricing::line_total(unit_price, item.quantity, discounts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::ProductSize;
    use crate::models::order::CheckoutCustomer;

    fn customer() -> CheckoutCustomer {
        CheckoutCustomer {
            full_name: "Amine Benali".into(),
            phone: "0555667788".into(),
            address: "12 rue Didouche Mourad".into(),
            wilaya_id: 16,
            commune: "Kouba".into(),
        }
    }

    fn item() -> CheckoutItem {
        CheckoutItem {
            product_id: "p1".into(),
            name: "Oud Royal".into(),
            quantity: 2,
            price: 1500,
            sizes: vec![ProductSize {
                size: "50ml".into(),
                price: 1000,
                old_price: None,
                discounts: vec![QuantityDiscount { quantity: 2, discount: 100 }],
            }],
            selected_size: Some("50ml".into()),
        }
    }

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            customer: customer(),
            items: vec![item()],
            delivery_type: DeliveryType::Domicile,
            stop_desk_id: None,
        }
    }

    #[test]
    fn server_prices_override_the_client_cart() {
        let reference = ReferenceData::load();
        let order = prepare_order(&reference, request()).unwrap();

        // 2 × 1000 − 100 de desconto por pacote.
        assert_eq!(order.items[0].unit_price, 1000);
        assert_eq!(order.items[0].line_total, 1900);
        let fee = reference.delivery_fee(16, DeliveryType::Domicile);
        assert!(fee > 0);
        assert_eq!(order.total, 1900 + fee);
        assert_eq!(order.delivery_fee, fee);
        assert_eq!(order.customer.wilaya, "Alger");
    }

    #[test]
    fn item_without_sizes_uses_its_own_price() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.items[0].sizes.clear();
        req.items[0].selected_size = None;

        let order = prepare_order(&reference, req).unwrap();
        assert_eq!(order.items[0].unit_price, 1500);
        assert_eq!(order.items[0].line_total, 3000);
    }

    #[test]
    fn missing_size_is_rejected_naming_the_product() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.items[0].selected_size = None;

        let err = prepare_order(&reference, req).unwrap_err();
        match err {
            AppError::InvalidSubmission(msg) => {
                assert_eq!(msg, "Please select a size for: Oud Royal");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_size_is_rejected() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.items[0].selected_size = Some("200ml".into());

        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::InvalidSubmission(_))
        ));
    }

    #[test]
    fn phone_with_letters_is_rejected() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.customer.phone = "05556677ab".into();

        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::InvalidSubmission(_))
        ));
    }

    #[test]
    fn phone_without_leading_zero_is_rejected() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.customer.phone = "5556677889".into();

        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::InvalidSubmission(_))
        ));
    }

    #[test]
    fn short_phone_fails_payload_validation() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.customer.phone = "0555".into();

        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn empty_cart_fails_payload_validation() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.items.clear();

        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn office_delivery_requires_a_station_of_the_wilaya() {
        let reference = ReferenceData::load();

        let mut req = request();
        req.delivery_type = DeliveryType::Office;
        req.stop_desk_id = None;
        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::InvalidSubmission(_))
        ));

        let mut req = request();
        req.delivery_type = DeliveryType::Office;
        // Estação de outra wilaya.
        req.stop_desk_id = Some(3101);
        assert!(matches!(
            prepare_order(&reference, req),
            Err(AppError::InvalidSubmission(_))
        ));

        let mut req = request();
        req.delivery_type = DeliveryType::Office;
        let desk = reference.offices_for(16).remove(0);
        req.stop_desk_id = Some(desk.id);
        let order = prepare_order(&reference, req).unwrap();
        assert_eq!(order.stop_desk.unwrap().id, desk.id);
        assert_eq!(
            order.delivery_fee,
            reference.delivery_fee(16, DeliveryType::Office)
        );
    }

    #[test]
    fn unknown_wilaya_ships_free() {
        let reference = ReferenceData::load();
        let mut req = request();
        req.customer.wilaya_id = 999;

        let order = prepare_order(&reference, req).unwrap();
        assert_eq!(order.delivery_fee, 0);
        assert_eq!(order.total, 1900);
        assert_eq!(order.customer.wilaya, "");
    }
}
