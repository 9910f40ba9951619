// src/services/pricing.rs

use crate::models::catalog::QuantityDiscount;
use crate::models::order::CartLine;

/// Desconto total de uma linha pelo esquema de pacotes: os limiares são
/// ordenados por quantidade decrescente e consumidos gulosamente, do pacote
/// maior para o menor, sobre a quantidade restante.
///
/// A política gulosa não é ótima para conjuntos arbitrários de limiares e é
/// assim de propósito: a vitrine exibe a economia por pacote assumindo
/// exatamente este comportamento.
pub fn pack_discount(quantity: u32, discounts: &[QuantityDiscount]) -> i64 {
    let mut rules: Vec<&QuantityDiscount> =
        discounts.iter().filter(|d| d.quantity > 0).collect();
    rules.sort_by(|a, b| b.quantity.cmp(&a.quantity));

    let mut remaining = quantity;
    let mut total_discount = 0i64;
    for rule in rules {
        let packs = remaining / rule.quantity;
        if packs > 0 {
            total_discount += i64::from(packs) * rule.discount;
            remaining -= packs * rule.quantity;
        }
    }
    total_discount
}

/// Total a pagar de uma linha: preço regular menos os descontos de pacote,
/// nunca abaixo de zero (um desconto configurado maior que o total regular é
/// erro de dados do admin, não um crédito ao cliente).
pub fn line_total(unit_price: i64, quantity: u32, discounts: &[QuantityDiscount]) -> i64 {
    let regular = unit_price * i64::from(quantity);
    (regular - pack_discount(quantity, discounts)).max(0)
}

pub fn cart_subtotal(lines: &[CartLine]) -> i64 {
    lines.iter().map(|l| l.line_total).sum()
}

pub fn grand_total(subtotal: i64, delivery_fee: i64) -> i64 {
    subtotal + delivery_fee
}
