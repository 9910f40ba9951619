// src/models/catalog.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// O catálogo em si (produtos, imagens, categorias) vive fora deste serviço.
// Aqui só existem os pedaços que o checkout precisa para precificar.

/// Desconto por pacote: valor fixo em DZD abatido a cada múltiplo completo
/// do limiar de quantidade.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuantityDiscount {
    #[schema(example = 2)]
    pub quantity: u32,

    #[schema(example = 100)]
    pub discount: i64,
}

/// Variante de tamanho de um produto, com preço próprio e descontos de
/// quantidade próprios.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSize {
    #[schema(example = "50ml")]
    pub size: String,

    #[schema(example = 1000)]
    pub price: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,

    #[serde(default)]
    pub discounts: Vec<QuantityDiscount>,
}
