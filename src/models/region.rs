// src/models/region.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wilaya (zona administrativa de entrega) com tarifas planas por tipo de
/// entrega, em DZD inteiros.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Wilaya {
    #[schema(example = 16)]
    pub id: i64,

    #[schema(example = "Alger")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,

    /// Tarifa de entrega em domicílio
    #[schema(example = 500)]
    pub domicile_price: i64,

    /// Tarifa de retirada em stop desk
    #[schema(example = 350)]
    pub office_price: i64,
}

/// Stop desk (ponto de retirada operado pela transportadora).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopDesk {
    #[schema(example = 1601)]
    pub id: i64,

    #[schema(example = "Station Alger Eucalyptus")]
    pub name: String,

    pub address: String,

    pub wilaya_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commune_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
