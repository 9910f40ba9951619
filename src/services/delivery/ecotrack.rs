// src/services/delivery/ecotrack.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::common::error::AppError;
use crate::data::{is_synthetic_office, ReferenceData};
use crate::models::order::{Customer, DeliveryType, Order};
use crate::models::region::StopDesk;

use super::{DeliveryCredentials, DeliveryProvider, DeliveryStatus, ShipmentReceipt};

pub const DEFAULT_BASE_URL: &str = "https://app.ecotrack-dz.net/api/v1";

/// Ordem de prioridade das chaves candidatas a número de rastreamento nas
/// respostas heterogêneas da API. Faz parte do contrato: os testes fixam
/// exatamente esta sequência.
const TRACKING_KEYS: [&str; 7] = [
    "tracking",
    "tracking_number",
    "barcode",
    "id",
    "ref",
    "reference_tracking",
    "order_id",
];

/// Palavras que identificam um 422 de "stop desk indisponível", o único erro
/// com ação compensatória automática (reenvio como domicílio).
const STOP_DESK_KEYWORDS: [&str; 4] = ["stop", "desk", "disponible", "commune"];

/// Procura o rastreamento navegando as formas conhecidas de resposta:
/// chaves candidatas no objeto corrente, depois `order`, `data`,
/// `orders[0]` e, por fim, o primeiro elemento se o valor for um array.
fn find_tracking(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            for key in TRACKING_KEYS {
                match map.get(key) {
                    Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                    Some(Value::Number(n)) => return Some(n.to_string()),
                    _ => {}
                }
            }
            for nested in ["order", "data"] {
                if let Some(inner) = map.get(nested) {
                    if let Some(tracking) = find_tracking(inner) {
                        return Some(tracking);
                    }
                }
            }
            map.get("orders")
                .and_then(Value::as_array)
                .and_then(|orders| orders.first())
                .and_then(find_tracking)
        }
        Value::Array(items) => items.first().and_then(find_tracking),
        _ => None,
    }
}

fn find_label(data: &Value) -> Option<String> {
    [&data["label_url"], &data["order"]["label_url"], &data["label"]]
        .into_iter()
        .find_map(|v| v.as_str().map(str::to_string))
}

/// Melhor mensagem disponível numa resposta de erro.
fn rejection_message(data: &Value) -> String {
    ["message", "error", "msg"]
        .into_iter()
        .find_map(|key| data.get(key).and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| data.to_string())
}

#[derive(Debug, PartialEq)]
enum CreateOutcome {
    Created {
        tracking: String,
        label_url: Option<String>,
    },
    MissingTracking,
    StopDeskRejected,
    Validation(String),
    Rejected,
}

fn interpret_create_response(status: u16, data: &Value, was_office: bool) -> CreateOutcome {
    let explicit_failure = data.get("status") == Some(&Value::Bool(false));
    if (200..300).contains(&status) && !explicit_failure {
        return match find_tracking(data) {
            Some(tracking) => CreateOutcome::Created {
                tracking,
                label_url: find_label(data),
            },
            None => CreateOutcome::MissingTracking,
        };
    }

    if status == 422 {
        if was_office {
            let text = data.to_string().to_lowercase();
            if STOP_DESK_KEYWORDS.iter().any(|k| text.contains(k)) {
                return CreateOutcome::StopDeskRejected;
            }
        }
        if let Some(errors) = data.get("errors").and_then(Value::as_object) {
            let message = errors
                .iter()
                .map(|(field, messages)| {
                    let list = messages
                        .as_array()
                        .map(|msgs| {
                            msgs.iter()
                                .filter_map(Value::as_str)
                                .collect::<Vec<_>>()
                                .join(", ")
                        })
                        .unwrap_or_else(|| messages.to_string());
                    format!("{field}: {list}")
                })
                .collect::<Vec<_>>()
                .join(" | ");
            return CreateOutcome::Validation(message);
        }
    }

    CreateOutcome::Rejected
}

fn map_tracking_status(status: &str) -> DeliveryStatus {
    match status {
        "Livré" => DeliveryStatus::Delivered,
        "Retourné" => DeliveryStatus::Returned,
        "En cours de livraison" | "Expédié" => DeliveryStatus::Shipped,
        "Annulé" => DeliveryStatus::Cancelled,
        // Default seguro: nunca "pending", nunca erro.
        _ => DeliveryStatus::Shipped,
    }
}

pub struct EcotrackProvider {
    http: reqwest::Client,
    base_url: String,
    reference: Arc<ReferenceData>,
}

impl EcotrackProvider {
    pub fn new(reference: Arc<ReferenceData>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            reference,
        }
    }

    /// Código de wilaya com zero à esquerda. Pedidos antigos podem não ter
    /// `wilaya_id`; nesse caso resolve pelo nome, com Alger (16) de último
    /// recurso.
    fn wilaya_code(&self, customer: &Customer) -> String {
        let id = customer
            .wilaya_id
            .or_else(|| self.reference.wilaya_by_name(&customer.wilaya).map(|w| w.id))
            .unwrap_or(16);
        format!("{id:02}")
    }

    fn chosen_desk(order: &Order) -> Option<&StopDesk> {
        match order.delivery_type {
            DeliveryType::Office => order.stop_desk.as_ref(),
            DeliveryType::Domicile => None,
        }
    }

    fn build_payload(&self, order: &Order, force_domicile: bool) -> Value {
        let desk = if force_domicile {
            None
        } else {
            Self::chosen_desk(order)
        };
        let stop_desk_flag = !force_domicile && order.delivery_type == DeliveryType::Office;

        // Com desk escolhido, o destino real é o desk, não o endereço
        // digitado pelo cliente.
        let adresse = desk
            .map(|d| d.address.clone())
            .unwrap_or_else(|| order.customer.address.clone());
        let commune = desk
            .and_then(|d| d.commune_name.clone())
            .unwrap_or_else(|| order.customer.commune.clone());

        let produit = order
            .items
            .iter()
            .map(|i| format!("{} ({})", i.name, i.selected_size.as_deref().unwrap_or("N/A")))
            .collect::<Vec<_>>()
            .join(", ");

        let mut payload = json!({
            "reference": order.id.to_string(),
            "nom_client": order.customer.full_name,
            "telephone": order.customer.phone,
            "adresse": adresse,
            "commune": commune,
            "code_wilaya": self.wilaya_code(&order.customer),
            "montant": order.total,
            "produit": produit,
            "type": 1,
            "stop_desk": if stop_desk_flag { 1 } else { 0 },
        });

        // Ids sintéticos são um artefato local e não existem do lado da
        // transportadora.
        if let Some(desk) = desk {
            if !is_synthetic_office(desk.id) {
                payload["stop_desk_id"] = json!(desk.id);
            }
        }
        payload
    }

    async fn post_order(&self, token: &str, payload: &Value) -> Result<(u16, Value), AppError> {
        let response = self
            .http
            .post(format!("{}/create/order", self.base_url))
            .header("token", token)
            .header("api-token", token)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;
        let status = response.status().as_u16();
        let data = response.json::<Value>().await.unwrap_or_else(|_| json!({}));
        Ok((status, data))
    }
}

#[async_trait]
impl DeliveryProvider for EcotrackProvider {
    fn id(&self) -> &'static str {
        super::CARRIER_ECOTRACK
    }

    fn name(&self) -> &'static str {
        "EcoTrack (Anderson)"
    }

    async fn create_order(
        &self,
        order: &Order,
        credentials: &DeliveryCredentials,
    ) -> Result<ShipmentReceipt, AppError> {
        let token = &credentials.api_token;
        let is_office = order.delivery_type == DeliveryType::Office;

        let payload = self.build_payload(order, false);
        let (status, data) = self.post_order(token, &payload).await?;

        match interpret_create_response(status, &data, is_office) {
            CreateOutcome::Created { tracking, label_url } => Ok(ShipmentReceipt {
                tracking_number: tracking,
                label_url,
                actual_delivery_type: order.delivery_type,
                note: None,
            }),
            CreateOutcome::MissingTracking => {
                Err(AppError::CarrierMissingTracking(data.to_string()))
            }
            CreateOutcome::Validation(message) => Err(AppError::CarrierValidation(message)),
            CreateOutcome::Rejected => Err(AppError::CarrierRejected {
                status,
                body: rejection_message(&data),
            }),
            CreateOutcome::StopDeskRejected => {
                tracing::warn!(
                    order_id = %order.id,
                    commune = %order.customer.commune,
                    "stop desk rejected by carrier, retrying as domicile"
                );
                let retry_payload = self.build_payload(order, true);
                let (retry_status, retry_data) = self.post_order(token, &retry_payload).await?;
                match interpret_create_response(retry_status, &retry_data, false) {
                    CreateOutcome::Created { tracking, label_url } => Ok(ShipmentReceipt {
                        tracking_number: tracking,
                        label_url,
                        actual_delivery_type: DeliveryType::Domicile,
                        note: Some(format!(
                            "Stop desk unavailable for commune \"{}\"; the carrier order was created as home delivery instead. Update the customer.",
                            order.customer.commune
                        )),
                    }),
                    CreateOutcome::Validation(message) => Err(AppError::StopDeskFallbackFailed {
                        office_error: data.to_string(),
                        fallback_error: message,
                    }),
                    CreateOutcome::MissingTracking => Err(AppError::StopDeskFallbackFailed {
                        office_error: data.to_string(),
                        fallback_error: format!("no tracking number in {retry_data}"),
                    }),
                    _ => Err(AppError::StopDeskFallbackFailed {
                        office_error: data.to_string(),
                        fallback_error: format!("({retry_status}) {}", rejection_message(&retry_data)),
                    }),
                }
            }
        }
    }

    async fn get_order_status(
        &self,
        tracking_number: &str,
        credentials: &DeliveryCredentials,
    ) -> DeliveryStatus {
        let token = &credentials.api_token;
        let url = format!("{}/tracking/info/{}", self.base_url, tracking_number);

        let response = match self
            .http
            .get(url)
            .header("api-token", token)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(tracking_number, error = %err, "tracking endpoint unreachable");
                return DeliveryStatus::Shipped;
            }
        };

        if !response.status().is_success() {
            return DeliveryStatus::Shipped;
        }
        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(_) => return DeliveryStatus::Shipped,
        };
        map_tracking_status(data["status"].as_str().unwrap_or_default())
    }

    fn stop_desks(&self, wilaya_id: i64) -> Option<Vec<StopDesk>> {
        Some(self.reference.offices_for(wilaya_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{CartLine, OrderStatus};
    use chrono::Utc;
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> DeliveryCredentials {
        DeliveryCredentials {
            api_id: "id".into(),
            api_token: "token".into(),
        }
    }

    fn sample_order(delivery_type: DeliveryType, stop_desk: Option<StopDesk>) -> Order {
        Order {
            id: Uuid::new_v4(),
            order_number: 42,
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
                quantity: 2,
                unit_price: 1000,
                line_total: 1900,
            }],
            total: 2250,
            delivery_fee: 350,
            delivery_type,
            stop_desk,
            status: OrderStatus::Confirmed,
            carrier: None,
            tracking_number: None,
            created_at: Utc::now(),
        }
    }

    fn kouba_desk() -> StopDesk {
        StopDesk {
            id: 1602,
            name: "Station Alger Kouba".into(),
            address: "Ferme pons garidi".into(),
            wilaya_id: 16,
            commune_name: Some("Kouba".into()),
            phone: None,
        }
    }

    fn provider(base_url: &str) -> EcotrackProvider {
        EcotrackProvider::new(Arc::new(ReferenceData::load()), base_url)
    }

    // --- Sondagem de rastreamento ---

    #[test]
    fn tracking_is_probed_in_key_priority_order() {
        let data = json!({ "tracking_number": "B", "tracking": "A" });
        assert_eq!(find_tracking(&data), Some("A".into()));

        let numeric = json!({ "order_id": 9981 });
        assert_eq!(find_tracking(&numeric), Some("9981".into()));
    }

    #[test]
    fn tracking_is_found_in_nested_shapes() {
        assert_eq!(
            find_tracking(&json!({ "order": { "barcode": "TRK1" } })),
            Some("TRK1".into())
        );
        assert_eq!(
            find_tracking(&json!({ "data": { "order": { "ref": "TRK2" } } })),
            Some("TRK2".into())
        );
        assert_eq!(
            find_tracking(&json!({ "orders": [{ "tracking": "TRK3" }] })),
            Some("TRK3".into())
        );
        assert_eq!(
            find_tracking(&json!([{ "tracking": "TRK4" }])),
            Some("TRK4".into())
        );
        assert_eq!(find_tracking(&json!({ "success": true })), None);
        assert_eq!(find_tracking(&json!({ "tracking": "" })), None);
    }

    #[test]
    fn explicit_false_status_is_a_failure_even_on_2xx() {
        let data = json!({ "status": false, "tracking": "TRK" });
        assert_eq!(
            interpret_create_response(200, &data, false),
            CreateOutcome::Rejected
        );
    }

    #[test]
    fn status_dictionary_maps_known_labels() {
        assert_eq!(map_tracking_status("Livré"), DeliveryStatus::Delivered);
        assert_eq!(map_tracking_status("Retourné"), DeliveryStatus::Returned);
        assert_eq!(map_tracking_status("Annulé"), DeliveryStatus::Cancelled);
        assert_eq!(
            map_tracking_status("En cours de livraison"),
            DeliveryStatus::Shipped
        );
        assert_eq!(map_tracking_status("Expédié"), DeliveryStatus::Shipped);
        assert_eq!(map_tracking_status("???"), DeliveryStatus::Shipped);
    }

    // --- Criação de remessa ---

    #[tokio::test]
    async fn office_order_sends_desk_address_and_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .and(body_partial_json(json!({
                "stop_desk": 1,
                "stop_desk_id": 1602,
                "adresse": "Ferme pons garidi",
                "commune": "Kouba",
                "code_wilaya": "16",
                "montant": 2250,
                "produit": "Oud Royal (50ml)",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "order": { "tracking_number": "ECO-777", "label_url": "http://x/label.pdf" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = sample_order(DeliveryType::Office, Some(kouba_desk()));
        let receipt = provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap();

        assert_eq!(receipt.tracking_number, "ECO-777");
        assert_eq!(receipt.label_url.as_deref(), Some("http://x/label.pdf"));
        assert_eq!(receipt.actual_delivery_type, DeliveryType::Office);
        assert!(receipt.note.is_none());
    }

    #[tokio::test]
    async fn synthetic_desk_id_is_not_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracking": "T1" })))
            .expect(1)
            .mount(&server)
            .await;

        let reference = ReferenceData::load();
        let synthetic = reference.offices_for(37).remove(0);
        let mut order = sample_order(DeliveryType::Office, Some(synthetic));
        order.customer.wilaya_id = Some(37);

        provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["stop_desk"], json!(1));
        assert!(body.get("stop_desk_id").is_none());
        assert_eq!(body["code_wilaya"], json!("37"));
    }

    #[tokio::test]
    async fn stop_desk_422_falls_back_to_domicile_with_customer_address() {
        let server = MockServer::start().await;
        // Primeira tentativa (office) rejeitada por indisponibilidade.
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .and(body_partial_json(json!({ "stop_desk": 1 })))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Stop desk non disponible pour cette commune"
            })))
            .expect(1)
            .mount(&server)
            .await;
        // Reenvio como domicílio, com o endereço do próprio cliente.
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .and(body_partial_json(json!({
                "stop_desk": 0,
                "adresse": "12 rue Didouche Mourad",
                "commune": "Kouba",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracking": "ECO-FB" })))
            .expect(1)
            .mount(&server)
            .await;

        let order = sample_order(DeliveryType::Office, Some(kouba_desk()));
        let receipt = provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap();

        assert_eq!(receipt.tracking_number, "ECO-FB");
        assert_eq!(receipt.actual_delivery_type, DeliveryType::Domicile);
        assert!(receipt.note.unwrap().contains("Kouba"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        let retry: Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert!(retry.get("stop_desk_id").is_none());
    }

    #[tokio::test]
    async fn failed_fallback_reports_both_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .and(body_partial_json(json!({ "stop_desk": 1 })))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "commune sans stop desk"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .and(body_partial_json(json!({ "stop_desk": 0 })))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "internal error"
            })))
            .mount(&server)
            .await;

        let order = sample_order(DeliveryType::Office, Some(kouba_desk()));
        let err = provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap_err();

        match err {
            AppError::StopDeskFallbackFailed { office_error, fallback_error } => {
                assert!(office_error.contains("commune"));
                assert!(fallback_error.contains("internal error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn domicile_422_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "errors": { "telephone": ["must be 10 digits", "invalid prefix"] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = sample_order(DeliveryType::Domicile, None);
        let err = provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap_err();

        match err {
            AppError::CarrierValidation(message) => {
                assert_eq!(message, "telephone: must be 10 digits, invalid prefix");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_without_tracking_is_an_error_naming_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create/order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let order = sample_order(DeliveryType::Domicile, None);
        let err = provider(&server.uri())
            .create_order(&order, &credentials())
            .await
            .unwrap_err();

        match err {
            AppError::CarrierMissingTracking(body) => assert!(body.contains("success")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // --- Polling de status ---

    #[tokio::test]
    async fn tracking_status_maps_the_localized_label() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tracking/info/ECO-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Livré" })))
            .mount(&server)
            .await;

        let status = provider(&server.uri())
            .get_order_status("ECO-1", &credentials())
            .await;
        assert_eq!(status, DeliveryStatus::Delivered);
    }

    #[tokio::test]
    async fn missing_endpoint_defaults_to_shipped() {
        let server = MockServer::start().await;
        // Nenhum mock montado: o servidor responde 404.
        let status = provider(&server.uri())
            .get_order_status("ECO-2", &credentials())
            .await;
        assert_eq!(status, DeliveryStatus::Shipped);
    }

    #[tokio::test]
    async fn unreachable_host_defaults_to_shipped() {
        let status = provider("http://127.0.0.1:1")
            .get_order_status("ECO-3", &credentials())
            .await;
        assert_eq!(status, DeliveryStatus::Shipped);
    }
}
