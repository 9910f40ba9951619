// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::data::ReferenceData;
use crate::db::{DeliveryConfigRepository, OrderRepository};
use crate::services::checkout::CheckoutService;
use crate::services::delivery::{self, DeliveryRegistry};
use crate::services::shipping::ShippingService;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub reference: Arc<ReferenceData>,
    pub order_repo: OrderRepository,
    pub delivery_config_repo: DeliveryConfigRepository,
    pub checkout_service: CheckoutService,
    pub shipping_service: ShippingService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;
        // Override apenas para testes e homologação.
        let ecotrack_base_url = env::var("ECOTRACK_API_URL")
            .unwrap_or_else(|_| delivery::ecotrack::DEFAULT_BASE_URL.to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let reference = Arc::new(ReferenceData::load());
        let order_repo = OrderRepository::new(db_pool.clone());
        let delivery_config_repo = DeliveryConfigRepository::new(db_pool.clone());
        let registry = DeliveryRegistry::new(reference.clone(), ecotrack_base_url);
        let checkout_service = CheckoutService::new(order_repo.clone(), reference.clone());
        let shipping_service = ShippingService::new(
            order_repo.clone(),
            delivery_config_repo.clone(),
            registry,
        );

        Ok(Self {
            db_pool,
            reference,
            order_repo,
            delivery_config_repo,
            checkout_service,
            shipping_service,
        })
    }
}
