// src/db/delivery_config_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, services::delivery::DeliveryCredentials};

/// Credenciais de API por transportadora. Sem linha configurada não há
/// sincronização: não existe token padrão embutido.
#[derive(Clone)]
pub struct DeliveryConfigRepository {
    pool: PgPool,
}

impl DeliveryConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_credentials(
        &self,
        carrier_id: &str,
    ) -> Result<Option<DeliveryCredentials>, AppError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT api_id, api_token FROM delivery_config WHERE carrier_id = $1")
                .bind(carrier_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(api_id, api_token)| DeliveryCredentials { api_id, api_token }))
    }

    pub async fn upsert_credentials(
        &self,
        carrier_id: &str,
        credentials: &DeliveryCredentials,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO delivery_config (carrier_id, api_id, api_token)
            VALUES ($1, $2, $3)
            ON CONFLICT (carrier_id)
            DO UPDATE SET api_id = EXCLUDED.api_id, api_token = EXCLUDED.api_token,
                          updated_at = NOW()
            "#,
        )
        .bind(carrier_id)
        .bind(&credentials.api_id)
        .bind(&credentials.api_token)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
