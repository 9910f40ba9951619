// src/db/order_repo.rs

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Executor, FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{CartLine, Customer, DeliveryType, NewOrder, Order, OrderStatus},
    models::region::StopDesk,
};

/// Nome do contador compartilhado de numeração de pedidos.
const ORDERS_SEQUENCE: &str = "orders-sequence";

const ORDER_COLUMNS: &str = "id, order_number, customer, items, total, delivery_fee, \
     delivery_type, stop_desk, status, carrier, tracking_number, created_at";

// Linha crua do banco: snapshots em JSONB, enums como texto. A conversão
// para o modelo de domínio acontece num único lugar (TryFrom).
#[derive(FromRow)]
struct OrderRow {
    id: Uuid,
    order_number: i64,
    customer: Json<Customer>,
    items: Json<Vec<CartLine>>,
    total: i64,
    delivery_fee: i64,
    delivery_type: String,
    stop_desk: Option<Json<StopDesk>>,
    status: String,
    carrier: Option<String>,
    tracking_number: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let delivery_type = DeliveryType::parse(&row.delivery_type)
            .ok_or_else(|| anyhow!("invalid delivery_type in row {}: {}", row.id, row.delivery_type))?;
        let status = OrderStatus::parse(&row.status)
            .ok_or_else(|| anyhow!("invalid status in row {}: {}", row.id, row.status))?;
        Ok(Order {
            id: row.id,
            order_number: row.order_number,
            customer: row.customer.0,
            items: row.items.0,
            total: row.total,
            delivery_fee: row.delivery_fee,
            delivery_type,
            stop_desk: row.stop_desk.map(|d| d.0),
            status,
            carrier: row.carrier,
            tracking_number: row.tracking_number,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aloca o próximo número de pedido. UPSERT atômico: o lock de linha do
    /// Postgres garante que duas transações concorrentes nunca leem o mesmo
    /// valor corrente.
    async fn next_order_number<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (value,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO counters (name, value)
            VALUES ($1, 1)
            ON CONFLICT (name)
            DO UPDATE SET value = counters.value + 1
            RETURNING value
            "#,
        )
        .bind(ORDERS_SEQUENCE)
        .fetch_one(executor)
        .await?;
        Ok(value)
    }

    /// Persiste o pedido com um número recém alocado. Contador e pedido são
    /// escritos na mesma transação: ou ambos commitam, ou nenhum.
    pub async fn create_order(&self, draft: NewOrder) -> Result<Order, AppError> {
        let mut tx = self.pool.begin().await?;

        let order_number = self.next_order_number(&mut *tx).await?;

        let sql = format!(
            r#"
            INSERT INTO orders
                (id, order_number, customer, items, total, delivery_fee,
                 delivery_type, stop_desk, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ORDER_COLUMNS}
            "#
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(draft.id)
            .bind(order_number)
            .bind(Json(draft.customer))
            .bind(Json(draft.items))
            .bind(draft.total)
            .bind(draft.delivery_fee)
            .bind(draft.delivery_type.as_str())
            .bind(draft.stop_desk.map(Json))
            .bind(OrderStatus::Pending.as_str())
            .bind(draft.created_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        row.try_into()
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC");
        let rows: Vec<OrderRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(Order::try_from).collect()
    }

    pub async fn get_order(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Order::try_from).transpose()
    }

    pub async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        let sql = format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        );
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(AppError::OrderNotFound)?.try_into()
    }

    /// Grava transportadora, rastreamento e o tipo de entrega efetivo (o
    /// fallback da transportadora pode ter trocado office por domicílio).
    pub async fn assign_shipment(
        &self,
        id: Uuid,
        carrier: &str,
        tracking_number: &str,
        delivery_type: DeliveryType,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let sql = format!(
            r#"
            UPDATE orders
            SET carrier = $2, tracking_number = $3, delivery_type = $4, status = $5
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(carrier)
            .bind(tracking_number)
            .bind(delivery_type.as_str())
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(AppError::OrderNotFound)?.try_into()
    }

    pub async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::OrderNotFound);
        }
        Ok(())
    }
}
