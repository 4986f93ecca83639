use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::order::{DeliveryMode, OrderDraft};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub telegram_user_id: i64,
    pub username: String,
    pub mobile: String,
    pub address: String,
    pub delivery_time: String,
    pub delivery_mode: String, // 'now', 'scheduled'
    pub note: String,
    pub subtotal: i64,
    pub delivery_charge: i64,
    pub total_price: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: String,
    pub item_name: String,
    pub quantity: i64,
    pub price: i64,
}

const ORDER_COLUMNS: &str = "id, telegram_user_id, username, mobile, address, delivery_time, \
    delivery_mode, note, subtotal, delivery_charge, total_price, created_at";

fn mode_str(mode: DeliveryMode) -> &'static str {
    match mode {
        DeliveryMode::Now => "now",
        DeliveryMode::Scheduled => "scheduled",
    }
}

impl Order {
    /// Stores the order and its cart lines in one transaction.
    pub async fn create(
        pool: &SqlitePool,
        telegram_user_id: i64,
        username: &str,
        draft: &OrderDraft,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, telegram_user_id, username, mobile, address, delivery_time,
                                delivery_mode, note, subtotal, delivery_charge, total_price, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(telegram_user_id)
        .bind(username)
        .bind(&draft.mobile)
        .bind(&draft.address)
        .bind(&draft.delivery_time)
        .bind(mode_str(draft.mode))
        .bind(&draft.note)
        .bind(draft.cart.subtotal())
        .bind(draft.cart.delivery_charge())
        .bind(draft.cart.total())
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for line in draft.cart.lines() {
            sqlx::query(
                "INSERT INTO order_items (order_id, item_name, quantity, price) VALUES (?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&line.item_name)
            .bind(i64::from(line.quantity))
            .bind(line.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, &id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &SqlitePool, order_id: &str) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?");
        sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn items(&self, pool: &SqlitePool) -> Result<Vec<OrderItem>, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, item_name, quantity, price FROM order_items WHERE order_id = ? ORDER BY id",
        )
        .bind(&self.id)
        .fetch_all(pool)
        .await
    }
}
