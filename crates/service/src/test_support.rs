#![cfg(test)]
use std::str::FromStr;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use configs::DatabaseConfig;
use models::db::connect_with_config;

// Migrations run once per test process; `false` means the database is unusable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection for the calling test, or `None` when DB tests are skipped
/// (`SKIP_DB_TESTS` set, or nothing reachable at `DATABASE_URL`).
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let _ = dotenvy::dotenv();
    let mut cfg = DatabaseConfig::from_env();
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 5;

    let ready = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&cfg).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            if let Err(e) = migration::Migrator::up(&db, None).await {
                eprintln!("skip: migrate up failed: {}", e);
                return false;
            }
            true
        })
        .await;
    if !ready {
        return None;
    }
    connect_with_config(&cfg).await.ok()
}

/// Unique suffix for columns with unique indexes; tests share one database.
pub fn unique(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}_{nanos}")
}

/// Plain models with fixed field values.
pub mod fixtures {
    use super::*;
    use models::item::ItemStatus;
    use models::order_group::OrderType;
    use models::user::UserStatus;
    use models::{category, item, order_detail, order_group, user};
    use rust_decimal::Decimal;

    pub fn category(id: i64, category_type: &str, title: &str) -> category::Model {
        category::Model { id, category_type: category_type.into(), title: title.into() }
    }

    pub fn user(id: i64, account: &str) -> user::Model {
        user::Model {
            id,
            account: account.into(),
            password: "pw1234".into(),
            status: UserStatus::Registered,
            email: Some(format!("{account}@example.com")),
            phone_number: Some("010-1111-2222".into()),
            registered_at: Some(chrono::Utc::now().fixed_offset()),
            unregistered_at: None,
        }
    }

    pub fn item(id: i64, name: &str) -> item::Model {
        item::Model {
            id,
            status: ItemStatus::Registered,
            name: name.into(),
            title: format!("{name} title"),
            content: format!("{name} content"),
            price: Decimal::from_str("900000.00").unwrap(),
            brand_name: Some("Samsung".into()),
            registered_at: Some(chrono::Utc::now().fixed_offset()),
            unregistered_at: None,
        }
    }

    pub fn order_group(id: i64, user_id: i64) -> order_group::Model {
        order_group::Model {
            id,
            status: "COMPLETE".into(),
            order_type: OrderType::All,
            rev_address: "Seoul, Gangnam-gu".into(),
            rev_name: "Hong".into(),
            payment_type: "CARD".into(),
            total_price: Decimal::from_str("1800000.00").unwrap(),
            total_quantity: 2,
            order_at: Some(chrono::Utc::now().fixed_offset()),
            arrival_date: None,
            user_id,
        }
    }

    pub fn order_detail(id: i64, order_group_id: i64, item_id: i64) -> order_detail::Model {
        order_detail::Model {
            id,
            status: "WAITING".into(),
            arrival_date: None,
            quantity: 1,
            total_price: Decimal::from_str("900000.00").unwrap(),
            order_group_id,
            item_id,
        }
    }
}
