//! Shared helpers for database-backed integration tests.
//!
//! Each test gets its own schema so tests can run in parallel against one
//! database. Run with: DATABASE_URL=postgres://... cargo test -- --ignored

#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use uuid::Uuid;

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

/// A pool confined to a fresh schema, dropped by `teardown`.
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    /// Create an empty schema with the dashboard tables.
    pub async fn new() -> Self {
        Self::with_tables(SCHEMA_SQL).await
    }

    /// Create an empty schema and run `ddl` inside it.
    pub async fn with_tables(ddl: &str) -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("invoicedash_test_{}", Uuid::new_v4().simple());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect failed");
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("create schema failed");

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("connect failed");

        sqlx::raw_sql(ddl)
            .execute(&pool)
            .await
            .expect("schema setup failed");

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop schema failed");
    }

    pub async fn customer(&self, name: &str, email: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO customers (id, name, email, image_url) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(format!("/customers/{}.png", name.to_lowercase()))
            .execute(&self.pool)
            .await
            .expect("insert customer failed");
        id
    }

    pub async fn invoice(&self, customer_id: Uuid, amount: i32, status: &str, date: NaiveDate) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(customer_id)
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(&self.pool)
        .await
        .expect("insert invoice failed");
        id
    }

    pub async fn revenue(&self, month: &str, revenue: i32) {
        sqlx::query("INSERT INTO revenue (month, revenue) VALUES ($1, $2)")
            .bind(month)
            .bind(revenue)
            .execute(&self.pool)
            .await
            .expect("insert revenue failed");
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
