//! Test harness: the full router over an in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use bistro_server::{Config, DbService, ServerState, build_app};
use http::{Request, Response, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        let pool = db.pool.clone();
        let state = ServerState::new(Config::for_tests(), db);
        Self {
            router: build_app(state),
            pool,
        }
    }

    /// App with staff, tables, menu and three pending orders loaded
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        app.exec_all(FIXTURES).await;
        app
    }

    pub async fn exec_all(&self, statements: &[&str]) {
        for sql in statements {
            sqlx::query(sql).execute(&self.pool).await.unwrap();
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .send(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, String) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        let response = self.send(request).await;
        let status = response.status();
        (status, body_text(response).await)
    }

    /// POST that is expected to fail; returns status and the error envelope
    pub async fn post_form_err(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        let (status, text) = self.post_form(uri, form).await;
        (status, serde_json::from_str(&text).unwrap())
    }

    pub async fn table(&self, table_id: i64) -> Value {
        let (_, tables) = self.get_json("/tables/all").await;
        tables
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["tableID"] == table_id)
            .cloned()
            .unwrap()
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).unwrap()
}

/// Front workers 1-2, back workers 1-2, tables 1 (booth, 4), 2 (bar, 2),
/// 5 (patio, 6), a small menu and pending orders 10-12
pub const FIXTURES: &[&str] = &[
    "INSERT INTO front_worker (id, first_name, last_name) VALUES (1, 'Mia', 'Park'), (2, 'Leo', 'Cruz')",
    "INSERT INTO back_worker (id, first_name, last_name) VALUES (1, 'Sam', 'Ortiz'), (2, 'Ivy', 'Chen')",
    "INSERT INTO table_type (id, name) VALUES (1, 'booth'), (2, 'bar'), (3, 'patio')",
    "INSERT INTO dining_table (id, table_type_id, capacity) VALUES (5, 3, 6), (1, 1, 4), (2, 2, 2)",
    "INSERT INTO food_type (id, name) VALUES (1, 'Mains'), (2, 'Desserts'), (3, 'Drinks')",
    "INSERT INTO food_item (id, food_type_id, name, price) VALUES (1, 1, 'Burger', 12.5), (2, 1, 'Salad', 9.0), (3, 2, 'Flan', 6.25)",
    "INSERT INTO ingredient (id, name) VALUES (1, 'Beef'), (2, 'Lettuce'), (3, 'Egg')",
    "INSERT INTO item_tag (id, name) VALUES (1, 'vegetarian'), (2, 'gluten-free')",
    "INSERT INTO food_ingredient (food_item_id, ingredient_id) VALUES (1, 1), (1, 2), (2, 2), (3, 3)",
    "INSERT INTO food_tag (food_item_id, tag_id) VALUES (2, 1), (2, 2), (3, 1)",
    "INSERT INTO customer_order (id, table_id, food_item_id, placed_at) VALUES (10, 1, 1, 1000), (11, 1, 2, 2000), (12, 1, 3, 3000)",
];
