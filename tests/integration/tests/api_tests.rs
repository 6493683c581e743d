//! API Integration Tests
//!
//! Most tests run the full router against an in-memory store. Tests in the
//! `postgres` section additionally require `DATABASE_URL` and skip without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, item, location, minutes, team, test_config, transaction, user,
    InMemoryStore, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use stock_core::{MembershipRole, TransactionType};

fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start_with(InMemoryStore::new()).await.unwrap();
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let server = TestServer::start_with(InMemoryStore::new()).await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start_with(InMemoryStore::new()).await.unwrap();
    let response = server.get("/api/orders").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let server = TestServer::start_with(InMemoryStore::new()).await.unwrap();
    let response = server.get("/api/items").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_items_default_limit_and_order() {
    let store = InMemoryStore::new().with_items((1..=60).map(|id| item(id, 10, 1, 1.0)));
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/items").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids = ids(&body);

    assert_eq!(ids.len(), 50);
    assert_eq!(ids[0], 60);
    assert_eq!(ids[49], 11);
}

#[tokio::test]
async fn test_items_limit_param() {
    let store = InMemoryStore::new().with_items((1..=10).map(|id| item(id, 10, 1, 1.0)));
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/items?limit=3").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ids(&body), vec![10, 9, 8]);
}

#[tokio::test]
async fn test_items_invalid_limit_falls_back_to_default() {
    let store = InMemoryStore::new().with_items((1..=60).map(|id| item(id, 10, 1, 1.0)));
    let server = TestServer::start_with(store).await.unwrap();

    for query in ["limit=abc", "limit=-4", "limit="] {
        let response = server.get(&format!("/api/items?{query}")).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.as_array().unwrap().len(), 50, "query {query}");
    }
}

#[tokio::test]
async fn test_items_zero_limit_returns_no_rows() {
    let store = InMemoryStore::new().with_items((1..=5).map(|id| item(id, 10, 1, 1.0)));
    let server = TestServer::start_with(store).await.unwrap();

    for path in ["/api/items?limit=0", "/api/transactions?limit=0", "/api/teams?limit=0"] {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, json!([]), "path {path}");
    }
}

#[tokio::test]
async fn test_items_include_location_name() {
    let mut stored = item(1, 4, 2, 2.5);
    stored.location_id = Some(7);
    let store = InMemoryStore::new()
        .with_locations([location(7, "Back Room")])
        .with_items([stored, item(2, 4, 2, 2.5)]);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/items").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body[0]["id"], 2);
    assert_eq!(body[0]["location_name"], Value::Null);
    assert_eq!(body[1]["location_name"], "Back Room");
    assert_eq!(body[1]["sku"], "WID-0001");
    assert_eq!(body[1]["cost"], 2.5);
}

#[tokio::test]
async fn test_low_stock_filters_and_orders_by_deficit() {
    let store = InMemoryStore::new().with_items([
        item(1, 2, 5, 1.0),   // deficit -3
        item(2, 10, 5, 1.0),  // above minimum
        item(3, 5, 5, 1.0),   // at minimum
        item(4, 0, 8, 1.0),   // deficit -8
    ]);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/low-stock").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ids(&body), vec![4, 1, 3]);
}

#[tokio::test]
async fn test_low_stock_empty() {
    let store = InMemoryStore::new().with_items([item(1, 10, 5, 1.0)]);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/low-stock").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!([]));
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_stats_snapshot() {
    let widget = item(1, 4, 5, 2.5);
    let store = InMemoryStore::new()
        .with_items([widget.clone(), item(2, 10, 1, 1.0), item(3, 0, 0, 99.0)])
        .with_locations([location(1, "Shelf A"), location(2, "Shelf B")])
        .with_transactions([transaction(1, &widget, TransactionType::StockIn, 4)]);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["totalLocations"], 2);
    assert_eq!(body["totalTransactions"], 1);
    assert_eq!(body["lowStockItems"], 2);
    assert_eq!(body["totalValue"], 20.0);
}

#[tokio::test]
async fn test_stats_empty_store() {
    let server = TestServer::start_with(InMemoryStore::new()).await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        body,
        json!({
            "totalItems": 0,
            "totalLocations": 0,
            "totalTransactions": 0,
            "lowStockItems": 0,
            "totalValue": 0.0
        })
    );
}

// ============================================================================
// Transaction and Location Tests
// ============================================================================

#[tokio::test]
async fn test_transactions_default_limit_with_item_details() {
    let widget = item(1, 10, 1, 1.0);
    let store = InMemoryStore::new()
        .with_items([widget.clone()])
        .with_transactions((1..=25).map(|id| transaction(id, &widget, TransactionType::StockOut, 1)));
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/transactions").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let rows = body.as_array().unwrap();

    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0]["id"], 25);
    assert_eq!(rows[0]["item_name"], "Widget 1");
    assert_eq!(rows[0]["sku"], "WID-0001");
    assert_eq!(rows[0]["transaction_type"], "stock_out");
}

#[tokio::test]
async fn test_locations_sorted_by_name() {
    let store = InMemoryStore::new().with_locations([
        location(1, "Warehouse"),
        location(2, "Annex"),
        location(3, "Dock"),
    ]);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/locations").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["Annex", "Dock", "Warehouse"]);
}

// ============================================================================
// Team and User Tests
// ============================================================================

fn org() -> InMemoryStore {
    InMemoryStore::new()
        .with_users([user(1, "owner@example.com"), user(2, "staff@example.com")])
        .with_teams([team(1, "Ops", 1), team(2, "Sales", 1)])
        .with_items([item(1, 3, 1, 1.0)])
        .with_locations([location(1, "Shelf A")])
}

#[tokio::test]
async fn test_teams_without_memberships_relation() {
    let server = TestServer::start_with(org()).await.unwrap();

    let response = server.get("/api/teams").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let rows = body.as_array().unwrap();

    assert_eq!(ids(&body), vec![2, 1]);
    for row in rows {
        assert_eq!(row["members_count"], 0);
        assert_eq!(row["members"], json!([]));
        assert_eq!(row["user_name"], "owner@example.com");
    }
    assert_eq!(rows[1]["items_count"], 1);
    assert_eq!(rows[1]["locations_count"], 1);
    assert_eq!(rows[0]["items_count"], 0);
}

#[tokio::test]
async fn test_teams_with_members() {
    let store = org()
        .with_membership(1, 1, MembershipRole::Owner)
        .with_membership(1, 2, MembershipRole::Member);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/teams").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ops = &body[1];

    assert_eq!(ops["name"], "Ops");
    assert_eq!(ops["members_count"], 2);
    assert_eq!(ops["members"].as_array().unwrap().len(), 2);
    assert_eq!(ops["members"][0]["email"], "owner@example.com");
    assert_eq!(ops["members"][0]["role"], "owner");
    assert_eq!(ops["members"][1]["role"], "member");
    assert_eq!(body[0]["members_count"], 0);
    assert_eq!(body[0]["members"], json!([]));
}

#[tokio::test]
async fn test_users_without_memberships_relation() {
    let server = TestServer::start_with(org()).await.unwrap();

    let response = server.get("/api/users?limit=10").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ids(&body), vec![2, 1]);
    assert_eq!(body[1]["teams_count"], 2);
    assert_eq!(body[1]["memberships_count"], 0);
    assert_eq!(body[1]["teams"], json!([]));
    assert_eq!(body[0]["teams_count"], 0);
}

#[tokio::test]
async fn test_users_with_memberships() {
    let store = org()
        .with_membership(1, 2, MembershipRole::Admin)
        .with_membership(2, 2, MembershipRole::Member);
    let server = TestServer::start_with(store).await.unwrap();

    let response = server.get("/api/users").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let staff = &body[0];

    assert_eq!(staff["email"], "staff@example.com");
    assert_eq!(staff["teams_count"], 0);
    assert_eq!(staff["memberships_count"], 2);
    assert_eq!(
        staff["teams"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["team_name"].as_str().unwrap())
            .collect::<Vec<_>>(),
        vec!["Ops", "Sales"]
    );
    assert_eq!(staff["teams"][0]["role"], "admin");
    assert_eq!(body[1]["memberships_count"], 0);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_store_failure_returns_generic_error() {
    let server = TestServer::start_with(InMemoryStore::failing()).await.unwrap();

    let cases = [
        ("/api/items", "Failed to fetch items"),
        ("/api/low-stock", "Failed to fetch low stock items"),
        ("/api/stats", "Failed to fetch stats"),
        ("/api/transactions", "Failed to fetch transactions"),
        ("/api/locations", "Failed to fetch locations"),
        ("/api/teams", "Failed to fetch teams"),
        ("/api/users", "Failed to fetch users"),
    ];

    for (path, message) in cases {
        let response = server.get(path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();
        assert_eq!(
            body,
            json!({ "error": { "code": "FETCH_FAILED", "message": message } }),
            "path {path}"
        );
    }
}

#[tokio::test]
async fn test_unreachable_database_returns_generic_error() {
    let server = TestServer::start_unreachable().await.unwrap();

    let response = server.get("/api/items").await.unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({ "error": { "code": "FETCH_FAILED", "message": "Failed to fetch items" } })
    );
    assert!(!body.to_string().contains("127.0.0.1"));
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_applies_to_api_only() {
    let config = test_config(&[
        ("RATE_LIMIT_ENABLED", "true"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .unwrap();
    let ctx = InMemoryStore::new().into_context().unwrap();
    let server = TestServer::start_with_context(ctx, config).await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..3 {
        statuses.push(server.get("/api/locations").await.unwrap().status());
    }
    assert_eq!(statuses[0], StatusCode::OK);
    assert_eq!(statuses[2], StatusCode::TOO_MANY_REQUESTS);

    for _ in 0..5 {
        let response = server.get("/health").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

mod postgres {
    use super::*;
    use stock_api::{create_app_state, AppState};

    async fn start() -> Option<TestServer> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        };
        let migrations = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");
        let config = test_config(&[
            ("DATABASE_URL", url.as_str()),
            ("DATABASE_MIGRATIONS_DIR", migrations),
        ])
        .unwrap();

        let state: AppState = create_app_state(config).await.unwrap();
        let ctx = state.service_context().clone();
        let config = state.config().clone();
        Some(TestServer::start_with_context(ctx, config).await.unwrap())
    }

    #[tokio::test]
    async fn test_readiness_with_database() {
        let Some(server) = start().await else { return };
        let response = server.get("/health/ready").await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body["checks"]["database"], "healthy");
    }

    #[tokio::test]
    async fn test_every_endpoint_reads_from_database() {
        let Some(server) = start().await else { return };

        for path in [
            "/api/items?limit=5",
            "/api/low-stock",
            "/api/stats",
            "/api/transactions?limit=5",
            "/api/locations",
            "/api/teams?limit=5",
            "/api/users?limit=5",
        ] {
            let response = server.get(path).await.unwrap();
            assert_status(response, StatusCode::OK).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_team_member_lists_match_counts() {
        let Some(server) = start().await else { return };

        let response = server.get("/api/teams?limit=100").await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

        for row in body.as_array().unwrap() {
            let members = row["members"].as_array().unwrap().len() as i64;
            assert_eq!(row["members_count"].as_i64().unwrap(), members);
        }
    }
}

#[test]
fn test_fixture_clock_is_monotonic() {
    assert!(minutes(2) > minutes(1));
}
