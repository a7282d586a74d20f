//! End-to-end tests for the `/api` REST endpoints.
//!
//! Each test builds the real axum `Router` over a fresh, seeded in-memory
//! database and sends requests with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cornerstore_api::{router, AppState};
use cornerstore_db::{Database, DbConfig};

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    router(AppState::new(db))
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // Extractor rejections answer in plain text
    let body = if bytes.is_empty() {
        Value::Null
    } else if is_json {
        serde_json::from_slice(&bytes).unwrap()
    } else {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    };

    Reply {
        status,
        location,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Method::GET, uri, None).await
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

fn product_names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["productName"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn seeded_order_has_cashier_lines_and_total() {
    let app = app().await;
    let reply = get(&app, "/api/orders/1").await;

    assert_eq!(reply.status, StatusCode::OK);
    let order = reply.body;
    assert_eq!(order["id"], 1);
    assert_eq!(order["cashierId"], 1);
    assert_eq!(order["paidOnDate"], "2025-05-20T00:00:00");
    assert_eq!(order["cashier"]["fullName"], "Ernie Fairchild");
    assert!(order["cashier"].get("orders").is_none());
    assert_eq!(order["total"].as_f64(), Some(4.0));

    let lines = order["orderProducts"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[0]["product"]["productName"], "Cola");
    assert_eq!(lines[0]["product"]["price"].as_f64(), Some(1.25));
    assert_eq!(lines[0]["product"]["category"]["categoryName"], "Beverages");
    assert!(lines[0]["product"]["category"].get("products").is_none());
    assert_eq!(lines[1]["product"]["productName"], "Chips");
    assert_eq!(lines[1]["quantity"], 1);
}

#[tokio::test]
async fn missing_order_is_404_with_empty_body() {
    let app = app().await;
    let reply = get(&app, "/api/orders/999").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, Value::Null);
}

#[tokio::test]
async fn order_list_is_shallow() {
    let app = app().await;
    let reply = get(&app, "/api/orders").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(ids(&reply.body), [1, 2]);
    for order in reply.body.as_array().unwrap() {
        assert!(order.get("cashier").is_none());
        assert!(order.get("orderProducts").is_none());
        assert_eq!(order["total"].as_f64(), Some(0.0));
    }
}

#[tokio::test]
async fn order_date_filter_includes_day_and_excludes_neighbours() {
    let app = app().await;

    assert_eq!(ids(&get(&app, "/api/orders?orderDate=2025-05-20").await.body), [1]);
    assert_eq!(ids(&get(&app, "/api/orders?orderDate=2025-05-21").await.body), [2]);
    assert!(ids(&get(&app, "/api/orders?orderDate=2025-05-19").await.body).is_empty());
    assert!(ids(&get(&app, "/api/orders?orderDate=2025-05-22").await.body).is_empty());
}

#[tokio::test]
async fn order_date_filter_covers_the_whole_day() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "cashierId": 2, "paidOnDate": "2025-05-20T23:59:59" })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let new_id = created.body["id"].as_i64().unwrap();

    let reply = get(&app, "/api/orders?orderDate=2025-05-20").await;
    assert_eq!(ids(&reply.body), [1, new_id]);
}

#[tokio::test]
async fn unparseable_order_date_is_400() {
    let app = app().await;
    let reply = get(&app, "/api/orders?orderDate=not-a-date").await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_then_get_order_round_trip() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "cashierId": 2,
            "paidOnDate": "2025-05-23T10:00:00",
            "orderProducts": [
                { "productId": 3, "quantity": 2 },
                { "productId": 4, "quantity": 1 }
            ]
        })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.location.as_deref(), Some(format!("/api/orders/{id}").as_str()));
    assert_eq!(created.body["cashier"]["fullName"], "Lana Lopez");
    assert_eq!(created.body["total"].as_f64(), Some(6.5));

    let fetched = get(&app, &format!("/api/orders/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
    assert_eq!(fetched.body["paidOnDate"], "2025-05-23T10:00:00");
    assert_eq!(fetched.body["orderProducts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_order_strips_timezone_offset() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "cashierId": 1, "paidOnDate": "2025-05-23T10:00:00-04:00" })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["paidOnDate"], "2025-05-23T10:00:00");
}

#[tokio::test]
async fn create_order_without_lines() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "cashierId": 1 })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["paidOnDate"], Value::Null);
    assert_eq!(created.body["orderProducts"], json!([]));
    assert_eq!(created.body["total"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn create_order_for_unknown_cashier_is_opaque_500() {
    let app = app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "cashierId": 99, "orderProducts": [] })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "DATABASE_ERROR");
    assert!(!reply.body["message"].as_str().unwrap().contains("FOREIGN KEY"));
}

#[tokio::test]
async fn huge_quantity_saturates_total_instead_of_failing() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "cashierId": 1,
            "orderProducts": [{ "productId": 1, "quantity": 100_000_000_000_000_000_i64 }]
        })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let saturated = i64::MAX as f64 / 100.0;
    assert_eq!(created.body["total"].as_f64(), Some(saturated));

    let id = created.body["id"].as_i64().unwrap();
    let fetched = get(&app, &format!("/api/orders/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["total"].as_f64(), Some(saturated));

    let cashier = get(&app, "/api/cashiers/1").await;
    assert_eq!(cashier.status, StatusCode::OK);
    assert_eq!(cashier.body["orders"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_order_removes_it() {
    let app = app().await;

    let reply = send(&app, Method::DELETE, "/api/orders/2", None).await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);

    assert_eq!(ids(&get(&app, "/api/orders").await.body), [1]);
    assert_eq!(get(&app, "/api/orders/2").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_order_is_404() {
    let app = app().await;
    let reply = send(&app, Method::DELETE, "/api/orders/999", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn product_list_includes_category() {
    let app = app().await;
    let reply = get(&app, "/api/products").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        product_names(&reply.body),
        ["Cola", "Chips", "Paper Towels", "Water Bottle"]
    );
    assert_eq!(reply.body[2]["category"]["categoryName"], "Household");
    assert_eq!(reply.body[2]["price"].as_f64(), Some(2.75));
}

#[tokio::test]
async fn product_search_is_case_insensitive_on_name_or_category() {
    let app = app().await;

    assert_eq!(product_names(&get(&app, "/api/products?search=CHIP").await.body), ["Chips"]);
    assert_eq!(product_names(&get(&app, "/api/products?search=snack").await.body), ["Chips"]);
    assert_eq!(
        product_names(&get(&app, "/api/products?search=bEvErAgEs").await.body),
        ["Cola", "Water Bottle"]
    );
    assert_eq!(get(&app, "/api/products?search=zzz").await.body, json!([]));
    assert_eq!(product_names(&get(&app, "/api/products?search=").await.body).len(), 4);
}

#[tokio::test]
async fn create_product_returns_shallow_transfer() {
    let app = app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "productName": "Pretzels",
            "price": 2.25,
            "brand": "Twisty",
            "categoryId": 2
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.location.as_deref(), Some("/api/products/5"));
    assert_eq!(reply.body["id"], 5);
    assert_eq!(reply.body["price"].as_f64(), Some(2.25));
    assert!(reply.body.get("category").is_none());
}

#[tokio::test]
async fn create_product_with_unknown_category_is_500() {
    let app = app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "productName": "Ghost",
            "price": 1.0,
            "brand": "None",
            "categoryId": 99
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn update_product_is_visible_in_search() {
    let app = app().await;
    let reply = send(
        &app,
        Method::PUT,
        "/api/products/2",
        Some(json!({
            "productName": "Kettle Chips",
            "price": 1.75,
            "brand": "Crunchies",
            "categoryId": 2
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);

    let found = get(&app, "/api/products?search=kettle").await.body;
    assert_eq!(product_names(&found), ["Kettle Chips"]);
    assert_eq!(found[0]["price"].as_f64(), Some(1.75));
}

#[tokio::test]
async fn update_missing_product_is_404() {
    let app = app().await;
    let reply = send(
        &app,
        Method::PUT,
        "/api/products/999",
        Some(json!({
            "productName": "Nothing",
            "price": 1.0,
            "brand": "None",
            "categoryId": 1
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_handler() {
    let app = app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "productName": "No price" })),
    )
    .await;

    assert!(reply.status.is_client_error());
    assert!(reply.body.is_string());
    assert_eq!(product_names(&get(&app, "/api/products").await.body).len(), 4);
}

// =============================================================================
// Cashiers
// =============================================================================

#[tokio::test]
async fn cashier_list_is_shallow_with_full_name() {
    let app = app().await;
    let reply = get(&app, "/api/cashiers").await;

    assert_eq!(reply.status, StatusCode::OK);
    let cashiers = reply.body.as_array().unwrap();
    assert_eq!(cashiers.len(), 2);
    assert_eq!(cashiers[0]["fullName"], "Ernie Fairchild");
    assert_eq!(cashiers[1]["fullName"], "Lana Lopez");
    assert!(cashiers[0].get("orders").is_none());
}

#[tokio::test]
async fn cashier_detail_includes_orders_lines_and_products() {
    let app = app().await;
    let reply = get(&app, "/api/cashiers/1").await;

    assert_eq!(reply.status, StatusCode::OK);
    let orders = reply.body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["total"].as_f64(), Some(4.0));
    assert!(orders[0].get("cashier").is_none());

    let line = &orders[0]["orderProducts"][0];
    assert_eq!(line["product"]["productName"], "Cola");
    assert!(line["product"].get("category").is_none());
}

#[tokio::test]
async fn create_cashier_then_fetch() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/cashiers",
        Some(json!({ "firstName": "Sam", "lastName": "Reyes" })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["fullName"], "Sam Reyes");
    assert_eq!(created.location.as_deref(), Some("/api/cashiers/3"));

    let fetched = get(&app, "/api/cashiers/3").await;
    assert_eq!(fetched.body["orders"], json!([]));
    assert_eq!(get(&app, "/api/cashiers/42").await.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn category_detail_includes_products_without_back_reference() {
    let app = app().await;
    let reply = get(&app, "/api/categories/1").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["categoryName"], "Beverages");
    let products = reply.body["products"].as_array().unwrap();
    assert_eq!(product_names(&reply.body["products"]), ["Cola", "Water Bottle"]);
    assert!(products.iter().all(|p| p.get("category").is_none()));

    assert_eq!(get(&app, "/api/categories/9").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_category() {
    let app = app().await;
    let created = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "categoryName": "Dairy" })),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location.as_deref(), Some("/api/categories/4"));
    assert_eq!(ids(&get(&app, "/api/categories").await.body), [1, 2, 3, 4]);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_database_and_migrations() {
    let app = app().await;
    let reply = get(&app, "/api/health").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["status"], "ok");
    assert_eq!(reply.body["database"], "up");
    assert_eq!(
        reply.body["migrations"]["total"],
        reply.body["migrations"]["applied"]
    );
}
