use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use devdine::config::Config;
use devdine::http::{router, AppState};
use devdine::lifecycle::OrderSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(system: &OrderSystem, echo_otp: bool) -> Router {
    let config = Config {
        echo_otp,
        ..Config::default()
    };
    router(AppState::new(system, &config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn order_body() -> Value {
    json!({
        "customerName": "Ann",
        "customerEmail": "ann@example.com",
        "orderType": "eat-here",
        "paymentMethod": "cash",
        "items": [
            { "name": "Rice", "price": 50.0, "quantity": 2 },
            { "name": "Water", "price": 50.0, "quantity": 1 }
        ],
        "totalAmount": 150.0
    })
}

#[tokio::test]
async fn test_create_and_fetch_order() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let (status, body) = send(&app, Method::POST, "/api/orders", Some(order_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["queueNumber"], json!(1));

    let id = body["orderId"].as_str().unwrap().to_string();
    let (status, details) = send(&app, Method::GET, &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["order"]["queue_number"], json!(1));
    assert_eq!(details["order"]["order_type"], json!("eat-here"));
    assert_eq!(details["items"].as_array().unwrap().len(), 2);
    assert_eq!(details["items"][0]["item_name"], json!("Rice"));

    let (_, second) = send(&app, Method::POST, "/api/orders", Some(order_body())).await;
    assert_eq!(second["queueNumber"], json!(2));
}

#[tokio::test]
async fn test_missing_fields_is_bad_request() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let mut body = order_body();
    body.as_object_mut().unwrap().remove("customerEmail");

    let (status, error) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_zero_total_is_accepted() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let mut body = order_body();
    body["totalAmount"] = json!(0);

    let (status, created) = send(&app, Method::POST, "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["queueNumber"], json!(1));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/orders")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let (status, error) = send(&app, Method::GET, "/api/orders/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({ "error": "Order not found" }));

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::GET, &format!("/api/orders/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_by_category() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let (status, all) = send(&app, Method::GET, "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), system.menu.items().len());

    let (_, drinks) = send(&app, Method::GET, "/api/menu?category=drink", None).await;
    let drinks = drinks.as_array().unwrap();
    assert!(!drinks.is_empty());
    assert!(drinks.iter().all(|item| item["category"] == json!("drink")));

    let (status, _) = send(&app, Method::GET, "/api/menu?category=dessert", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_and_verify_otp() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, true);

    let (status, sent) = send(
        &app,
        Method::POST,
        "/api/send-otp",
        Some(json!({ "email": "guest@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent["message"], json!("OTP sent successfully"));
    assert!(sent["expiresAt"].is_string());
    let otp = sent["otp"].as_str().unwrap().to_string();

    let verify = json!({ "email": "guest@example.com", "otp": otp });
    let (status, verified) = send(&app, Method::PUT, "/api/send-otp", Some(verify.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["message"], json!("OTP verified successfully"));

    let (status, again) = send(&app, Method::PUT, "/api/send-otp", Some(verify)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(again, json!({ "error": "OTP not found or expired" }));
}

#[tokio::test]
async fn test_otp_is_hidden_without_echo() {
    let system = OrderSystem::new(&Config::default());
    let app = app(&system, false);

    let (status, sent) = send(
        &app,
        Method::POST,
        "/api/send-otp",
        Some(json!({ "email": "guest@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(sent.get("otp").is_none());

    let (status, error) = send(
        &app,
        Method::POST,
        "/api/send-otp",
        Some(json!({ "email": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "Valid email is required" }));
}
