use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;
use service::auth::password::PasswordService;
use service::errors::ServiceError;
use service::person::domain::{NewRider, NewUser, PersonCredentials, RiderProfile, UserSummary};
use service::person::repository::mock::MockPersonRepository;
use service::person::PersonRepository;
use service::shipment::repository::mock::MockShipmentRepository;
use service::Services;

struct TestApp {
    router: Router,
    people: Arc<MockPersonRepository>,
    shipments: Arc<MockShipmentRepository>,
}

fn passwords() -> PasswordService {
    PasswordService::new(&configs::AuthConfig { memory_kib: 1024, iterations: 1, parallelism: 1 })
        .expect("argon2 params")
}

fn router_over(people: Arc<dyn PersonRepository>, shipments: Arc<MockShipmentRepository>, timeout: Duration) -> Router {
    let services = Services::new(people, shipments, passwords());
    routes::build_router(ServerState::from(services), tower_http::cors::CorsLayer::very_permissive(), timeout)
}

fn app() -> TestApp {
    let people = Arc::new(MockPersonRepository::default());
    let shipments = Arc::new(MockShipmentRepository::default());
    let router = router_over(people.clone(), shipments.clone(), Duration::from_secs(5));
    TestApp { router, people, shipments }
}

/// Credential lookups that take far longer than any request deadline.
#[derive(Default)]
struct StalledPeople {
    inner: MockPersonRepository,
}

#[async_trait::async_trait]
impl PersonRepository for StalledPeople {
    async fn find_credentials_by_phone(&self, phone: &str) -> Result<Option<PersonCredentials>, ServiceError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        self.inner.find_credentials_by_phone(phone).await
    }
    async fn phone_exists(&self, phone: &str) -> Result<bool, ServiceError> { self.inner.phone_exists(phone).await }
    async fn insert_user(&self, user: NewUser) -> Result<i32, ServiceError> { self.inner.insert_user(user).await }
    async fn insert_rider(&self, rider: NewRider) -> Result<i32, ServiceError> { self.inner.insert_rider(rider).await }
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<UserSummary>, ServiceError> {
        self.inner.find_user_by_phone(phone).await
    }
    async fn user_exists(&self, id: i32) -> Result<bool, ServiceError> { self.inner.user_exists(id).await }
    async fn find_rider(&self, id: i32) -> Result<Option<RiderProfile>, ServiceError> { self.inner.find_rider(id).await }
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder.header("content-type", "application/json").body(Body::from(b)).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body.to_string())).await
    }

    async fn register_user(&self, phone: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/user/register",
                json!({"phone_number": phone, "password": "secret", "name": "Sender", "address": "1 Main Rd"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

#[tokio::test]
async fn health_and_openapi() {
    let app = app();
    let (status, body) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = app.send("GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/create-delivery"].is_object());
}

#[tokio::test]
async fn rider_register_login_flow() {
    let app = app();
    let (status, body) = app
        .post(
            "/api/rider/register",
            json!({"phone_number": "0811111111", "password": "p@ss", "name": "A", "license_plate": "XYZ-1"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].clone();
    assert!(id.is_number());
    assert!(body["message"].is_string());

    let (status, body) = app.post("/api/auth/login", json!({"phone_number": "0811111111", "password": "p@ss"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "type": "rider"}));

    let (wrong_status, wrong) =
        app.post("/api/auth/login", json!({"phone_number": "0811111111", "password": "nope"})).await;
    let (unknown_status, unknown) =
        app.post("/api/auth/login", json!({"phone_number": "0800000000", "password": "p@ss"})).await;
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
    assert_eq!(wrong["error"], "invalid credentials");

    let (status, body) = app.send("POST", &format!("/get/rider/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"license_plate": "XYZ-1"}));
}

#[tokio::test]
async fn duplicate_phone_is_conflict_across_roles() {
    let app = app();
    app.register_user("0822222222").await;
    let (status, body) = app
        .post(
            "/api/rider/register",
            json!({"phone_number": "0822222222", "password": "x", "name": "R", "license_plate": "P-1"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn bad_requests() {
    let app = app();
    // missing license_plate
    let (status, _) = app.post("/api/rider/register", json!({"phone_number": "0811", "password": "x", "name": "A"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // neither address nor gps_location
    let (status, _) =
        app.post("/api/user/register", json!({"phone_number": "0833", "password": "x", "name": "U"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // not JSON at all
    let (status, body) = app.send("POST", "/api/auth/login", Some("{nope".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    // non-numeric path parameter
    let (status, _) = app.send("POST", "/get/list_user_send/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.post("/search-user", json!({"phone": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delivery_create_and_list() {
    let app = app();
    let sender = app.register_user("0811111111").await;
    let receiver = app.register_user("0822222222").await;

    let (status, body) = app.post("/create-delivery", json!({"sender_id": sender, "items": [{"description": "box"}]})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].is_string());
    let first = body["shipment_id"].as_i64().unwrap();

    let (status, _) = app
        .post(
            "/create-delivery",
            json!({"sender_id": sender, "receiver_phone": "0822222222",
                   "items": [{"description": "a", "image": "img/a.png"}, {"description": "b"}]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = app.send("POST", &format!("/get/list_user_send/{sender}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    let first_view = list.iter().find(|s| s["shipment_id"] == first).unwrap();
    assert_eq!(first_view["receiver_id"], Value::Null);
    assert_eq!(first_view["rider_id"], Value::Null);
    assert_eq!(first_view["status"], "pending_assignment");
    assert_eq!(first_view["items"].as_array().unwrap().len(), 1);
    let second_view = list.iter().find(|s| s["shipment_id"] != first).unwrap();
    assert_eq!(second_view["receiver_id"], receiver);
    assert_eq!(second_view["items"][0]["image"], "img/a.png");

    let (status, body) = app.post("/search-user", json!({"phone": "0822222222"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"receiver_id": receiver, "receiver_name": "Sender"}));
}

#[tokio::test]
async fn delivery_failures() {
    let app = app();
    let sender = app.register_user("0811111111").await;

    let (status, _) = app.post("/create-delivery", json!({"sender_id": sender, "items": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post("/create-delivery", json!({"sender_id": sender, "receiver_phone": "0899999999", "items": [{"description": "x"}]}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Receiver not found");

    let (status, body) = app.send("POST", &format!("/get/list_user_send/{sender}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No shipments found for this sender");

    app.shipments.fail_on_item(0);
    let (status, body) = app.post("/create-delivery", json!({"sender_id": sender, "items": [{"description": "x"}]})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
    assert_eq!(app.shipments.counts(), (0, 0));
}

#[tokio::test]
async fn slow_request_hits_deadline() {
    let app = TestApp {
        router: router_over(
            Arc::new(StalledPeople::default()),
            Arc::new(MockShipmentRepository::default()),
            Duration::from_millis(50),
        ),
        people: Arc::new(MockPersonRepository::default()),
        shipments: Arc::new(MockShipmentRepository::default()),
    };
    let (status, _) = app.post("/api/auth/login", json!({"phone_number": "0811111111", "password": "p@ss"})).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);

    // routes that never touch the slow lookup are unaffected
    let (status, _) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn oversized_optional_fields_are_400() {
    let app = app();
    let (status, body) = app
        .post(
            "/api/user/register",
            json!({"phone_number": "0855", "password": "x", "name": "U", "address": "a".repeat(600), "profile_image": "i".repeat(600)}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
    assert!(body["error"].as_str().unwrap_or_default().contains("longer than"), "{body}");

    let sender = app.register_user("0866").await;
    let (status, _) = app
        .post("/create-delivery", json!({"sender_id": sender, "items": [{"description": "box", "image": "i".repeat(513)}]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.shipments.counts(), (0, 0));
}

#[tokio::test]
async fn storage_outage_is_500_except_login() {
    let app = app();
    app.people.set_unavailable(true);
    let (status, _) = app
        .post("/api/user/register", json!({"phone_number": "0844", "password": "x", "name": "U", "gps_location": "1,2"}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (status, _) = app.post("/api/auth/login", json!({"phone_number": "0844", "password": "x"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
