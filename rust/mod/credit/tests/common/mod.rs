//! In-process mock of the credit platform API.
//!
//! Every endpoint records `METHOD path[?query]` so tests can assert exactly
//! which round trips a flow made.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use credit_admin::{register_handlers, CreditContext};
use credit_client::{ApiClient, StaticToken};
use credit_flux::Flux;

pub const TOTAL_REPORTS: u32 = 25;

#[derive(Default)]
pub struct Backend {
    log: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
    users: Mutex<Vec<Value>>,
    /// Delay `my-reports` page 0 so a later request overtakes it.
    pub slow_first_page: AtomicBool,
}

impl Backend {
    fn record(&self, call: String) {
        self.log.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.log.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    /// JSON bodies of every POST, in order.
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

pub fn user_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "phone": "+91 98765 43210",
        "roles": [role],
        "active": true,
        "emailVerified": true,
        "phoneVerified": false,
        "lastLoginAt": "2024-01-15T14:30:00"
    })
}

pub fn report_json(number: &str, business_id: &str) -> Value {
    json!({
        "id": format!("id-{}", number),
        "reportNumber": number,
        "businessId": business_id,
        "businessName": format!("Business {}", business_id),
        "creditGrade": "A",
        "creditScore": 76,
        "financialHealthScore": 80,
        "paymentBehaviorScore": 72,
        "complianceScore": 90,
        "businessStabilityScore": 61,
        "riskCategory": "LOW",
        "recommendedCreditLimit": 1500000,
        "createdAt": "2024-01-15T14:30:00",
        "reportValidUntil": "2024-04-15T14:30:00",
        "status": "GENERATED"
    })
}

pub fn business_json(id: &str) -> Value {
    json!({
        "id": id,
        "legalName": format!("Business {} Private Limited", id),
        "gstin": "27AAPFU0939F1ZV",
        "gstinVerified": true,
        "pan": "AAPFU0939F",
        "businessType": "PRIVATE_LIMITED",
        "industryCategory": "MANUFACTURING",
        "city": "Surat",
        "state": "Gujarat",
        "annualTurnover": 12500000
    })
}

fn data(v: Value) -> Response {
    Json(json!({ "data": v })).into_response()
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn list_users(State(b): State<Arc<Backend>>) -> Response {
    b.record("GET /api/admin/roles/users".into());
    let users = b.users.lock().unwrap().clone();
    data(Value::Array(users))
}

async fn available_roles(State(b): State<Arc<Backend>>) -> Response {
    b.record("GET /api/admin/roles/available".into());
    data(json!(["ADMIN", "SME_USER", "VIEWER"]))
}

async fn assign_role(State(b): State<Arc<Backend>>, Json(body): Json<Value>) -> Response {
    b.record("POST /api/admin/roles/assign".into());
    b.bodies.lock().unwrap().push(body.clone());

    let user_id = body["userId"].as_str().unwrap_or_default().to_string();
    if user_id == "u-locked" {
        return failure(StatusCode::BAD_REQUEST, "Cannot change the role of a locked account");
    }
    let mut users = b.users.lock().unwrap();
    match users.iter_mut().find(|u| u["id"] == user_id.as_str()) {
        Some(user) => {
            user["roles"] = json!([body["role"].clone()]);
            data(user.clone())
        }
        None => failure(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn toggle_status(
    State(b): State<Arc<Backend>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    b.record(format!("POST /api/admin/roles/toggle-status/{}", id));
    b.bodies.lock().unwrap().push(body);

    let mut users = b.users.lock().unwrap();
    match users.iter_mut().find(|u| u["id"] == id.as_str()) {
        Some(user) => {
            let active = user["active"].as_bool().unwrap_or(false);
            user["active"] = json!(!active);
            data(user.clone())
        }
        None => failure(StatusCode::NOT_FOUND, "User not found"),
    }
}

fn history_record(user_id: &str) -> Value {
    json!({
        "id": format!("h-{}", user_id),
        "userId": user_id,
        "userName": format!("User {}", user_id),
        "oldRole": "VIEWER",
        "newRole": "ADMIN",
        "changedByName": "Ops Admin",
        "reason": "Promoted",
        "changedAt": "2024-01-15T14:30:00"
    })
}

async fn history(State(b): State<Arc<Backend>>) -> Response {
    b.record("GET /api/admin/roles/history".into());
    data(json!([history_record("u-1"), history_record("u-2")]))
}

async fn user_history(State(b): State<Arc<Backend>>, Path(id): Path<String>) -> Response {
    b.record(format!("GET /api/admin/roles/history/{}", id));
    data(json!([history_record(&id)]))
}

async fn my_reports(State(b): State<Arc<Backend>>, Query(q): Query<HashMap<String, u32>>) -> Response {
    let page = q.get("page").copied().unwrap_or(0);
    let size = q.get("size").copied().unwrap_or(10).max(1);
    b.record(format!("GET /api/credit/my-reports?page={}&size={}", page, size));

    if page == 0 && b.slow_first_page.load(Ordering::SeqCst) {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    let total_pages = TOTAL_REPORTS.div_ceil(size);
    let start = page * size;
    let end = (start + size).min(TOTAL_REPORTS);
    let content: Vec<Value> = (start..end)
        .map(|i| report_json(&format!("CR-{:04}", i), "b-1"))
        .collect();
    data(json!({
        "content": content,
        "totalElements": TOTAL_REPORTS,
        "totalPages": total_pages,
        "number": page,
        "size": size,
        "hasNext": page + 1 < total_pages,
        "hasPrevious": page > 0
    }))
}

async fn report_by_number(State(b): State<Arc<Backend>>, Path(number): Path<String>) -> Response {
    b.record(format!("GET /api/credit/report/{}", number));
    if number == "CR-missing" {
        return failure(StatusCode::NOT_FOUND, "Report not found");
    }
    data(report_json(&number, "b-1"))
}

async fn report_by_id(State(b): State<Arc<Backend>>, Path(id): Path<String>) -> Response {
    b.record(format!("GET /api/credit/report/id/{}", id));
    let mut report = report_json("CR-0042", "b-1");
    report["id"] = json!(id);
    data(report)
}

async fn business_history(State(b): State<Arc<Backend>>, Path(id): Path<String>) -> Response {
    b.record(format!("GET /api/credit/business/{}/history", id));
    if id == "b-broken" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "").into_response();
    }
    data(json!([report_json("CR-0001", &id), report_json("CR-0002", &id)]))
}

async fn generate(State(b): State<Arc<Backend>>, Json(body): Json<Value>) -> Response {
    b.record("POST /api/credit/generate".into());
    b.bodies.lock().unwrap().push(body.clone());
    let business_id = body["businessId"].as_str().unwrap_or_default().to_string();
    if business_id == "b-missing" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "validationErrors": { "businessId": "Business does not exist" } })),
        )
            .into_response();
    }
    data(report_json("CR-NEW-0001", &business_id))
}

async fn get_business(State(b): State<Arc<Backend>>, Path(id): Path<String>) -> Response {
    b.record(format!("GET /api/business/{}", id));
    if id == "b-missing" {
        return failure(StatusCode::NOT_FOUND, "Business not found");
    }
    data(business_json(&id))
}

async fn search_business(
    State(b): State<Arc<Backend>>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let query = q.get("query").cloned().unwrap_or_default();
    let page = q.get("page").cloned().unwrap_or_default();
    let size = q.get("size").cloned().unwrap_or_default();
    b.record(format!("GET /api/business/search?query={}&page={}&size={}", query, page, size));
    data(json!({
        "content": [business_json("b-1"), business_json("b-2")],
        "totalElements": 12,
        "totalPages": 2,
        "number": page.parse::<u32>().unwrap_or(0),
        "size": 10,
        "hasNext": page == "0",
        "hasPrevious": page != "0"
    }))
}

/// Start the mock API on a random port. Returns its base URL.
pub async fn start_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    *backend.users.lock().unwrap() = vec![
        user_json("u-1", "Asha Rao", "ADMIN"),
        user_json("u-2", "Vikram Iyer", "VIEWER"),
        user_json("u-locked", "Locked Account", "SME_USER"),
    ];

    let app = Router::new()
        .route("/api/admin/roles/users", get(list_users))
        .route("/api/admin/roles/available", get(available_roles))
        .route("/api/admin/roles/assign", post(assign_role))
        .route("/api/admin/roles/toggle-status/{id}", post(toggle_status))
        .route("/api/admin/roles/history", get(history))
        .route("/api/admin/roles/history/{id}", get(user_history))
        .route("/api/credit/my-reports", get(my_reports))
        .route("/api/credit/report/{number}", get(report_by_number))
        .route("/api/credit/report/id/{id}", get(report_by_id))
        .route("/api/credit/business/{id}/history", get(business_history))
        .route("/api/credit/generate", post(generate))
        .route("/api/business/search", get(search_business))
        .route("/api/business/{id}", get(get_business))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), backend)
}

/// A console wired to `base_url` with ten rows per page.
pub fn console(base_url: &str) -> Flux {
    let client = ApiClient::new(base_url, Arc::new(StaticToken::new("test-token")));
    let flux = Flux::new();
    register_handlers(&flux, Arc::new(CreditContext::new(client, 10)));
    flux
}

/// Mock backend plus a console pointed at it.
pub async fn setup() -> (Flux, Arc<Backend>) {
    let (base, backend) = start_backend().await;
    (console(&base), backend)
}
