//! Throwaway in-memory stand-in for the remote REST backend. Serves the
//! same `{ success, data, message }` envelope over the same paths, backed
//! by mutex'd vectors, so the real gateways can be driven end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use base64::Engine;
use serde_json::{json, Value};

use studio_console::app::App;
use studio_console::config::{ApiConfig, SessionConfig};

static SESSION_SEQ: AtomicU64 = AtomicU64::new(0);

pub struct BackendState {
    next_id: AtomicU64,
    pub leads: Mutex<Vec<Value>>,
    pub booked: Mutex<Vec<Value>>,
    pub assigned: Mutex<Vec<Value>>,
    pub employees: Mutex<Vec<Value>>,
    pub bookings: Mutex<Vec<Value>>,
    pub quotation_submissions: Mutex<Vec<Value>>,
    pub bulk_batches: Mutex<Vec<Value>>,
    pub assignments: Mutex<Vec<Value>>,
    pub attendance: Mutex<Vec<Value>>,
    pub requests: Mutex<Vec<Value>>,
    pub approvals: Mutex<Vec<Value>>,
    pub invoices: Mutex<Vec<Value>>,
    pub addons: Mutex<Vec<Value>>,
    pub packages: Mutex<Vec<Value>>,
    pub roles: Mutex<Vec<Value>>,
    pub sent_to_client: Mutex<Vec<u64>>,
    pub sent_for_approval: Mutex<Vec<Value>>,
    /// When set, list endpoints answer `success: false`.
    pub fail_lists: AtomicBool,
    /// When set, list endpoints answer with a non-JSON body.
    pub garbage_lists: AtomicBool,
}

impl BackendState {
    fn new() -> Self {
        BackendState {
            next_id: AtomicU64::new(1),
            leads: Mutex::new(Vec::new()),
            booked: Mutex::new(Vec::new()),
            assigned: Mutex::new(Vec::new()),
            employees: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
            quotation_submissions: Mutex::new(Vec::new()),
            bulk_batches: Mutex::new(Vec::new()),
            assignments: Mutex::new(Vec::new()),
            attendance: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            approvals: Mutex::new(Vec::new()),
            invoices: Mutex::new(Vec::new()),
            addons: Mutex::new(Vec::new()),
            packages: Mutex::new(Vec::new()),
            roles: Mutex::new(Vec::new()),
            sent_to_client: Mutex::new(Vec::new()),
            sent_for_approval: Mutex::new(Vec::new()),
            fail_lists: AtomicBool::new(false),
            garbage_lists: AtomicBool::new(false),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

fn ack() -> Json<Value> {
    Json(json!({ "success": true }))
}

fn rejected(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "message": message }))
}

async fn list_leads(State(state): State<Arc<BackendState>>) -> axum::response::Response {
    if state.garbage_lists.load(Ordering::SeqCst) {
        return "not json at all".into_response();
    }
    if state.fail_lists.load(Ordering::SeqCst) {
        return rejected("Lead listing is down").into_response();
    }
    ok(json!(*state.leads.lock().unwrap())).into_response()
}

async fn add_lead(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let id = state.next_id();
    body["id"] = json!(id);
    body["createdAt"] = json!(chrono::Utc::now().to_rfc3339());
    state.leads.lock().unwrap().push(body.clone());
    ok(body)
}

async fn booked_leads(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.booked.lock().unwrap()))
}

async fn assigned_leads(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.assigned.lock().unwrap()))
}

async fn bulk_update(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.bulk_batches.lock().unwrap().push(body);
    ack()
}

async fn assign_leads(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.assignments.lock().unwrap().push(body);
    ack()
}

async fn book_event(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.bookings.lock().unwrap().push(body);
    ack()
}

async fn quotation_packages(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.quotation_submissions.lock().unwrap().push(body);
    ack()
}

async fn list_employees(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.employees.lock().unwrap()))
}

async fn add_employee(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let id = state.next_id();
    body["id"] = json!(id);
    body["createdAt"] = json!(chrono::Utc::now().to_rfc3339());
    state.employees.lock().unwrap().push(body.clone());
    ok(body)
}

async fn get_employee(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    let employees = state.employees.lock().unwrap();
    match employees.iter().find(|e| e["id"] == json!(id)) {
        Some(employee) => ok(employee.clone()),
        None => rejected("Employee not found"),
    }
}

async fn update_employee(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut employees = state.employees.lock().unwrap();
    match employees.iter_mut().find(|e| e["id"] == json!(id)) {
        Some(slot) => {
            body["id"] = json!(id);
            *slot = body.clone();
            ok(body)
        }
        None => rejected("Employee not found"),
    }
}

async fn delete_employee(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    let mut employees = state.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e["id"] != json!(id));
    if employees.len() == before {
        rejected("Employee not found")
    } else {
        ack()
    }
}

async fn upload_file(mut multipart: Multipart) -> Json<Value> {
    let mut file_name = None;
    let mut media_type = None;
    let mut bytes = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            media_type = field.content_type().map(|s| s.to_string());
            bytes = field.bytes().await.expect("file bytes").to_vec();
        }
    }
    ok(json!({
        "content": base64::engine::general_purpose::STANDARD.encode(&bytes),
        "mediaType": media_type.unwrap_or_default(),
        "fileName": file_name,
    }))
}

async fn attendance_get(
    State(state): State<Arc<BackendState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let employee_id: u64 = params
        .get("employeeId")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let records: Vec<Value> = state
        .attendance
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r["employee_id"] == json!(employee_id))
        .cloned()
        .collect();
    ok(json!(records))
}

async fn punch_in(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let record = json!({
        "id": state.next_id(),
        "employee_id": body["employee_id"],
        "date": chrono::Utc::now().date_naive(),
        "punch_in": chrono::Utc::now().to_rfc3339(),
        "punch_out": null,
        "total_hours": null,
        "status": "Present",
    });
    state.attendance.lock().unwrap().push(record.clone());
    ok(record)
}

async fn punch_out(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut attendance = state.attendance.lock().unwrap();
    match attendance
        .iter_mut()
        .rev()
        .find(|r| r["employee_id"] == body["employee_id"] && r["punch_out"].is_null())
    {
        Some(record) => {
            record["punch_out"] = json!(chrono::Utc::now().to_rfc3339());
            record["total_hours"] = json!("8h 0m");
            ok(record.clone())
        }
        None => rejected("No open attendance record"),
    }
}

async fn list_requests(
    State(state): State<Arc<BackendState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let requests = state.requests.lock().unwrap();
    let filtered: Vec<Value> = match params.get("employeeId").and_then(|v| v.parse::<u64>().ok()) {
        Some(id) => requests
            .iter()
            .filter(|r| r["employeeId"] == json!(id))
            .cloned()
            .collect(),
        None => requests.clone(),
    };
    ok(json!(filtered))
}

async fn add_request(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    body["id"] = json!(state.next_id());
    state.requests.lock().unwrap().push(body.clone());
    ok(body)
}

async fn update_request(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut requests = state.requests.lock().unwrap();
    match requests.iter_mut().find(|r| r["id"] == json!(id)) {
        Some(request) => {
            request["status"] = body["status"].clone();
            ok(request.clone())
        }
        None => rejected("Request not found"),
    }
}

async fn delete_request(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    state.requests.lock().unwrap().retain(|r| r["id"] != json!(id));
    ack()
}

async fn list_addons(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.addons.lock().unwrap()))
}

async fn add_addon(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    body["id"] = json!(state.next_id());
    state.addons.lock().unwrap().push(body.clone());
    ok(body)
}

async fn update_addon(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut addons = state.addons.lock().unwrap();
    match addons.iter_mut().find(|a| a["id"] == body["id"]) {
        Some(slot) => {
            *slot = body.clone();
            ok(body)
        }
        None => rejected("Addon not found"),
    }
}

async fn delete_addon(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut addons = state.addons.lock().unwrap();
    let before = addons.len();
    addons.retain(|a| a["id"] != body["id"]);
    if addons.len() == before {
        rejected("Addon not found")
    } else {
        ack()
    }
}

async fn list_packages(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.packages.lock().unwrap()))
}

async fn create_package(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    body["id"] = json!(state.next_id());
    state.packages.lock().unwrap().push(body.clone());
    ok(body)
}

async fn get_package(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    let packages = state.packages.lock().unwrap();
    match packages.iter().find(|p| p["id"] == json!(id)) {
        Some(package) => ok(package.clone()),
        None => rejected("Package not found"),
    }
}

async fn delete_package(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    state.packages.lock().unwrap().retain(|p| p["id"] != json!(id));
    ack()
}

async fn list_roles(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.roles.lock().unwrap()))
}

async fn add_role(
    State(state): State<Arc<BackendState>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    body["id"] = json!(state.next_id());
    state.roles.lock().unwrap().push(body.clone());
    ok(body)
}

async fn update_role(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut roles = state.roles.lock().unwrap();
    match roles.iter_mut().find(|r| r["id"] == body["id"]) {
        Some(slot) => {
            *slot = body.clone();
            ok(body)
        }
        None => rejected("Role not found"),
    }
}

async fn approval_all(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.approvals.lock().unwrap()))
}

async fn quotation_created(State(state): State<Arc<BackendState>>) -> Json<Value> {
    ok(json!(*state.invoices.lock().unwrap()))
}

async fn send_approval(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.sent_for_approval.lock().unwrap().push(body);
    ack()
}

async fn send_to_client(
    State(state): State<Arc<BackendState>>,
    Path(lead_id): Path<u64>,
) -> Json<Value> {
    state.sent_to_client.lock().unwrap().push(lead_id);
    ack()
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/leads/getAll", get(list_leads))
        .route("/leads/addNew", post(add_lead))
        .route("/leads/booked", get(booked_leads))
        .route("/leads/assigned", get(assigned_leads))
        .route("/leads/updateBulk", put(bulk_update))
        .route("/leads/assign", post(assign_leads))
        .route("/leads/bookEvent", post(book_event))
        .route("/leads/quotationPackages", post(quotation_packages))
        .route("/leads/quotation-created", get(quotation_created))
        .route("/routes/employees", get(list_employees))
        .route("/routes/addEmployee", post(add_employee))
        .route(
            "/routes/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/routes/uploadProfileImage", post(upload_file))
        .route("/routes/uploadAadharCard", post(upload_file))
        .route("/attendance/get", get(attendance_get))
        .route("/attendance/punchIn", post(punch_in))
        .route("/attendance/punchOut", post(punch_out))
        .route("/request", get(list_requests).post(add_request))
        .route("/request/:id", put(update_request))
        .route("/request/leaveReq/:id", delete(delete_request))
        .route("/addons/list", get(list_addons))
        .route("/addons/add", post(add_addon))
        .route("/addons/update", put(update_addon))
        .route("/addons/delete", delete(delete_addon))
        .route("/packages/list", get(list_packages))
        .route("/packages/create", post(create_package))
        .route("/packages/:id", get(get_package))
        .route("/packages/delete/:id", delete(delete_package))
        .route("/roles/list", get(list_roles))
        .route("/roles/add", post(add_role))
        .route("/roles/update", put(update_role))
        .route("/quotation/approvalAll", get(approval_all))
        .route("/quotation/send-approval", post(send_approval))
        .route("/quotation/send-to-client/:lead_id", post(send_to_client))
        .with_state(state)
}

/// Binds the mock backend on an ephemeral port and serves it in the
/// background for the rest of the test.
pub async fn spawn_backend() -> (String, Arc<BackendState>) {
    let state = Arc::new(BackendState::new());
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    (format!("http://{addr}"), state)
}

/// A session store path no other test shares.
pub fn temp_session_config(tag: &str) -> SessionConfig {
    let seq = SESSION_SEQ.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "studio-console-test-{}-{}-{}.json",
        std::process::id(),
        tag,
        seq
    ));
    let _ = std::fs::remove_file(&path);
    SessionConfig { store_path: path }
}

/// A fully wired app pointed at the given mock backend.
pub fn test_app(base_url: &str, tag: &str) -> App {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    App::with_config(&api, &temp_session_config(tag)).expect("build test app")
}

pub fn seed_approval_row(lead_id: u64, status: &str) -> Value {
    json!({
        "lead_id": lead_id,
        "full_name": "Aarav Sharma",
        "email": "aarav@example.com",
        "phone_number": "+91 98400 11223",
        "wedding_type": "wedding",
        "package_name": "Classic",
        "wedding_location": "Chennai",
        "event_id": 11,
        "event_name": "Sharma Wedding",
        "event_date": "2026-11-20T18:00:00Z",
        "payment_amount": "50000",
        "payment_type": "online",
        "total_package_amount": "120000",
        "approval_status": status,
        "packages": [
            {
                "quotation_package_id": 1,
                "service_name": "Candid photography",
                "description": "Two shooters, full day",
                "quantity": 1,
                "price": 80000.0,
                "created_at": null,
            }
        ],
    })
}

pub fn seed_invoice_row(lead_id: u64, status: &str) -> Value {
    json!({
        "lead_id": lead_id,
        "full_name": "Aarav Sharma",
        "email": "aarav@example.com",
        "phone_number": "+91 98400 11223",
        "wedding_type": "wedding",
        "wedding_location": "Chennai",
        "event_id": 11,
        "event_name": "Sharma Wedding",
        "date_time": "2026-11-20T18:00:00Z",
        "highlights": null,
        "event_notes": null,
        "payment_id": 5,
        "payment_type": "online",
        "payment_amount": "50000",
        "payment_date": "2026-11-01",
        "payment_notes": null,
        "approval_status": status,
        "packages": [
            {
                "quotation_package_id": 1,
                "service_name": "Candid photography",
                "description": "Two shooters, full day",
                "quantity": 2,
                "price": 40000.0,
                "created_at": null,
            }
        ],
        "total_package_amount": "80000",
    })
}
