use api_client::HospitalApi;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const ADMIN_EMAIL: &str = "admin@zeecare.test";
pub const ADMIN_PASSWORD: &str = "s3cret-pass";

const SESSION_COOKIE: &str = "adminToken";
const SESSION_TOKEN: &str = "mock-admin-session";

/// Appointment id the mock answers with a bare 500.
pub const BROKEN_ID: &str = "broken";
/// Appointment id the mock answers with an HTML 502 page.
pub const GATEWAY_ID: &str = "gateway";

/// Everything the mock API has stored or been sent.
#[derive(Default)]
pub struct MockData {
    pub appointments: Vec<Value>,
    pub login_bodies: Vec<Value>,
    pub update_bodies: Vec<(String, Value)>,
}

pub type SharedData = Arc<Mutex<MockData>>;

/// A running mock hospital API plus a client pointed at it.
pub struct MockHospital {
    pub api: HospitalApi,
    pub data: SharedData,
}

impl MockHospital {
    /// Log the client in with the seeded admin credentials.
    pub async fn sign_in(&self) {
        let request = shared_types::LoginForm {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            confirm_password: ADMIN_PASSWORD.to_string(),
        }
        .validate()
        .expect("valid login form");
        self.api.login(&request).await.expect("login against mock API");
    }
}

/// Start a mock API seeded with [`seed_appointments`].
pub async fn mock_hospital() -> MockHospital {
    mock_hospital_with(seed_appointments()).await
}

/// Start a mock API on an ephemeral port with the given appointments.
pub async fn mock_hospital_with(appointments: Vec<Value>) -> MockHospital {
    let data: SharedData = Arc::new(Mutex::new(MockData {
        appointments,
        ..Default::default()
    }));

    let router = Router::new()
        .route("/api/v1/user/login", post(login))
        .route("/api/v1/user/admin/me", get(current_admin))
        .route("/api/v1/user/admin/logout", get(logout))
        .route("/api/v1/appointment/getall", get(list_appointments))
        .route("/api/v1/appointment/update/{id}", put(update_appointment))
        .with_state(data.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("mock API address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock API server stopped");
    });

    MockHospital {
        api: HospitalApi::new(format!("http://{addr}/api/v1")),
        data,
    }
}

/// Appointment in the API's wire shape.
pub fn appointment_json(
    id: &str,
    patient: (&str, &str),
    doctor: (&str, &str, &str),
    status: &str,
    has_visited: bool,
) -> Value {
    json!({
        "_id": id,
        "firstName": patient.0,
        "lastName": patient.1,
        "email": format!("{}@patients.test", patient.0.to_lowercase()),
        "appointment_date": "2024-06-12T09:35:00.000Z",
        "department": "Cardiology",
        "doctor": {
            "_id": doctor.0,
            "firstName": doctor.1,
            "lastName": doctor.2,
        },
        "status": status,
        "hasVisited": has_visited,
    })
}

/// Three appointments across two doctors, one of them already accepted.
pub fn seed_appointments() -> Vec<Value> {
    vec![
        appointment_json("a1", ("Ann", "Lee"), ("d1", "Gregory", "House"), "Pending", false),
        appointment_json("a2", ("Ben", "Ortiz"), ("d2", "Meredith", "Grey"), "Accepted", true),
        appointment_json("a3", ("Cara", "Singh"), ("d1", "Gregory", "House"), "Pending", false),
    ]
}

fn has_session(headers: &HeaderMap) -> bool {
    let expected = format!("{SESSION_COOKIE}={SESSION_TOKEN}");
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| pair.trim() == expected)
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn unauthenticated() -> Response {
    error_body(StatusCode::UNAUTHORIZED, "Dashboard User is not authenticated!")
}

async fn login(State(data): State<SharedData>, Json(body): Json<Value>) -> Response {
    data.lock().await.login_bodies.push(body.clone());

    if body["role"] != "Admin" {
        return error_body(StatusCode::BAD_REQUEST, "User Not Found With This Role!");
    }
    if body["email"] != ADMIN_EMAIL || body["password"] != ADMIN_PASSWORD {
        return error_body(StatusCode::BAD_REQUEST, "Invalid Email Or Password!");
    }

    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={SESSION_TOKEN}; Path=/; HttpOnly"),
        )],
        Json(json!({ "success": true, "message": "User Logged In Successfully!" })),
    )
        .into_response()
}

async fn current_admin(headers: HeaderMap) -> Response {
    if !has_session(&headers) {
        return unauthenticated();
    }
    Json(json!({
        "success": true,
        "user": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": ADMIN_EMAIL,
            "role": "Admin",
        }
    }))
    .into_response()
}

async fn logout(headers: HeaderMap) -> Response {
    if !has_session(&headers) {
        return unauthenticated();
    }
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly"),
        )],
        Json(json!({ "success": true, "message": "Admin Logged Out Successfully." })),
    )
        .into_response()
}

async fn list_appointments(State(data): State<SharedData>, headers: HeaderMap) -> Response {
    if !has_session(&headers) {
        return unauthenticated();
    }
    let appointments = data.lock().await.appointments.clone();
    Json(json!({ "success": true, "appointments": appointments })).into_response()
}

async fn update_appointment(
    State(data): State<SharedData>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !has_session(&headers) {
        return unauthenticated();
    }

    let mut data = data.lock().await;
    data.update_bodies.push((id.clone(), body.clone()));

    if id == BROKEN_ID {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if id == GATEWAY_ID {
        return (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response();
    }

    let Some(appointment) = data
        .appointments
        .iter_mut()
        .find(|appointment| appointment["_id"] == id.as_str())
    else {
        return error_body(StatusCode::NOT_FOUND, "Appointment Not Found!");
    };
    appointment["status"] = body["status"].clone();

    Json(json!({
        "success": true,
        "message": "Appointment Status Updated!",
        "appointment": appointment.clone(),
    }))
    .into_response()
}
