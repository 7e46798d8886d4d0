use shared_types::{
    AdminProfile, AdminProfileResponse, AppError, Appointment, AppointmentStatus,
    AppointmentsResponse, LoginRequest, MessageResponse, UpdateStatusRequest,
};
use std::sync::OnceLock;

use crate::config::api_settings;
use crate::error_convert::{read_json, ReqwestErrorExt};

static SHARED: OnceLock<HospitalApi> = OnceLock::new();

/// Client for the hospital REST API.
///
/// Every request carries the browser's credentials (cookies) so the API can
/// recognise the admin session. Native builds keep their own cookie store.
#[derive(Debug, Clone)]
pub struct HospitalApi {
    base_url: String,
    http: reqwest::Client,
}

fn build_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to build HTTP client with cookie store");
                reqwest::Client::new()
            })
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

impl HospitalApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_http_client(),
        }
    }

    /// Client pointed at the configured base URL.
    pub fn from_config() -> Self {
        Self::new(api_settings().normalized_base_url())
    }

    /// Process-wide client used by the free functions below.
    pub fn shared() -> &'static HospitalApi {
        SHARED.get_or_init(Self::from_config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = Self::with_credentials(request)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;
        read_json(response).await
    }

    /// `GET /appointment/getall`
    #[tracing::instrument(skip(self))]
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        let resp: AppointmentsResponse = self
            .send(self.http.get(self.url("/appointment/getall")))
            .await?;
        tracing::debug!(count = resp.appointments.len(), "Fetched appointments");
        Ok(resp.appointments)
    }

    /// `PUT /appointment/update/:id`
    #[tracing::instrument(skip(self))]
    pub async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<MessageResponse, AppError> {
        let path = format!("/appointment/update/{}", urlencoding::encode(id));
        let resp: MessageResponse = self
            .send(
                self.http
                    .put(self.url(&path))
                    .json(&UpdateStatusRequest { status }),
            )
            .await?;
        tracing::info!(appointment_id = id, %status, "Appointment status updated");
        Ok(resp)
    }

    /// `POST /user/login`
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<MessageResponse, AppError> {
        self.send(self.http.post(self.url("/user/login")).json(request))
            .await
    }

    /// `GET /user/admin/me`
    #[tracing::instrument(skip(self))]
    pub async fn current_admin(&self) -> Result<AdminProfile, AppError> {
        let resp: AdminProfileResponse = self
            .send(self.http.get(self.url("/user/admin/me")))
            .await?;
        Ok(resp.user)
    }

    /// `GET /user/admin/logout`
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<MessageResponse, AppError> {
        self.send(self.http.get(self.url("/user/admin/logout")))
            .await
    }
}

// ── Shared-client shortcuts used by the views ──────────

pub async fn list_appointments() -> Result<Vec<Appointment>, AppError> {
    HospitalApi::shared().list_appointments().await
}

pub async fn update_appointment_status(
    id: String,
    status: AppointmentStatus,
) -> Result<MessageResponse, AppError> {
    HospitalApi::shared()
        .update_appointment_status(&id, status)
        .await
}

pub async fn login(request: LoginRequest) -> Result<MessageResponse, AppError> {
    HospitalApi::shared().login(&request).await
}

pub async fn current_admin() -> Result<AdminProfile, AppError> {
    HospitalApi::shared().current_admin().await
}

pub async fn logout() -> Result<MessageResponse, AppError> {
    HospitalApi::shared().logout().await
}
