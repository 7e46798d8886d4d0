use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Review state of an appointment. Only `Pending` may be changed from the
/// dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Accepted,
        AppointmentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Accepted => "Accepted",
            AppointmentStatus::Rejected => "Rejected",
        }
    }

    /// Parse the exact wire spelling. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Once an appointment leaves `Pending` its status is locked in the UI.
    pub fn is_editable(&self) -> bool {
        matches!(self, AppointmentStatus::Pending)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "value-pending",
            AppointmentStatus::Accepted => "value-accepted",
            AppointmentStatus::Rejected => "value-rejected",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Doctor reference embedded in an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl DoctorRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An appointment record as returned by `GET /appointment/getall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Raw timestamp string as stored by the API (ISO-8601 date or datetime).
    #[serde(rename = "appointment_date")]
    pub appointment_date: String,
    pub doctor: DoctorRef,
    pub department: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub has_visited: bool,
}

impl Appointment {
    pub fn patient_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response body of `GET /appointment/getall`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// Request body of `PUT /appointment/update/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

/// Figures shown in the dashboard banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppointmentSummary {
    pub total: usize,
    /// Number of distinct doctor ids across all appointments.
    pub doctors: usize,
}

impl AppointmentSummary {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let doctors: HashSet<&str> = appointments.iter().map(|a| a.doctor.id.as_str()).collect();
        Self {
            total: appointments.len(),
            doctors: doctors.len(),
        }
    }
}

/// Return a new list where only the appointment with `id` carries `status`.
/// All other entries are copied over untouched.
pub fn with_status(
    appointments: &[Appointment],
    id: &str,
    status: AppointmentStatus,
) -> Vec<Appointment> {
    appointments
        .iter()
        .map(|a| {
            if a.id == id {
                Appointment {
                    status,
                    ..a.clone()
                }
            } else {
                a.clone()
            }
        })
        .collect()
}
