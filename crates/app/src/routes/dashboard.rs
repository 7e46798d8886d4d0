use crate::auth::use_auth;
use crate::format_helpers::format_appointment_date;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdCircleX};
use dioxus_free_icons::Icon;
use shared_types::{with_status, Appointment, AppointmentStatus, AppointmentSummary};
use std::collections::HashMap;
use shared_ui::{
    notify_error, notify_success, use_toast, Card, CardStat, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
    PageHeader, Skeleton,
};

/// Notice shown when the appointment list cannot be loaded.
const LOAD_FAILED: &str = "Failed to load appointments. Please try again.";

/// Body text of the table when there is nothing to list.
pub const EMPTY_TABLE: &str = "No Appointments Found!";

/// Number of columns in the appointments table.
const COLUMN_COUNT: usize = 6;

/// Status choices sent to the API but not yet confirmed, keyed by appointment id.
pub type InFlight = HashMap<String, AppointmentStatus>;

/// Status a row's select shows, and whether an update for it is in flight.
///
/// Once the entry is dropped the select falls back to the stored status, so a
/// rejected change snaps back to what the server still holds.
fn shown_status(appointment: &Appointment, in_flight: &InFlight) -> (AppointmentStatus, bool) {
    match in_flight.get(&appointment.id) {
        Some(choice) => (*choice, true),
        None => (appointment.status, false),
    }
}

/// Dashboard page: greeting, summary figures and the appointments table.
///
/// Fetches once on mount. Status edits are sent to the API and applied to
/// the local list only after the server confirms them.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut loading = use_signal(|| true);
    let mut in_flight = use_signal(InFlight::new);

    // Scope-owned: if the dashboard unmounts first, the task is dropped and
    // its result never lands.
    use_future(move || async move {
        match api_client::api::list_appointments().await {
            Ok(list) => appointments.set(list),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load appointments");
                notify_error(toast, LOAD_FAILED);
                appointments.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let handle_status_change = move |(id, status): (String, AppointmentStatus)| {
        in_flight.write().insert(id.clone(), status);
        spawn(async move {
            let result = api_client::api::update_appointment_status(id.clone(), status).await;
            in_flight.write().remove(&id);
            match result {
                Ok(resp) => {
                    let updated = with_status(&appointments.read(), &id, status);
                    appointments.set(updated);
                    notify_success(toast, resp.notice_or("Appointment updated"));
                }
                Err(err) => {
                    tracing::warn!(error = %err, appointment_id = %id, "Status update failed");
                    notify_error(toast, err.notice());
                }
            }
        });
    };

    let summary = AppointmentSummary::from_appointments(&appointments.read());
    let admin_name = auth.admin_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        section { class: "dashboard-page",
            SummaryBanner { admin_name, summary }

            Card { class: "appointments-card",
                PageHeader {
                    title: "Appointments",
                    count: (!loading()).then(|| appointments.read().len()),
                }
                if loading() {
                    LoadingPlaceholder {}
                } else {
                    AppointmentTable {
                        appointments: appointments(),
                        in_flight: in_flight(),
                        on_status_change: handle_status_change,
                    }
                }
            }
        }
    }
}

/// Greeting plus the two headline counts.
#[component]
pub fn SummaryBanner(
    #[props(!optional)] admin_name: Option<String>,
    summary: AppointmentSummary,
) -> Element {
    rsx! {
        div { class: "dashboard-banner",
            Card { class: "banner-greeting",
                p { "Hello ," }
                if let Some(name) = admin_name {
                    h5 { class: "banner-admin-name", "{name}" }
                }
                p { class: "banner-subtitle",
                    "Review incoming appointments and confirm or decline pending requests."
                }
            }
            Card { class: "banner-stat",
                CardStat { label: "Total Appointments", value: summary.total.to_string() }
            }
            Card { class: "banner-stat",
                CardStat { label: "Registered Doctors", value: summary.doctors.to_string() }
            }
        }
    }
}

#[component]
fn LoadingPlaceholder() -> Element {
    rsx! {
        div { class: "loading",
            p { "Loading appointments..." }
            Skeleton { lines: 3 }
        }
    }
}

/// Table of appointments, one row each.
#[component]
pub fn AppointmentTable(
    appointments: Vec<Appointment>,
    #[props(default)] in_flight: InFlight,
    on_status_change: EventHandler<(String, AppointmentStatus)>,
) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Patient" }
                DataTableColumn { "Date" }
                DataTableColumn { "Doctor" }
                DataTableColumn { "Department" }
                DataTableColumn { "Status" }
                DataTableColumn { "Visited" }
            }
            DataTableBody {
                if appointments.is_empty() {
                    DataTableEmpty { colspan: COLUMN_COUNT, "{EMPTY_TABLE}" }
                }
                for appointment in appointments.iter() {
                    AppointmentRow {
                        key: "{appointment.id}",
                        appointment: appointment.clone(),
                        in_flight: shown_status(appointment, &in_flight),
                        on_status_change,
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    /// Output of [`shown_status`] for this row.
    in_flight: (AppointmentStatus, bool),
    on_status_change: EventHandler<(String, AppointmentStatus)>,
) -> Element {
    let patient = appointment.patient_name();
    let date = format_appointment_date(&appointment.appointment_date);
    let doctor = appointment.doctor.full_name();
    let department = appointment.department.clone();
    let (shown, saving) = in_flight;

    rsx! {
        DataTableRow {
            DataTableCell { "{patient}" }
            DataTableCell { "{date}" }
            DataTableCell { "{doctor}" }
            DataTableCell { "{department}" }
            DataTableCell {
                StatusSelect {
                    id: appointment.id.clone(),
                    status: appointment.status,
                    shown,
                    saving,
                    on_status_change,
                }
            }
            DataTableCell {
                VisitedIcon { visited: appointment.has_visited }
            }
        }
    }
}

/// Status dropdown. Locked once the appointment is no longer pending, and
/// while a change for it is waiting on the server.
///
/// `status` is the stored value; `shown` is what the control displays.
#[component]
fn StatusSelect(
    id: String,
    status: AppointmentStatus,
    shown: AppointmentStatus,
    saving: bool,
    on_status_change: EventHandler<(String, AppointmentStatus)>,
) -> Element {
    rsx! {
        FormSelect {
            value: shown.as_str().to_string(),
            class: shown.css_class().to_string(),
            disabled: saving || !status.is_editable(),
            onchange: move |evt: Event<FormData>| {
                match AppointmentStatus::parse(&evt.value()) {
                    Some(next) if next != status => on_status_change.call((id.clone(), next)),
                    Some(_) => {}
                    None => tracing::warn!(value = %evt.value(), "Ignoring unknown status"),
                }
            },
            for option_status in AppointmentStatus::ALL {
                option {
                    value: option_status.as_str(),
                    class: option_status.css_class(),
                    selected: option_status == shown,
                    "{option_status}"
                }
            }
        }
    }
}

#[component]
fn VisitedIcon(visited: bool) -> Element {
    if visited {
        rsx! {
            span { class: "visited-icon green", aria_label: "Visited", title: "Visited",
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 20, height: 20 }
            }
        }
    } else {
        rsx! {
            span { class: "visited-icon red", aria_label: "Not Visited", title: "Not Visited",
                Icon::<LdCircleX> { icon: LdCircleX, width: 20, height: 20 }
            }
        }
    }
}
