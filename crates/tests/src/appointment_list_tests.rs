use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, AppointmentStatus, AppointmentSummary};

use crate::common::*;

#[tokio::test]
async fn list_without_session_is_rejected() {
    let mock = mock_hospital().await;

    let err = mock.api.list_appointments().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.notice(), "Dashboard User is not authenticated!");
}

#[tokio::test]
async fn list_after_login_decodes_every_appointment() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let appointments = mock.api.list_appointments().await.unwrap();
    assert_eq!(appointments.len(), 3);

    let first = &appointments[0];
    assert_eq!(first.id, "a1");
    assert_eq!(first.patient_name(), "Ann Lee");
    assert_eq!(first.doctor.full_name(), "Gregory House");
    assert_eq!(first.department, "Cardiology");
    assert_eq!(first.appointment_date, "2024-06-12T09:35:00.000Z");
    assert_eq!(first.status, AppointmentStatus::Pending);
    assert!(!first.has_visited);

    assert_eq!(appointments[1].status, AppointmentStatus::Accepted);
    assert!(appointments[1].has_visited);
}

#[tokio::test]
async fn summary_counts_distinct_doctors() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let appointments = mock.api.list_appointments().await.unwrap();
    let summary = AppointmentSummary::from_appointments(&appointments);
    assert_eq!(summary, AppointmentSummary { total: 3, doctors: 2 });
}

#[tokio::test]
async fn empty_list_is_not_an_error() {
    let mock = mock_hospital_with(Vec::new()).await;
    mock.sign_in().await;

    let appointments = mock.api.list_appointments().await.unwrap();
    assert!(appointments.is_empty());
    assert_eq!(
        AppointmentSummary::from_appointments(&appointments),
        AppointmentSummary::default()
    );
}

#[tokio::test]
async fn missing_status_defaults_to_pending() {
    let mut record = appointment_json(
        "a9",
        ("Dee", "Park"),
        ("d3", "John", "Dorian"),
        "Pending",
        false,
    );
    record.as_object_mut().unwrap().remove("status");
    record.as_object_mut().unwrap().remove("hasVisited");
    let mock = mock_hospital_with(vec![record]).await;
    mock.sign_in().await;

    let appointments = mock.api.list_appointments().await.unwrap();
    assert_eq!(appointments[0].status, AppointmentStatus::Pending);
    assert!(!appointments[0].has_visited);
}
