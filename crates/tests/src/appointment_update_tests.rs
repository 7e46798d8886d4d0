use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{with_status, AppErrorKind, AppointmentStatus, FALLBACK_MESSAGE};

use crate::common::*;

#[tokio::test]
async fn update_sends_status_body_and_returns_message() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let resp = mock
        .api
        .update_appointment_status("a1", AppointmentStatus::Accepted)
        .await
        .unwrap();
    assert_eq!(resp.notice_or("updated"), "Appointment Status Updated!");

    let data = mock.data.lock().await;
    assert_eq!(
        data.update_bodies,
        vec![("a1".to_string(), json!({ "status": "Accepted" }))]
    );
}

#[tokio::test]
async fn confirmed_update_matches_refetched_list() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let before = mock.api.list_appointments().await.unwrap();
    mock.api
        .update_appointment_status("a3", AppointmentStatus::Rejected)
        .await
        .unwrap();
    let local = with_status(&before, "a3", AppointmentStatus::Rejected);

    let after = mock.api.list_appointments().await.unwrap();
    assert_eq!(local, after);
    assert_eq!(after[2].status, AppointmentStatus::Rejected);
    assert!(!after[2].status.is_editable());
}

#[tokio::test]
async fn unknown_appointment_surfaces_server_message() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let err = mock
        .api
        .update_appointment_status("missing", AppointmentStatus::Accepted)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.notice(), "Appointment Not Found!");
}

#[tokio::test]
async fn empty_error_body_falls_back_to_generic_notice() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let err = mock
        .api
        .update_appointment_status(BROKEN_ID, AppointmentStatus::Rejected)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.notice(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_notice() {
    let mock = mock_hospital().await;
    mock.sign_in().await;

    let err = mock
        .api
        .update_appointment_status(GATEWAY_ID, AppointmentStatus::Accepted)
        .await
        .unwrap_err();
    assert_eq!(err.notice(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn update_without_session_is_rejected() {
    let mock = mock_hospital().await;

    let err = mock
        .api
        .update_appointment_status("a1", AppointmentStatus::Accepted)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(mock.data.lock().await.update_bodies.is_empty());
}
