use super::*;

use test_support::{FailingNotifier, RecordingNotifier};

fn dummy_contact() -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: "Roommate".into(),
        phone: "555-0100".into(),
        permanent: false,
    }
}

#[tokio::test]
async fn simulated_notifier_succeeds() {
    let result = SimulatedNotifier.missed_check_in(Uuid::new_v4(), &dummy_contact()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn recording_notifier_captures_dispatch() {
    let notifier = RecordingNotifier::default();
    let session_id = Uuid::new_v4();
    notifier.missed_check_in(session_id, &dummy_contact()).await.unwrap();

    let dispatched = notifier.dispatched.lock().unwrap();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].0, session_id);
    assert_eq!(dispatched[0].1, "555-0100");
}

#[tokio::test]
async fn failing_notifier_reports_dispatch_error() {
    let err = FailingNotifier
        .missed_check_in(Uuid::new_v4(), &dummy_contact())
        .await
        .unwrap_err();
    assert!(matches!(err, NotifyError::Dispatch(_)));
    assert!(err.to_string().contains("simulated outage"));
}
