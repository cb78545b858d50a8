//! End-to-end registration scenarios against the stub registry.

mod common;

use chrono::{Local, Months};
use serde_json::json;

use common::{Stub, StubState};
use evoting_client::workflow::{RegistrationFlow, RegistrationForm};

fn jean_form() -> RegistrationForm {
    RegistrationForm {
        cin: "AB123456".to_string(),
        first_name: "Jean".to_string(),
        last_name: "Dupont".to_string(),
        email: "jean.dupont@example.com".to_string(),
        date_of_birth: "1990-04-02".to_string(),
        address: "12 rue de la Paix".to_string(),
    }
}

#[tokio::test]
async fn successful_registration_greets_and_clears_the_form() {
    let stub = Stub::spawn(StubState::default()).await;
    let mut flow = RegistrationFlow::new(stub.services().voters);
    *flow.form_mut() = jean_form();

    let notice = flow.submit().await;

    assert!(notice.is_success(), "{notice:?}");
    assert!(notice.text.contains("Jean"));
    assert_eq!(*flow.form(), RegistrationForm::default());

    let state = stub.state.lock().unwrap();
    assert_eq!(state.registrations.len(), 1);
    let sent = &state.registrations[0];
    assert_eq!(sent["cin"], "AB123456");
    assert_eq!(sent["firstName"], "Jean");
    assert_eq!(sent["dateOfBirth"], "1990-04-02");
    // Implicit defaults the client must fill in.
    assert_eq!(sent["isActive"], true);
    assert_eq!(sent["hasVoted"], false);
}

#[tokio::test]
async fn duplicate_cin_gets_the_dedicated_message() {
    let stub = Stub::spawn(StubState::default()).await;
    let mut flow = RegistrationFlow::new(stub.services().voters);

    *flow.form_mut() = jean_form();
    assert!(flow.submit().await.is_success());

    // The second attempt trips the registry's unique index.
    stub.state.lock().unwrap().registration_rejection = Some((
        409,
        json!({ "message": "could not execute statement; constraint [uk_voter_cin]" }),
    ));
    *flow.form_mut() = jean_form();
    let notice = flow.submit().await;

    assert!(!notice.is_success());
    assert_eq!(notice.text, "This CIN is already registered.");
}

#[tokio::test]
async fn other_rejections_display_the_backend_message() {
    let stub = Stub::spawn(StubState::default()).await;
    stub.state.lock().unwrap().registration_rejection =
        Some((500, json!({ "error": "registry exploded" })));

    let mut flow = RegistrationFlow::new(stub.services().voters);
    *flow.form_mut() = jean_form();
    let notice = flow.submit().await;

    assert!(!notice.is_success());
    assert_eq!(notice.text, "registry exploded");
    // The form is kept so the user can correct and resubmit.
    assert_eq!(*flow.form(), jean_form());
}

#[tokio::test]
async fn client_side_rejections_never_reach_the_wire() {
    let stub = Stub::spawn(StubState::default()).await;
    let mut flow = RegistrationFlow::new(stub.services().voters);

    // Malformed CIN.
    *flow.form_mut() = RegistrationForm {
        cin: "ab123456".to_string(),
        ..jean_form()
    };
    assert!(!flow.submit().await.is_success());

    // Sixteen years old.
    let minor_dob = Local::now()
        .date_naive()
        .checked_sub_months(Months::new(12 * 16))
        .unwrap();
    *flow.form_mut() = RegistrationForm {
        date_of_birth: minor_dob.to_string(),
        ..jean_form()
    };
    assert!(!flow.submit().await.is_success());

    // Missing required field.
    *flow.form_mut() = RegistrationForm {
        address: String::new(),
        ..jean_form()
    };
    assert!(!flow.submit().await.is_success());

    assert!(stub.state.lock().unwrap().registrations.is_empty());
}
