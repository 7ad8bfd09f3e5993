use postbox_contact::{
    BannerKind, Field, FormController, FormFields, GatewayError, NAME_REQUIRED, Receipt,
    SUBMIT_LABEL, SUBMIT_PENDING_LABEL, SubmissionStatus, SubmitError, UNKNOWN_ERROR_MESSAGE,
};

mod helpers;

use helpers::StubGateway;

const THANKS: &str = "Thank you! Your message has been received.";
const NETWORK: &str = "Network error. Please try again later.";

fn filled(fields: FormFields) -> FormController {
    let mut controller = FormController::new();
    controller.edit(Field::Name, fields.name);
    controller.edit(Field::Email, fields.email);
    controller.edit(Field::Message, fields.message);
    controller
}

#[tokio::test]
async fn test_empty_submit_never_calls_gateway() -> anyhow::Result<()> {
    let gateway = StubGateway::succeeding(THANKS);
    let mut controller = FormController::new();

    let result = controller.submit(&gateway).await;

    assert_eq!(result.unwrap_err(), SubmitError::Invalid(3));
    assert!(gateway.calls().is_empty());
    assert_eq!(controller.status(), &SubmissionStatus::Idle);
    assert_eq!(controller.errors().get(Field::Name), Some("Name is required"));
    assert_eq!(controller.errors().get(Field::Email), Some("Email is required"));
    assert_eq!(
        controller.errors().get(Field::Message),
        Some("Message is required")
    );

    Ok(())
}

#[tokio::test]
async fn test_success_clears_fields_and_shows_message() -> anyhow::Result<()> {
    let gateway = StubGateway::succeeding(THANKS);
    let mut controller = filled(helpers::valid_fields());

    let status = controller.submit(&gateway).await?;
    assert_eq!(status, &SubmissionStatus::Succeeded(THANKS.to_owned()));

    assert_eq!(gateway.calls(), vec![helpers::valid_fields()]);
    assert_eq!(controller.fields(), &FormFields::default());
    assert!(controller.errors().is_empty());

    let banner = controller.status().banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, THANKS);

    Ok(())
}

#[tokio::test]
async fn test_rejection_keeps_trimmed_values() -> anyhow::Result<()> {
    let gateway = StubGateway::rejecting(NETWORK);
    let mut controller = filled(FormFields::new(
        "  Test User ",
        "test@example.com",
        "\tThis is a test message  ",
    ));

    let status = controller.submit(&gateway).await?;
    assert_eq!(status, &SubmissionStatus::Failed(NETWORK.to_owned()));

    assert_eq!(gateway.calls(), vec![helpers::valid_fields()]);
    assert_eq!(controller.fields(), &helpers::valid_fields());

    let banner = controller.status().banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, NETWORK);

    Ok(())
}

#[tokio::test]
async fn test_empty_rejection_message_falls_back() -> anyhow::Result<()> {
    let gateway = StubGateway::rejecting("  ");
    let mut controller = filled(helpers::valid_fields());

    let status = controller.submit(&gateway).await?;
    assert_eq!(
        status,
        &SubmissionStatus::Failed(UNKNOWN_ERROR_MESSAGE.to_owned())
    );

    Ok(())
}

#[test]
fn test_edit_clears_only_that_field_error() {
    let mut controller = FormController::new();
    assert!(controller.begin_submit().is_err());
    assert_eq!(controller.errors().len(), 3);

    // Still invalid, yet the error goes away until the next submit.
    controller.edit(Field::Email, "not-an-email");

    assert!(!controller.errors().contains(Field::Email));
    assert_eq!(controller.errors().get(Field::Name), Some(NAME_REQUIRED));
    assert!(controller.errors().contains(Field::Message));
    assert_eq!(controller.fields().email, "not-an-email");
}

#[test]
fn test_resubmit_revalidates_everything() {
    let mut controller = FormController::new();
    let _ = controller.begin_submit();

    controller.edit(Field::Name, "Ada");
    controller.edit(Field::Email, "nope");

    assert_eq!(controller.begin_submit(), Err(SubmitError::Invalid(2)));
    assert!(!controller.errors().contains(Field::Name));
    assert_eq!(
        controller.errors().get(Field::Email),
        Some("Please enter a valid email address")
    );
}

#[test]
fn test_pending_blocks_a_second_submission() {
    let mut controller = filled(helpers::valid_fields());

    let sent = controller.begin_submit().unwrap();
    assert_eq!(sent, helpers::valid_fields());
    assert!(controller.is_pending());
    assert_eq!(controller.status().submit_label(), SUBMIT_PENDING_LABEL);
    assert!(controller.status().banner().is_none());

    assert_eq!(controller.begin_submit(), Err(SubmitError::AlreadyPending));

    controller.resolve(Ok(Receipt::new(THANKS)));
    assert!(!controller.is_pending());
    assert_eq!(controller.status().submit_label(), SUBMIT_LABEL);
}

#[test]
fn test_new_submission_clears_previous_banner() {
    let mut controller = filled(helpers::valid_fields());
    controller.begin_submit().unwrap();
    controller.resolve(Err(GatewayError::new(NETWORK)));
    assert!(controller.status().banner().is_some());

    controller.begin_submit().unwrap();
    assert_eq!(controller.status(), &SubmissionStatus::Pending);
}

#[test]
fn test_invalid_submit_keeps_previous_banner() {
    let mut controller = filled(helpers::valid_fields());
    controller.begin_submit().unwrap();
    controller.resolve(Ok(Receipt::new(THANKS)));

    assert_eq!(controller.begin_submit(), Err(SubmitError::Invalid(3)));
    assert_eq!(
        controller.status(),
        &SubmissionStatus::Succeeded(THANKS.to_owned())
    );
}

#[test]
fn test_resumed_banner_survives_invalid_submit() {
    let status = SubmissionStatus::settled(BannerKind::Error, NETWORK);
    let mut controller = FormController::resume(FormFields::default(), status);

    assert_eq!(controller.begin_submit(), Err(SubmitError::Invalid(3)));
    let banner = controller.status().banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, NETWORK);
}

#[test]
fn test_resume_does_not_carry_pending() {
    let controller = FormController::resume(helpers::valid_fields(), SubmissionStatus::Pending);

    assert_eq!(controller.status(), &SubmissionStatus::Idle);
    assert_eq!(controller.status().submit_label(), SUBMIT_LABEL);
}

#[test]
fn test_late_outcome_is_ignored() {
    let mut controller = filled(helpers::valid_fields());

    controller.resolve(Err(GatewayError::new(NETWORK)));

    assert_eq!(controller.status(), &SubmissionStatus::Idle);
    assert_eq!(controller.fields(), &helpers::valid_fields());
}

#[tokio::test]
async fn test_each_submission_is_independent() -> anyhow::Result<()> {
    let rejecting = StubGateway::rejecting(NETWORK);
    let succeeding = StubGateway::succeeding(THANKS);
    let mut controller = filled(helpers::valid_fields());

    controller.submit(&rejecting).await?;
    controller.edit(Field::Message, "A second, longer attempt");
    controller.submit(&succeeding).await?;

    assert_eq!(rejecting.calls().len(), 1);
    assert_eq!(
        succeeding.calls(),
        vec![FormFields::new(
            "Test User",
            "test@example.com",
            "A second, longer attempt"
        )]
    );
    assert_eq!(
        controller.status(),
        &SubmissionStatus::Succeeded(THANKS.to_owned())
    );
    assert!(controller.fields().is_blank());

    Ok(())
}
