use postbox::config::Config;
use postbox_contact::{Field, FormController, SubmissionStatus, SubmitError};

/// Runs one form lifecycle from the terminal, returns whether the gateway accepted it
pub async fn submit(
    config: Config,
    name: String,
    email: String,
    message: String,
) -> anyhow::Result<bool> {
    let gateway = postbox::gateway::build(&config)?;
    let mut controller = FormController::new();

    controller.edit(Field::Name, name);
    controller.edit(Field::Email, email);
    controller.edit(Field::Message, message);

    eprintln!("Sending...");

    match controller.submit(gateway.as_ref()).await {
        Ok(SubmissionStatus::Succeeded(message)) => {
            println!("{message}");
            Ok(true)
        }
        Ok(SubmissionStatus::Failed(message)) => {
            eprintln!("{message}");
            Ok(false)
        }
        Ok(status) => anyhow::bail!("submission did not settle: {status:?}"),
        Err(SubmitError::Invalid(_)) => {
            for (field, error) in controller.errors().iter() {
                eprintln!("{}: {error}", field.label());
            }
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
