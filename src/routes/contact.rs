use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use postbox_contact::{
    BannerKind, Field, FormController, FormFields, SubmissionStatus, SubmitError,
};
use serde::Deserialize;
use strum::VariantArray;

use crate::{routes::AppState, template::Template};

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

pub struct BannerView {
    pub kind: String,
    pub message: String,
}

/// Everything the contact form partial needs from a controller
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub banner: Option<BannerView>,
    pub pending: bool,
    pub submit_label: &'static str,
}

impl From<&FormController> for FormView {
    fn from(controller: &FormController) -> Self {
        let fields = Field::VARIANTS
            .iter()
            .map(|field| FieldView {
                name: field.as_ref(),
                label: field.label(),
                input_type: match field {
                    Field::Email => "email",
                    _ => "text",
                },
                multiline: matches!(field, Field::Message),
                value: controller.fields().get(*field).to_owned(),
                error: controller.errors().get(*field).map(str::to_owned),
            })
            .collect();

        let status = controller.status();

        Self {
            fields,
            banner: status.banner().map(|banner| BannerView {
                kind: banner.kind.to_string(),
                message: banner.message.to_owned(),
            }),
            pending: status.is_pending(),
            submit_label: status.submit_label(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: FormView,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: FormView,
}

fn render_form(template: &Template, controller: &FormController) -> Response {
    let form = FormView::from(controller);

    if template.is_fragment() {
        template.render(ContactFormTemplate { form })
    } else {
        template.render(ContactTemplate {
            form,
            year: crate::routes::current_year(),
        })
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    render_form(&template, &FormController::new())
}

/// Posted form values plus the banner the page was showing when it was sent.
#[derive(Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub banner_kind: Option<BannerKind>,
    pub banner_message: Option<String>,
}

impl ContactInput {
    fn into_controller(self) -> FormController {
        let fields = FormFields::new(self.name, self.email, self.message);
        let status = match (self.banner_kind, self.banner_message) {
            (Some(kind), Some(message)) => SubmissionStatus::settled(kind, message),
            _ => SubmissionStatus::Idle,
        };

        FormController::resume(fields, status)
    }
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let mut controller = input.into_controller();

    let status = match controller.submit(app_state.gateway.as_ref()).await {
        Ok(SubmissionStatus::Failed(_)) => StatusCode::BAD_GATEWAY,
        Ok(_) => StatusCode::OK,
        Err(SubmitError::Invalid(count)) => {
            tracing::debug!(count, "contact form rejected by validation");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(SubmitError::AlreadyPending) => StatusCode::CONFLICT,
    };

    (status, render_form(&template, &controller)).into_response()
}
