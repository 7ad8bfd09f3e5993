use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

/// Header sent by the enhancement script when it only wants the form back
pub const FRAGMENT_HEADER: &str = "x-fragment";

pub struct Template {
    fragment: bool,
}

impl Template {
    pub fn is_fragment(&self) -> bool {
        self.fragment
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "template rendering failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get(FRAGMENT_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        Ok(Template { fragment })
    }
}

#[derive(askama::Template)]
#[template(path = "not-found.html")]
pub struct NotFoundTemplate {
    pub year: i32,
}
