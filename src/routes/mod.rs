use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use postbox_contact::Gateway;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;

pub use assets::AssetsService;
pub use contact::{BannerView, FieldView, FormView};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
}

pub(crate) fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            year: current_year(),
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(contact::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}
