use axum::{routing::get, Router};

use crate::{
    model::ajax::AJAX_CONTROLLER_PATH,
    server::{
        controller::ajax::{ajax_get, ajax_post},
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new().route(AJAX_CONTROLLER_PATH, get(ajax_get).post(ajax_post))
}
