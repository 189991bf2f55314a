use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_json)
}

fn panic_details(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    }
}

// The panic hook has already logged the payload and location.
fn panic_to_json(panic: Box<dyn Any + Send + 'static>) -> Response {
    let client_message = if cfg!(debug_assertions) {
        format!("Internal server error: {}", panic_details(panic.as_ref()))
    } else {
        "Internal server error".to_string()
    };

    AppError::internal(client_message).into_response()
}
