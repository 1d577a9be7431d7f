pub mod health;

use axum::{routing::get, Router};

use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::resume::handlers::{
    create_record, delete_record, get_record, list_records, update_record,
};
use crate::resume::models::{Education, Experience, Record, Skill};
use crate::state::AppState;

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource".to_string())
}

/// The five CRUD routes for one record type, under `/resume/{kind}`.
fn record_routes<T: Record>() -> Router<AppState> {
    let collection = format!("/resume/{}", T::KIND);
    let item = format!("{collection}/:id");

    Router::new()
        .route(
            &collection,
            get(list_records::<T>)
                .post(create_record::<T>)
                .fallback(method_not_allowed),
        )
        .route(
            &item,
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>)
                .fallback(method_not_allowed),
        )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed),
        )
        .route(
            "/test",
            get(health::ping_handler).fallback(method_not_allowed),
        )
        .merge(record_routes::<Experience>())
        .merge(record_routes::<Education>())
        .merge(record_routes::<Skill>())
        .route(
            "/contact",
            get(contact::get_contact)
                .post(contact::put_contact)
                .put(contact::put_contact)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}
