use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::{debug, info};

use crate::contact::models::Contact;
use crate::errors::AppError;
use crate::resume::handlers::read_body;
use crate::state::AppState;
use crate::store::SlotWrite;
use crate::validation::validate_create;

const CONTACT_LABEL: &str = "Contact information";

/// GET /contact
pub async fn get_contact(State(state): State<AppState>) -> Result<Json<Contact>, AppError> {
    state
        .store
        .contact
        .get()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(CONTACT_LABEL.to_string()))
}

/// POST /contact and PUT /contact
///
/// Both verbs replace the whole record. The status reports whether a contact
/// existed before: 201 for the first write, 200 for an overwrite.
pub async fn put_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let body = read_body(payload)?;
    let fields = validate_create(&Contact::SCHEMA, &body).map_err(|err| {
        debug!("Rejected contact write: {err}");
        err
    })?;

    let contact = Contact::from_fields(fields);
    let status = match state.store.contact.replace(contact.clone()).await {
        SlotWrite::Created => StatusCode::CREATED,
        SlotWrite::Replaced => StatusCode::OK,
    };
    info!(status = status.as_u16(), "Contact information stored");

    Ok((status, Json(contact)))
}
