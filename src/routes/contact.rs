use axum::Json;
use axum::extract::State;

use crate::db;
use crate::error::AppError;
use crate::extractor::ValidatedJson;
use crate::models::{ContactForm, ContactResponse, ContactSubmission};
use crate::state::SharedState;

/// Submit a contact form inquiry.
pub async fn submit(
    State(state): State<SharedState>,
    ValidatedJson(form): ValidatedJson<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = ContactSubmission::from_form(form);

    if let Err(e) = db::contact_submissions::create(state.store.as_ref(), &submission).await {
        tracing::error!("Error submitting contact form: {e}");
        return Err(AppError::Failed(
            "Failed to submit contact form".to_string(),
        ));
    }

    tracing::info!(id = %submission.id, "Contact submission stored");
    Ok(Json(ContactResponse::accepted(submission.id)))
}

/// All contact submissions, capped. Admin-facing.
pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    let submissions = db::contact_submissions::list(state.store.as_ref()).await?;
    Ok(Json(submissions))
}
