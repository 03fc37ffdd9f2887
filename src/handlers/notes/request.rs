//! Note request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NOTE_LENGTH;

/// Save note request
#[derive(Debug, Deserialize, Validate)]
pub struct SaveNoteRequest {
    #[validate(length(max = MAX_NOTE_LENGTH))]
    pub note: String,
}
