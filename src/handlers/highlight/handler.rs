//! Highlight handler implementation

use axum::Json;
use cfdesk_highlight::{Span, highlight, highlight_lines};
use validator::Validate;

use crate::error::AppResult;

use super::{
    request::HighlightRequest,
    response::{HighlightResponse, SpanResponse},
};

/// Split source text into highlighted spans
pub async fn highlight_source(
    Json(payload): Json<HighlightRequest>,
) -> AppResult<Json<HighlightResponse>> {
    payload.validate()?;

    let language = payload.language_tag();

    let response = if payload.by_line {
        let lines = highlight_lines(&payload.source, &language)
            .into_iter()
            .map(owned)
            .collect();
        HighlightResponse {
            language,
            spans: None,
            lines: Some(lines),
        }
    } else {
        let spans = owned(highlight(&payload.source, &language));
        HighlightResponse {
            language,
            spans: Some(spans),
            lines: None,
        }
    };

    Ok(Json(response))
}

fn owned(spans: Vec<Span<'_>>) -> Vec<SpanResponse> {
    spans.into_iter().map(SpanResponse::from).collect()
}
