//! Uniform response shape returned for every dispatch, success or failure.

use serde::Serialize;
use serde_json::Value;

use crate::error::DispatchError;
use crate::operations::OperationDescriptor;

/// One content block. This server only ever produces text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// A response holding exactly one text block.
///
/// `is_error` only serializes when set, so success envelopes keep the plain
/// `{"content": [...]}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Envelope {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ContentBlock::Text { text }],
            is_error,
        }
    }

    /// The text of the single content block.
    pub fn as_text(&self) -> &str {
        match self.content.first() {
            Some(ContentBlock::Text { text }) => text,
            None => "",
        }
    }

    pub fn into_text(self) -> String {
        match self.content.into_iter().next() {
            Some(ContentBlock::Text { text }) => text,
            None => String::new(),
        }
    }
}

/// Render a pipeline result. `descriptor` is `None` only for unknown operations.
pub fn render(
    descriptor: Option<&OperationDescriptor>,
    result: &Result<Value, DispatchError>,
) -> Envelope {
    match result {
        Ok(payload) => match serde_json::to_string_pretty(payload) {
            Ok(text) => Envelope::text(text, false),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize upstream payload");
                Envelope::text(failure_text(descriptor, None), true)
            }
        },
        Err(err) => Envelope::text(failure_text(descriptor, Some(err)), true),
    }
}

fn failure_text(descriptor: Option<&OperationDescriptor>, err: Option<&DispatchError>) -> String {
    match (err, descriptor) {
        (Some(DispatchError::Validation(e)), _) => e.to_string(),
        (Some(e @ DispatchError::UnknownOperation(_)), _) => e.to_string(),
        (_, Some(d)) => d.failure_text.to_string(),
        (Some(e), None) => e.to_string(),
        (None, None) => "Failed to retrieve data".to_string(),
    }
}
