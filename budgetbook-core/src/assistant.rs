//! Conversational expense entry: chat payloads, proposal confirmation and
//! document/audio uploads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{Budget, Cost, NewCost};
use crate::money::{format_amount, Currency};
use crate::period::Period;

/// What the assistant is told about the selected month.
#[derive(Debug, Clone, Serialize)]
pub struct ChatContext {
    pub year: i32,
    pub month: u32,
    pub budget: Option<Budget>,
    pub costs: Vec<Cost>,
}

impl ChatContext {
    pub fn new(period: Period, budget: Option<Budget>, costs: Vec<Cost>) -> Self {
        Self {
            year: period.year,
            month: period.month,
            budget,
            costs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

/// Expenses the assistant wants to log, awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PendingActions {
    pub tool_name: String,
    #[serde(default)]
    pub tool_args: Vec<NewCost>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub pending_actions: Option<PendingActions>,
}

impl ChatReply {
    /// Text to show for this reply. Proposals that arrive without any
    /// accompanying prose get a generated confirmation question.
    pub fn display_text(&self, currency: Currency) -> String {
        match &self.pending_actions {
            Some(actions) if self.reply.trim().is_empty() => {
                describe_proposals(&actions.tool_args, currency)
            }
            _ => self.reply.clone(),
        }
    }

    pub fn proposals(&self) -> &[NewCost] {
        self.pending_actions
            .as_ref()
            .map(|a| a.tool_args.as_slice())
            .unwrap_or_default()
    }
}

pub fn describe_proposals(expenses: &[NewCost], currency: Currency) -> String {
    let mut lines = vec!["I'm ready to log the following expenses for you:".to_string()];
    for expense in expenses {
        let note = expense
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| format!(" (Note: {})", d))
            .unwrap_or_default();
        lines.push(format!(
            "- {}: {} ({}){}",
            expense.name,
            format_amount(expense.amount, currency),
            expense.cost_type.label(),
            note
        ));
    }
    lines.push("Is this correct?".to_string());
    lines.join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Transcript shown on the assistant page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Which backend service an uploaded file goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Receipts and statements, read into proposed expenses.
    Document,
    /// Voice notes, turned into chat text.
    Audio,
}

impl UploadKind {
    pub fn accepts(&self, mime_type: &str) -> bool {
        let mime = mime_type.trim().to_ascii_lowercase();
        match self {
            UploadKind::Document => mime.starts_with("image/") || mime == "application/pdf",
            UploadKind::Audio => mime.starts_with("audio/"),
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> &'static str {
        match self {
            UploadKind::Document => "image/*,application/pdf",
            UploadKind::Audio => "audio/*",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPayload {
    pub filename: String,
    pub mime_type: String,
    /// Base64 of the file contents.
    pub data: String,
}

impl UploadPayload {
    pub fn new(
        kind: UploadKind,
        filename: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<Self, ValidationError> {
        if !kind.accepts(mime_type) {
            let shown = if mime_type.is_empty() { "Unknown" } else { mime_type };
            return Err(ValidationError::UnsupportedFile(shown.to_string()));
        }
        Ok(Self {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub expenses: Vec<NewCost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_kind_filters_mime() {
        assert!(UploadKind::Document.accepts("image/png"));
        assert!(UploadKind::Document.accepts("application/pdf"));
        assert!(!UploadKind::Document.accepts("audio/webm"));
        assert!(UploadKind::Audio.accepts("Audio/MPEG"));
        assert!(!UploadKind::Audio.accepts(""));
    }

    #[test]
    fn test_upload_payload_encodes_base64() {
        let payload = UploadPayload::new(UploadKind::Audio, "note.webm", "audio/webm", b"hi!")
            .unwrap();
        assert_eq!(payload.data, "aGkh");
    }

    #[test]
    fn test_upload_payload_rejects_wrong_kind() {
        let err = UploadPayload::new(UploadKind::Audio, "r.png", "image/png", b"x").unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedFile("image/png".to_string()));
    }

    #[test]
    fn test_conversation_keeps_order() {
        let mut chat = Conversation::default();
        chat.push_user("I bought coffee");
        chat.push_assistant("Logged?");
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[0].speaker, Speaker::User);
        chat.clear();
        assert!(chat.messages().is_empty());
    }
}
