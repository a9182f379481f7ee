use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, non-blocking message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message sent!".to_string(),
            description: "Thanks for reaching out. I'll get back to you soon!".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error sending message".to_string(),
            description:
                "Something went wrong. Please check your internet connection and try again."
                    .to_string(),
        }
    }

    pub fn busy() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Still sending".to_string(),
            description: "Your previous message is still on its way. Please wait a moment."
                .to_string(),
        }
    }

    pub fn invalid(description: String) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Please check the form".to_string(),
            description,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Error => "toast toast-error",
        }
    }
}
