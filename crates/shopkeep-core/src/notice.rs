// ── User-facing notices ──

use strum::Display;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message produced by a mutation, intended for display
/// as a toast or status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_renders_lowercase() {
        assert_eq!(NoticeKind::Success.to_string(), "success");
        assert_eq!(NoticeKind::Error.to_string(), "error");
    }

    #[test]
    fn constructors_set_kind() {
        let ok = Notice::success("Product saved!");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.message, "Product saved!");

        let bad = Notice::error("Something went wrong");
        assert_eq!(bad.kind, NoticeKind::Error);
    }
}
