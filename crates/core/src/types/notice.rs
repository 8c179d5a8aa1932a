//! Outcome notices reported by the workflows.
//!
//! Workflows never talk to a UI widget. They call [`Report::report`] with a
//! [`Notice`], and the HTTP layer decides how to show it (a toast fragment,
//! in practice).

use serde::Serialize;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The operation completed.
    Success,
    /// Nothing failed, but the visitor should know something.
    Info,
    /// The operation failed.
    Error,
}

impl Severity {
    /// CSS modifier used by the toast templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A single reported outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Create a notice with the given severity.
    #[must_use]
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// Whether this notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Sink for outcome notices.
pub trait Report {
    /// Record one outcome.
    fn report(&mut self, notice: Notice);
}

/// Notices collected while handling one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices(Vec<Notice>);

impl Notices {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any collected notice is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Notice::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.0.iter()
    }
}

impl Report for Notices {
    fn report(&mut self, notice: Notice) {
        self.0.push(notice);
    }
}

impl<'a> IntoIterator for &'a Notices {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_collects_in_order() {
        let mut notices = Notices::new();
        notices.report(Notice::success("Deleted", "Project removed successfully."));
        notices.report(Notice::info("Already Subscribed", "..."));

        assert_eq!(notices.len(), 2);
        assert!(!notices.has_errors());
        let titles: Vec<_> = notices.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Deleted", "Already Subscribed"]);
    }

    #[test]
    fn test_has_errors() {
        let mut notices = Notices::new();
        notices.report(Notice::error("Error", "Failed to delete project."));
        assert!(notices.has_errors());
    }

    #[test]
    fn test_severity_css_modifier() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Error.as_str(), "error");
    }
}
