//! Validation findings: the value-level record of what is wrong with a draft.
//!
//! A finding is either scoped to one field or to the form as a whole (e.g. a
//! cross-field constraint). A non-empty collection of findings means the
//! submission is invalid.

use serde::Serialize;

/// What a finding is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingScope {
    /// Attributable to a single field.
    Field(&'static str),
    /// Not attributable to one field (form-level).
    Form,
}

/// A single validation failure.
///
/// `code` is a stable message code resolved against the message catalog;
/// `args` are its ordered positional arguments. `rejected` carries the raw
/// submitted text for the offending field so the form can re-display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub scope: FindingScope,
    pub code: &'static str,
    pub args: Vec<i64>,
    pub rejected: Option<String>,
}

impl Finding {
    pub fn field(name: &'static str, code: &'static str) -> Self {
        Self {
            scope: FindingScope::Field(name),
            code,
            args: Vec::new(),
            rejected: None,
        }
    }

    pub fn form(code: &'static str) -> Self {
        Self {
            scope: FindingScope::Form,
            code,
            args: Vec::new(),
            rejected: None,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = i64>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn with_rejected(mut self, raw: impl Into<String>) -> Self {
        self.rejected = Some(raw.into());
        self
    }

    /// Field name this finding is attached to, if field-scoped.
    pub fn field_name(&self) -> Option<&'static str> {
        match self.scope {
            FindingScope::Field(name) => Some(name),
            FindingScope::Form => None,
        }
    }

    pub fn is_form_level(&self) -> bool {
        matches!(self.scope, FindingScope::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_findings_know_their_field() {
        let f = Finding::field("price", "range").with_args([1000, 1_000_000]);
        assert_eq!(f.field_name(), Some("price"));
        assert!(!f.is_form_level());
        assert_eq!(f.args, vec![1000, 1_000_000]);
    }

    #[test]
    fn form_findings_have_no_field() {
        let f = Finding::form("totalPriceMin").with_args([10_000, 100]);
        assert_eq!(f.field_name(), None);
        assert!(f.is_form_level());
    }
}
