//! Command output types handed to the render collaborator.

use std::slice;

/// How a render unit should be presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitKind {
    /// Plain text
    Text,
    /// Plain text describing a failure (red in the web front-end)
    Error,
    /// Preformatted code block with an optional language hint for highlighting
    Code { language: Option<String> },
}

/// A single renderable piece of command output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderUnit {
    pub kind: UnitKind,
    pub text: String,
}

impl RenderUnit {
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            kind: UnitKind::Text,
            text: s.into(),
        }
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self {
            kind: UnitKind::Error,
            text: s.into(),
        }
    }

    /// Create a code block. An empty language hint is stored as `None`.
    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            kind: UnitKind::Code {
                language: (!language.is_empty()).then_some(language),
            },
            text: content.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == UnitKind::Error
    }
}

/// Result of executing one input line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    /// Nothing to show (`cd`, `clear`, `open`, blank input)
    #[default]
    Empty,
    /// A single unit
    Unit(RenderUnit),
    /// Ordered units, one per rendered row
    Sequence(Vec<RenderUnit>),
}

impl Output {
    /// Units in display order. Empty for [`Output::Empty`].
    pub fn units(&self) -> &[RenderUnit] {
        match self {
            Output::Empty => &[],
            Output::Unit(unit) => slice::from_ref(unit),
            Output::Sequence(units) => units,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units().is_empty()
    }

    /// Texts of all units, mostly useful for assertions and plain renderers.
    pub fn texts(&self) -> Vec<&str> {
        self.units().iter().map(|u| u.text.as_str()).collect()
    }
}

impl From<RenderUnit> for Output {
    fn from(unit: RenderUnit) -> Self {
        Output::Unit(unit)
    }
}

impl From<Vec<RenderUnit>> for Output {
    fn from(units: Vec<RenderUnit>) -> Self {
        Output::Sequence(units)
    }
}
