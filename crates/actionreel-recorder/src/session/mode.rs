//! Recording modes and the overlay read model.

use actionreel_protocols::AiRequestKind;

/// Base recording or one selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Record,
    Extract,
    AiExtract,
    AiFormFill,
}

impl Mode {
    /// Whether the next pointer event selects an element instead of being
    /// recorded.
    pub fn is_selection(&self) -> bool {
        !matches!(self, Mode::Record)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Record => "Record",
            Mode::Extract => "Data Extract",
            Mode::AiExtract => "AI Extract",
            Mode::AiFormFill => "AI Form Fill",
        }
    }

    pub fn ai_kind(&self) -> Option<AiRequestKind> {
        match self {
            Mode::AiExtract => Some(AiRequestKind::Extract),
            Mode::AiFormFill => Some(AiRequestKind::FormFill),
            _ => None,
        }
    }

    pub(crate) fn from_ai_kind(kind: AiRequestKind) -> Self {
        match kind {
            AiRequestKind::Extract => Mode::AiExtract,
            AiRequestKind::FormFill => Mode::AiFormFill,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
}

/// What the overlay should currently show.
#[derive(Debug, Clone)]
pub struct Overlay<E> {
    pub cursor: Cursor,
    pub status: Option<String>,
    /// Element under the pointer while selecting.
    pub highlight: Option<E>,
    /// Loading message while an AI request is in flight.
    pub loading: Option<String>,
}

impl<E> Default for Overlay<E> {
    fn default() -> Self {
        Self {
            cursor: Cursor::Default,
            status: None,
            highlight: None,
            loading: None,
        }
    }
}
