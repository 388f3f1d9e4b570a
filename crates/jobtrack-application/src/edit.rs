//! Edit flow state.

use jobtrack_core::application::ApplicationDraft;

/// Whether a record is open for editing, and its scratch copy if so.
///
/// Only one record can be edited at a time. Opening another record while
/// editing replaces the target and discards the previous scratch copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        id: u64,
        draft: ApplicationDraft,
    },
}

impl EditState {
    pub fn editing_id(&self) -> Option<u64> {
        match self {
            EditState::Idle => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&ApplicationDraft> {
        match self {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }
}
