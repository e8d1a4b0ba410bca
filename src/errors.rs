//! Error type for edit-session actions and save planning.
use thiserror::Error;

use crate::types::QuestionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("question {id} is already part of the template")]
    DuplicateQuestion { id: QuestionId },

    #[error("question {id} is not part of the template")]
    UnknownQuestion { id: QuestionId },

    #[error("position {position} is out of range for a list of {len} question(s)")]
    PositionOutOfRange { position: u32, len: usize },

    #[error("snapshot entry for question {question_id} has no persisted association id")]
    MissingAssociation { question_id: QuestionId },
}
