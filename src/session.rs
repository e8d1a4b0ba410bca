//! In-memory edit session over a survey template's question list.
use log::debug;

use crate::changes::detect_changes;
use crate::errors::ReconcileError;
use crate::planner::plan_reconciliation;
use crate::types::{ChangeSet, Question, QuestionId, ReconciliationPlan, SurveyQuestion};

/// Working state for one editing session.
///
/// The snapshot taken at construction is immutable for the session's
/// lifetime and represents the last known persisted state. All mutations
/// target the working list; `order` is renumbered to stay contiguous from 1
/// after every structural change, so a question's `order` always equals its
/// index + 1.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Vec<SurveyQuestion>,
    questions: Vec<SurveyQuestion>,
}

impl EditSession {
    /// Begin a session from the persisted question list.
    ///
    /// Items are sorted by their stored `order` and renumbered, so the
    /// contiguous-order invariant holds even if storage had gaps.
    pub fn new(mut persisted: Vec<SurveyQuestion>) -> Self {
        persisted.sort_by_key(|q| q.order);
        renumber(&mut persisted);
        EditSession {
            questions: persisted.clone(),
            original: persisted,
        }
    }

    /// The working list, in display order.
    pub fn questions(&self) -> &[SurveyQuestion] {
        &self.questions
    }

    /// The snapshot captured when the session began.
    pub fn original_questions(&self) -> &[SurveyQuestion] {
        &self.original
    }

    /// Append a question from the bank at the end of the list.
    ///
    /// A question can appear at most once per template.
    pub fn add_question(&mut self, question: &Question, required: bool) -> Result<(), ReconcileError> {
        if self.position_of(question.id).is_some() {
            return Err(ReconcileError::DuplicateQuestion { id: question.id });
        }
        self.questions.push(SurveyQuestion {
            id: question.id,
            required,
            order: self.questions.len() as u32 + 1,
            association_id: None,
        });
        debug!(
            "added question {} at position {}",
            question.id,
            self.questions.len()
        );
        Ok(())
    }

    /// Remove a question; everything after it shifts up by one.
    pub fn remove_question(&mut self, id: QuestionId) -> Result<(), ReconcileError> {
        let index = self
            .position_of(id)
            .ok_or(ReconcileError::UnknownQuestion { id })?;
        self.questions.remove(index);
        renumber(&mut self.questions);
        debug!("removed question {id}");
        Ok(())
    }

    /// Move a question to a 1-based position.
    pub fn move_question(&mut self, id: QuestionId, position: u32) -> Result<(), ReconcileError> {
        let index = self
            .position_of(id)
            .ok_or(ReconcileError::UnknownQuestion { id })?;
        if position == 0 || position as usize > self.questions.len() {
            return Err(ReconcileError::PositionOutOfRange {
                position,
                len: self.questions.len(),
            });
        }
        let question = self.questions.remove(index);
        self.questions.insert(position as usize - 1, question);
        renumber(&mut self.questions);
        debug!("moved question {id} to position {position}");
        Ok(())
    }

    /// Change whether an answer to the question is mandatory.
    pub fn set_required(&mut self, id: QuestionId, required: bool) -> Result<(), ReconcileError> {
        let index = self
            .position_of(id)
            .ok_or(ReconcileError::UnknownQuestion { id })?;
        self.questions[index].required = required;
        Ok(())
    }

    /// Structured diff against the snapshot, for a "review changes" view.
    ///
    /// Pure and cheap; safe to call on every render.
    pub fn changes(&self) -> ChangeSet {
        detect_changes(&self.questions, &self.original)
    }

    /// True when saving would change persisted state.
    pub fn is_dirty(&self) -> bool {
        !self.changes().is_empty()
    }

    /// The persistence batches for the caller to apply in one transaction.
    ///
    /// On failure the caller keeps this session intact so the user can retry.
    pub fn plan(&self) -> Result<ReconciliationPlan, ReconcileError> {
        plan_reconciliation(&self.questions, &self.original)
    }

    /// Discard all edits, returning the working list to the snapshot.
    pub fn reset(&mut self) {
        debug!("resetting edit session ({} questions)", self.original.len());
        self.questions = self.original.clone();
    }

    fn position_of(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }
}

fn renumber(questions: &mut [SurveyQuestion]) {
    for (index, question) in questions.iter_mut().enumerate() {
        question.order = index as u32 + 1;
    }
}
