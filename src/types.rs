//! Data model shared by the change detector and the reconciliation planner.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a question in the question bank.
pub type QuestionId = i64;

/// Identifier of a persisted question-to-template association row.
pub type AssociationId = i64;

/// The kind of answer a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Rating,
    Boolean,
}

/// A question as it exists in the bank, independent of any template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: Option<String>,
    pub kind: QuestionKind,
    /// Whether respondents may attach a free-form comment to their answer.
    pub allow_comments: bool,
}

/// A question placed in a survey template.
///
/// `order` is 1-based and kept contiguous by the edit session.
/// `association_id` is present only for placements that already exist in
/// storage; questions added during the current session carry `None` until
/// the save's insert batch runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: QuestionId,
    pub required: bool,
    pub order: u32,
    pub association_id: Option<AssociationId>,
}

/// Change classification attached to an updated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    MoveUp,
    MoveDown,
    SettingsChanged,
}

/// One detected difference on a question present in both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDescriptor {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub message: String,
}

/// A question present in both lists together with its differences.
///
/// Only produced when at least one descriptor exists; unchanged questions
/// never appear in a [`ChangeSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedQuestion {
    #[serde(flatten)]
    pub question: SurveyQuestion,
    pub changes: Vec<ChangeDescriptor>,
}

/// Structured diff between the working question list and its snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub added: Vec<SurveyQuestion>,
    pub removed: Vec<QuestionId>,
    pub updated: Vec<UpdatedQuestion>,
    pub reordered: bool,
}

impl ChangeSet {
    /// True when saving would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty() && !self.reordered
    }
}

/// A new association row to create on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionInsert {
    pub question_id: QuestionId,
    pub order: u32,
    pub required: bool,
}

/// An existing association row whose placement or settings changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationUpdate {
    pub association_id: AssociationId,
    pub order: u32,
    pub required: bool,
}

/// The persistence batches needed to make stored associations match the
/// working list.
///
/// The caller applies deletes, then inserts, then updates, all inside one
/// transaction; a partial failure must leave storage untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationPlan {
    pub to_insert: Vec<QuestionInsert>,
    pub to_update: Vec<AssociationUpdate>,
    pub to_delete: Vec<AssociationId>,
}

impl ReconciliationPlan {
    /// True when there is nothing to persist.
    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_update.is_empty() && self.to_delete.is_empty()
    }
}

/// Index a question list by question id, preserving list order.
pub(crate) fn index_by_id(questions: &[SurveyQuestion]) -> IndexMap<QuestionId, &SurveyQuestion> {
    questions.iter().map(|q| (q.id, q)).collect()
}
