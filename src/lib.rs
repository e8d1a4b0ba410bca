//! Change tracking and save planning for survey-template question lists.
//!
//! An [`EditSession`] snapshots a template's persisted question list when the
//! user enters edit mode, applies their edits (add, remove, reorder, toggle
//! the required flag) while keeping each question's 1-based `order`
//! contiguous, and exposes two pure views over the result:
//!
//! * [`detect_changes`] — a [`ChangeSet`] describing what changed, for
//!   display (badges, tooltips, a "review changes" panel).
//! * [`plan_reconciliation`] — a [`ReconciliationPlan`] with the insert,
//!   update, and delete batches a persistence layer must apply in a single
//!   transaction to bring stored associations in line with the working list.
//!
//! Both views match questions across the two lists by question id, never by
//! array position, since positions shift on every reorder. The crate performs
//! no I/O; executing the plan (and owning the transaction boundary) is the
//! caller's job.
mod changes;
mod errors;
mod planner;
mod session;
mod types;

pub use changes::detect_changes;
pub use errors::ReconcileError;
pub use planner::plan_reconciliation;
pub use session::EditSession;
pub use types::{
    AssociationId, AssociationUpdate, ChangeDescriptor, ChangeKind, ChangeSet, Question,
    QuestionId, QuestionInsert, QuestionKind, ReconciliationPlan, SurveyQuestion, UpdatedQuestion,
};
