//! Save planning: the persistence batches that bring stored associations in
//! line with the working question list.
use crate::errors::ReconcileError;
use crate::types::{
    AssociationId, AssociationUpdate, QuestionInsert, ReconciliationPlan, SurveyQuestion,
    index_by_id,
};

/// Compute the insert/update/delete batches for a save.
///
/// Matching is by question id, never by array position. `to_update` entries
/// pair the snapshot's association id with the working item's `order` and
/// `required`; no-op updates are never emitted.
///
/// Returns [`ReconcileError::MissingAssociation`] when a snapshot item that
/// must be deleted or updated carries no persisted association id. That is a
/// data-consistency fault; the caller must not start the transaction.
pub fn plan_reconciliation(
    current: &[SurveyQuestion],
    original: &[SurveyQuestion],
) -> Result<ReconciliationPlan, ReconcileError> {
    let original_by_id = index_by_id(original);
    let current_by_id = index_by_id(current);

    let mut plan = ReconciliationPlan::default();

    for question in original {
        if !current_by_id.contains_key(&question.id) {
            plan.to_delete.push(association_id(question)?);
        }
    }

    for question in current {
        match original_by_id.get(&question.id) {
            None => plan.to_insert.push(QuestionInsert {
                question_id: question.id,
                order: question.order,
                required: question.required,
            }),
            Some(before) => {
                if question.order != before.order || question.required != before.required {
                    plan.to_update.push(AssociationUpdate {
                        association_id: association_id(before)?,
                        order: question.order,
                        required: question.required,
                    });
                }
            }
        }
    }

    Ok(plan)
}

fn association_id(question: &SurveyQuestion) -> Result<AssociationId, ReconcileError> {
    question
        .association_id
        .ok_or(ReconcileError::MissingAssociation {
            question_id: question.id,
        })
}
