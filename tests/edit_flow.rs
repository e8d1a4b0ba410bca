//! End-to-end edit-session scenarios: detection, planning, and the
//! conceptual round-trip of applying a plan to the snapshot.
use pretty_assertions::assert_eq;
use serde_json::json;
use survey_reconciler::{
    ChangeKind, EditSession, Question, QuestionKind, ReconciliationPlan, SurveyQuestion,
};

fn bank_question(id: i64, kind: QuestionKind) -> Question {
    Question {
        id,
        title: format!("Question {id}"),
        description: None,
        kind,
        allow_comments: kind == QuestionKind::Rating,
    }
}

fn persisted(id: i64, order: u32, required: bool) -> SurveyQuestion {
    SurveyQuestion {
        id,
        required,
        order,
        association_id: Some(id * 100),
    }
}

/// Apply a plan to the snapshot the way the persistence layer would
/// (delete, insert, update) and return the resulting rows in order.
fn apply(plan: &ReconciliationPlan, snapshot: &[SurveyQuestion]) -> Vec<SurveyQuestion> {
    let mut rows: Vec<SurveyQuestion> = snapshot
        .iter()
        .filter(|q| {
            q.association_id
                .is_none_or(|assoc| !plan.to_delete.contains(&assoc))
        })
        .cloned()
        .collect();

    for insert in &plan.to_insert {
        rows.push(SurveyQuestion {
            id: insert.question_id,
            required: insert.required,
            order: insert.order,
            association_id: None,
        });
    }

    for update in &plan.to_update {
        let row = rows
            .iter_mut()
            .find(|q| q.association_id == Some(update.association_id))
            .expect("update targets a row that exists");
        row.order = update.order;
        row.required = update.required;
    }

    rows.sort_by_key(|q| q.order);
    rows
}

#[test]
fn full_editing_session_produces_matching_diff_and_plan() {
    let mut session = EditSession::new(vec![
        persisted(1, 1, false),
        persisted(2, 2, false),
        persisted(3, 3, true),
    ]);

    session.remove_question(2).unwrap();
    session
        .add_question(&bank_question(4, QuestionKind::Text), true)
        .unwrap();
    session.move_question(3, 1).unwrap();
    session.set_required(1, true).unwrap();
    // Working list is now [3, 1, 4].

    let changes = session.changes();
    assert_eq!(changes.removed, vec![2]);
    assert_eq!(changes.added.len(), 1);
    assert_eq!(changes.added[0].id, 4);
    assert!(changes.reordered);

    let updated_ids: Vec<_> = changes.updated.iter().map(|u| u.question.id).collect();
    assert_eq!(updated_ids, vec![3, 1]);

    let plan = session.plan().unwrap();
    assert_eq!(plan.to_delete, vec![200]);
    assert_eq!(plan.to_insert.len(), 1);
    assert_eq!(plan.to_insert[0].question_id, 4);
    assert_eq!(plan.to_insert[0].order, 3);
    assert!(plan.to_insert[0].required);
    // Both surviving persisted questions changed placement or settings.
    assert_eq!(plan.to_update.len(), 2);
}

#[test]
fn applying_the_plan_reproduces_the_working_list() {
    let mut session = EditSession::new(vec![
        persisted(1, 1, false),
        persisted(2, 2, false),
        persisted(3, 3, true),
    ]);
    session.remove_question(1).unwrap();
    session
        .add_question(&bank_question(5, QuestionKind::Boolean), false)
        .unwrap();
    session.move_question(5, 1).unwrap();
    session.set_required(3, false).unwrap();

    let plan = session.plan().unwrap();
    let reconciled = apply(&plan, session.original_questions());

    assert_eq!(reconciled, session.questions());
}

#[test]
fn add_then_remove_within_a_session_is_net_zero() {
    let mut session = EditSession::new(vec![persisted(1, 1, false), persisted(2, 2, false)]);
    session
        .add_question(&bank_question(3, QuestionKind::Rating), true)
        .unwrap();
    session.remove_question(3).unwrap();

    let changes = session.changes();
    assert!(changes.added.is_empty());
    assert!(changes.removed.is_empty());
    assert!(!changes.reordered);
    assert!(changes.is_empty());

    let plan = session.plan().unwrap();
    assert!(plan.is_empty());
}

#[test]
fn toggling_required_back_leaves_no_residue() {
    let mut session = EditSession::new(vec![persisted(1, 1, false)]);
    session.set_required(1, true).unwrap();
    session.set_required(1, false).unwrap();

    assert!(session.changes().updated.is_empty());
    assert!(session.plan().unwrap().to_update.is_empty());
    assert!(!session.is_dirty());
}

#[test]
fn reversing_the_list_reports_moves_but_no_settings_changes() {
    let mut session = EditSession::new(vec![
        persisted(1, 1, false),
        persisted(2, 2, false),
        persisted(3, 3, false),
    ]);
    session.move_question(3, 1).unwrap();
    session.move_question(1, 3).unwrap();
    // Working list is now [3, 2, 1]; question 2 kept order 2.

    let changes = session.changes();
    assert!(changes.reordered);

    let updated_ids: Vec<_> = changes.updated.iter().map(|u| u.question.id).collect();
    assert_eq!(updated_ids, vec![3, 1]);
    assert!(
        changes
            .updated
            .iter()
            .flat_map(|u| &u.changes)
            .all(|c| c.kind != ChangeKind::SettingsChanged)
    );
}

#[test]
fn change_set_wire_shape_matches_the_ui_contract() {
    let mut session = EditSession::new(vec![persisted(1, 1, false), persisted(2, 2, false)]);
    session.move_question(2, 1).unwrap();

    let changes = session.changes();
    let value = serde_json::to_value(&changes).unwrap();

    assert_eq!(
        value["updated"][0],
        json!({
            "id": 2,
            "required": false,
            "order": 1,
            "association_id": 200,
            "changes": [{ "type": "move_up", "message": "Moved up 1 position" }],
        })
    );
    assert_eq!(value["reordered"], json!(true));

    let kind = serde_json::to_value(QuestionKind::Rating).unwrap();
    assert_eq!(kind, json!("rating"));
}
