//! Change detection between a working question list and its session snapshot.
use crate::types::{
    ChangeDescriptor, ChangeKind, ChangeSet, SurveyQuestion, UpdatedQuestion, index_by_id,
};

/// Compare the working list against the snapshot taken at edit-session start.
///
/// Questions are matched across the two lists by question id, never by array
/// position. The result is purely descriptive (for a "review changes" view);
/// save planning lives in [`crate::planner`].
///
/// Caller invariants (unique ids, contiguous 1-based `order`) are not
/// validated here.
pub fn detect_changes(current: &[SurveyQuestion], original: &[SurveyQuestion]) -> ChangeSet {
    let original_by_id = index_by_id(original);
    let current_by_id = index_by_id(current);

    let mut changes = ChangeSet::default();

    for question in current {
        if !original_by_id.contains_key(&question.id) {
            changes.added.push(question.clone());
        }
    }

    for question in original {
        if !current_by_id.contains_key(&question.id) {
            changes.removed.push(question.id);
        }
    }

    for question in current {
        let Some(before) = original_by_id.get(&question.id) else {
            continue;
        };
        let descriptors = describe_question(question, before);
        if !descriptors.is_empty() {
            changes.updated.push(UpdatedQuestion {
                question: question.clone(),
                changes: descriptors,
            });
        }
    }

    // A matched question is out of place when its index in the working list
    // no longer lines up with the 1-based order it held in the snapshot.
    changes.reordered = current.iter().enumerate().any(|(index, question)| {
        original_by_id
            .get(&question.id)
            .is_some_and(|before| index as u32 + 1 != before.order)
    });

    changes
}

fn describe_question(current: &SurveyQuestion, original: &SurveyQuestion) -> Vec<ChangeDescriptor> {
    let mut descriptors = Vec::new();

    if current.required != original.required {
        let message = if current.required {
            "Made required"
        } else {
            "Made optional"
        };
        descriptors.push(ChangeDescriptor {
            kind: ChangeKind::SettingsChanged,
            message: message.to_string(),
        });
    }

    if current.order < original.order {
        descriptors.push(ChangeDescriptor {
            kind: ChangeKind::MoveUp,
            message: move_message("up", original.order - current.order),
        });
    } else if current.order > original.order {
        descriptors.push(ChangeDescriptor {
            kind: ChangeKind::MoveDown,
            message: move_message("down", current.order - original.order),
        });
    }

    descriptors
}

fn move_message(direction: &str, delta: u32) -> String {
    let noun = if delta == 1 { "position" } else { "positions" };
    format!("Moved {direction} {delta} {noun}")
}
