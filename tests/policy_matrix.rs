//! Full decision-table coverage for the question authorization policy, plus
//! end-to-end lifecycle runs through the workflow service.

use chrono::Utc;
use uuid::Uuid;

use quiz_core::models::{AnswerOption, CreateQuestion, UpdateQuestion};
use quiz_core::workflow::QuestionWorkflow;
use quiz_core::{
    Decision, Error, Limits, Question, QuestionAction, QuestionPolicy, QuestionStatus, Role, User,
};

fn user(role: Role) -> User {
    User::new("someone", "someone@example.com", role)
}

fn question(created_by: Uuid, status: QuestionStatus) -> Question {
    let now = Utc::now();
    Question {
        id: Uuid::new_v4(),
        created_by,
        prompt: "Which planet is closest to the sun?".to_string(),
        options: vec![
            AnswerOption {
                text: "Mercury".to_string(),
                correct: true,
            },
            AnswerOption {
                text: "Venus".to_string(),
                correct: false,
            },
        ],
        status,
        created_at: now,
        updated_at: now,
    }
}

/// Expected outcome for every (action, role, ownership) cell, for a question
/// whose status keeps the status column out of play (pending).
fn expected(action: QuestionAction, role: Role, owner: bool) -> bool {
    match (action, role) {
        (QuestionAction::ViewAny, _) => true,
        (QuestionAction::View, Role::Manager | Role::Corrector) => true,
        (QuestionAction::View, Role::General) => owner,
        (QuestionAction::Create, Role::Corrector) => false,
        (QuestionAction::Create, _) => true,
        (QuestionAction::Update, Role::Manager | Role::Corrector) => true,
        (QuestionAction::Update, Role::General) => owner,
        (QuestionAction::Delete, Role::Manager) => true,
        (QuestionAction::Delete, _) => false,
        (QuestionAction::Approve | QuestionAction::Reject, Role::Manager | Role::Corrector) => true,
        (QuestionAction::Approve | QuestionAction::Reject, Role::General) => false,
    }
}

#[test]
fn decision_table_matches_for_every_role_action_and_ownership() {
    for role in [Role::Manager, Role::Corrector, Role::General] {
        for owner in [true, false] {
            let actor = user(role);
            let created_by = if owner { actor.id } else { Uuid::new_v4() };
            let q = question(created_by, QuestionStatus::Pending);

            for action in QuestionAction::ALL {
                let subject = action.requires_question().then_some(&q);
                let decision = QuestionPolicy::decide(action, &actor, subject).unwrap();
                assert_eq!(
                    decision.is_allowed(),
                    expected(action, role, owner),
                    "role={role:?} owner={owner} action={action:?}"
                );
            }
        }
    }
}

#[test]
fn manager_is_allowed_everything_regardless_of_status() {
    let manager = user(Role::Manager);
    for status in [
        QuestionStatus::Pending,
        QuestionStatus::Approved,
        QuestionStatus::Rejected,
    ] {
        let q = question(Uuid::new_v4(), status);
        for action in QuestionAction::ALL {
            let subject = action.requires_question().then_some(&q);
            let decision = QuestionPolicy::decide(action, &manager, subject).unwrap();
            assert!(decision.is_allowed(), "status={status:?} action={action:?}");
        }
    }
}

#[test]
fn corrector_permissions_ignore_ownership_and_status() {
    let corrector = user(Role::Corrector);
    for status in [
        QuestionStatus::Pending,
        QuestionStatus::Approved,
        QuestionStatus::Rejected,
    ] {
        let q = question(Uuid::new_v4(), status);
        assert!(QuestionPolicy::view(&corrector, &q).is_allowed());
        assert!(QuestionPolicy::update(&corrector, &q).is_allowed());
        assert!(QuestionPolicy::approve(&corrector, &q).is_allowed());
        assert!(QuestionPolicy::reject(&corrector, &q).is_allowed());
        assert!(!QuestionPolicy::delete(&corrector, &q).is_allowed());
    }
    assert!(!QuestionPolicy::create(&corrector).is_allowed());
}

#[test]
fn general_update_flips_when_own_question_is_approved() {
    // user{role=general}, question{created_by=user, status=rejected}:
    // update allowed; once approved, update denied.
    let author = user(Role::General);
    let mut q = question(author.id, QuestionStatus::Rejected);
    assert!(QuestionPolicy::update(&author, &q).is_allowed());

    q.status = QuestionStatus::Approved;
    assert_eq!(
        QuestionPolicy::update(&author, &q),
        Decision::Deny {
            reason: quiz_core::policy::DENY_UPDATE_LOCKED
        }
    );
}

#[test]
fn corrector_can_approve_but_never_delete() {
    let corrector = user(Role::Corrector);
    let q = question(Uuid::new_v4(), QuestionStatus::Pending);
    assert!(!QuestionPolicy::delete(&corrector, &q).is_allowed());
    assert!(QuestionPolicy::approve(&corrector, &q).is_allowed());
}

#[test]
fn general_never_touches_a_non_owned_question() {
    let stranger = user(Role::General);
    for status in [
        QuestionStatus::Pending,
        QuestionStatus::Approved,
        QuestionStatus::Rejected,
    ] {
        let q = question(Uuid::new_v4(), status);
        assert!(!QuestionPolicy::view(&stranger, &q).is_allowed());
        assert!(!QuestionPolicy::update(&stranger, &q).is_allowed());
        assert!(!QuestionPolicy::delete(&stranger, &q).is_allowed());
        assert!(!QuestionPolicy::approve(&stranger, &q).is_allowed());
        assert!(!QuestionPolicy::reject(&stranger, &q).is_allowed());
    }
}

#[test]
fn full_lifecycle_author_reject_revise_approve() {
    let wf = QuestionWorkflow::new(Limits::default());
    let author = user(Role::General);
    let corrector = user(Role::Corrector);

    let payload = CreateQuestion {
        prompt: "Which planet is closest to the sun?".to_string(),
        options: vec![
            AnswerOption {
                text: "Mercury".to_string(),
                correct: true,
            },
            AnswerOption {
                text: "Venus".to_string(),
                correct: false,
            },
        ],
    };

    let q = wf.submit(&author, payload).unwrap();
    assert_eq!(q.status, QuestionStatus::Pending);

    let q = wf.reject(&corrector, q, "needs a distractor").unwrap();
    assert_eq!(q.status, QuestionStatus::Rejected);

    let q = wf
        .revise(
            &author,
            q,
            UpdateQuestion {
                prompt: Some("Which planet orbits closest to the sun?".to_string()),
                options: None,
            },
        )
        .unwrap();
    assert_eq!(q.status, QuestionStatus::Pending);

    let q = wf.approve(&corrector, q).unwrap();
    assert_eq!(q.status, QuestionStatus::Approved);

    // Locked for the author now.
    let err = wf
        .revise(&author, q, UpdateQuestion::default())
        .unwrap_err();
    assert!(matches!(err, Error::PermissionDenied { .. }));
}
