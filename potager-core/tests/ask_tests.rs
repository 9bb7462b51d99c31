//! End-to-end tests for the ask operation against the fake AI client.

use potager_core::ai::{FakeClient, Role};
use potager_core::{ask, AskError, Expert};

#[tokio::test]
async fn test_related_question_uses_domain_prompt() {
    let ai = FakeClient::new().with_default_response("Keep it in the crisper drawer.");
    let answer = ask(&ai, Expert::Vegetable, "How should I store cabbage?")
        .await
        .unwrap();

    assert_eq!(answer.requested, Expert::Vegetable);
    assert_eq!(answer.answered_by, Expert::Vegetable);
    assert!(!answer.downgraded());
    assert_eq!(answer.content, "Keep it in the crisper drawer.");

    // Exactly one call with a system + user message pair
    let requests = ai.requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, Expert::Vegetable.system_prompt());
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "How should I store cabbage?");
}

#[tokio::test]
async fn test_fruit_question_uses_fruit_prompt() {
    let ai = FakeClient::new().with_default_response("Yes, pears ripen off the tree.");
    let answer = ask(&ai, Expert::Fruit, "Do pears need ripening after picking?")
        .await
        .unwrap();

    assert_eq!(answer.answered_by, Expert::Fruit);
    let requests = ai.requests();
    assert_eq!(requests[0].messages[0].content, Expert::Fruit.system_prompt());
}

#[tokio::test]
async fn test_unrelated_question_downgrades_to_general() {
    let ai = FakeClient::new().with_default_response("Use a range-based loop.");
    let answer = ask(&ai, Expert::Vegetable, "How do I write a for loop in Python?")
        .await
        .unwrap();

    assert_eq!(answer.requested, Expert::Vegetable);
    assert_eq!(answer.answered_by, Expert::General);
    assert!(answer.downgraded());

    let requests = ai.requests();
    assert_eq!(requests[0].messages[0].content, Expert::General.system_prompt());
}

#[tokio::test]
async fn test_japanese_question_matches_domain() {
    let ai = FakeClient::new().with_default_response("冷蔵庫で保存してください。");
    let answer = ask(&ai, Expert::Vegetable, "キャベツの保存方法は？")
        .await
        .unwrap();

    assert_eq!(answer.answered_by, Expert::Vegetable);
}

#[tokio::test]
async fn test_empty_question_rejected_before_any_call() {
    let ai = FakeClient::new().with_default_response("should never be used");

    for question in ["", "   ", "\n\t"] {
        let err = ask(&ai, Expert::Fruit, question).await.unwrap_err();
        assert!(matches!(err, AskError::EmptyQuestion));
    }

    assert!(ai.requests().is_empty());
}

#[tokio::test]
async fn test_question_is_trimmed_before_sending() {
    let ai = FakeClient::new().with_default_response("ok");
    ask(&ai, Expert::Vegetable, "  How should I store cabbage?\n")
        .await
        .unwrap();

    let requests = ai.requests();
    assert_eq!(requests[0].messages[1].content, "How should I store cabbage?");
}

#[tokio::test]
async fn test_ai_errors_propagate() {
    // No responses and no default: the fake client errors on every call
    let ai = FakeClient::new();
    let err = ask(&ai, Expert::Vegetable, "Why are my tomato leaves curling?")
        .await
        .unwrap_err();

    assert!(matches!(err, AskError::Ai(_)));
}

#[tokio::test]
async fn test_general_expert_never_downgrades() {
    let ai = FakeClient::new().with_default_response("42");
    let answer = ask(&ai, Expert::General, "What is the answer to everything?")
        .await
        .unwrap();

    assert_eq!(answer.answered_by, Expert::General);
    assert!(!answer.downgraded());
}
