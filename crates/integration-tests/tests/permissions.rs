//! Integration tests for tier enforcement and the admin-set lifecycle.

use glossa_core::{Outcome, Tier};
use glossa_integration_tests::{ADMIN, OPERATOR, TestContext, USER, ok_text};

// ============================================================================
// Tier Enforcement
// ============================================================================

#[tokio::test]
async fn test_user_cannot_verify_and_state_is_unchanged() {
    let ctx = TestContext::new().await;

    ctx.handle(USER, "add", &["apple", "a", "fruit"]).await;

    let outcome = ctx.handle(USER, "verify", &["apple", "a", "fruit"]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);

    // Probe: the meaning is still unverified.
    let text = ok_text(ctx.handle(USER, "search", &["apple"]).await);
    assert_eq!(text, "apple:\n - a fruit (unverified)");
}

#[tokio::test]
async fn test_user_cannot_list_words() {
    let ctx = TestContext::new().await;

    let outcome = ctx.handle(USER, "word_list", &[]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);
}

#[tokio::test]
async fn test_admin_cannot_manage_admins() {
    let ctx = TestContext::with_admin().await;

    let outcome = ctx.handle(ADMIN, "add_admin", &["777"]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);

    let outcome = ctx.handle(ADMIN, "admin_list", &[]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);

    // The denied grant never reached the store.
    assert!(!ctx.is_admin(777.into()).await);
}

#[tokio::test]
async fn test_denial_happens_before_argument_validation() {
    let ctx = TestContext::new().await;

    // Even with malformed arguments, an under-privileged caller sees the
    // denial, not the argument error.
    let outcome = ctx.handle(USER, "verify", &[]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);
}

#[tokio::test]
async fn test_operator_runs_admin_commands() {
    let ctx = TestContext::new().await;

    ctx.handle(USER, "add", &["apple", "a", "fruit"]).await;

    let outcome = ctx.handle(OPERATOR, "verify", &["apple", "a", "fruit"]).await;
    assert!(outcome.is_ok());

    let outcome = ctx.handle(OPERATOR, "word_list", &[]).await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_unknown_command_is_not_found() {
    let ctx = TestContext::new().await;

    let outcome = ctx.handle(USER, "shout", &["loudly"]).await;
    assert_eq!(outcome, Outcome::NotFound);
}

// ============================================================================
// Admin-Set Lifecycle
// ============================================================================

#[tokio::test]
async fn test_admin_grant_and_revoke_lifecycle() {
    let ctx = TestContext::new().await;

    ctx.handle(USER, "add", &["apple", "a", "fruit"]).await;

    // Grant: the target gains the admin tier.
    let outcome = ctx.handle(OPERATOR, "add_admin", &["555"]).await;
    assert_eq!(ok_text(outcome), "Granted admin privilege to 555.");
    assert!(ctx.is_admin(ADMIN).await);

    let outcome = ctx.handle(ADMIN, "verify", &["apple", "a", "fruit"]).await;
    assert!(outcome.is_ok());

    // Revoke: the target drops back to the user tier.
    let outcome = ctx.handle(OPERATOR, "remove_admin", &["555"]).await;
    assert!(outcome.is_ok());
    assert!(!ctx.is_admin(ADMIN).await);

    let outcome = ctx.handle(ADMIN, "verify", &["apple", "a", "fruit"]).await;
    assert_eq!(outcome, Outcome::PermissionDenied);
}

#[tokio::test]
async fn test_add_admin_is_idempotent() {
    let ctx = TestContext::new().await;

    let first = ctx.handle(OPERATOR, "add_admin", &["555"]).await;
    let second = ctx.handle(OPERATOR, "add_admin", &["555"]).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert!(ctx.is_admin(ADMIN).await);

    // Still a set: one membership row.
    let text = ok_text(ctx.handle(OPERATOR, "admin_list", &[]).await);
    assert_eq!(text, "Admins:\n555");
}

#[tokio::test]
async fn test_remove_absent_admin_is_noop_success() {
    let ctx = TestContext::new().await;

    let outcome = ctx.handle(OPERATOR, "remove_admin", &["12345"]).await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_add_admin_rejects_non_numeric_id() {
    let ctx = TestContext::new().await;

    let outcome = ctx.handle(OPERATOR, "add_admin", &["not-a-number"]).await;
    assert!(matches!(outcome, Outcome::InvalidArgument { .. }));

    let outcome = ctx.handle(OPERATOR, "add_admin", &[]).await;
    assert!(matches!(outcome, Outcome::MissingArguments { .. }));
}

#[tokio::test]
async fn test_admin_list_in_grant_order() {
    let ctx = TestContext::new().await;

    ctx.handle(OPERATOR, "add_admin", &["555"]).await;
    ctx.handle(OPERATOR, "add_admin", &["111"]).await;

    let text = ok_text(ctx.handle(OPERATOR, "admin_list", &[]).await);
    assert_eq!(text, "Admins:\n555\n111");
}

// ============================================================================
// Operator Identity
// ============================================================================

#[tokio::test]
async fn test_operator_tier_is_independent_of_admin_set() {
    let ctx = TestContext::new().await;

    // The operator holds the top tier without ever being in the set.
    assert!(!ctx.is_admin(OPERATOR).await);
    let tier = ctx.dispatcher.resolve_tier(OPERATOR).await.unwrap();
    assert_eq!(tier, Tier::Operator);

    // Revoking the operator's id from the set changes nothing.
    let outcome = ctx
        .handle(OPERATOR, "remove_admin", &[&OPERATOR.to_string()])
        .await;
    assert!(outcome.is_ok());

    let tier = ctx.dispatcher.resolve_tier(OPERATOR).await.unwrap();
    assert_eq!(tier, Tier::Operator);
}

#[tokio::test]
async fn test_resolved_tiers() {
    let ctx = TestContext::with_admin().await;

    assert_eq!(
        ctx.dispatcher.resolve_tier(OPERATOR).await.unwrap(),
        Tier::Operator
    );
    assert_eq!(
        ctx.dispatcher.resolve_tier(ADMIN).await.unwrap(),
        Tier::Admin
    );
    assert_eq!(ctx.dispatcher.resolve_tier(USER).await.unwrap(), Tier::User);
}

// ============================================================================
// Menu Composition
// ============================================================================

#[tokio::test]
async fn test_menu_sections_follow_tier() {
    let ctx = TestContext::with_admin().await;

    let user_menu = ok_text(ctx.handle(USER, "menu", &[]).await);
    assert!(user_menu.contains("/add"));
    assert!(!user_menu.contains("Admin commands:"));
    assert!(!user_menu.contains("Operator commands:"));

    let admin_menu = ok_text(ctx.handle(ADMIN, "menu", &[]).await);
    assert!(admin_menu.contains("Admin commands:"));
    assert!(!admin_menu.contains("Operator commands:"));

    let operator_menu = ok_text(ctx.handle(OPERATOR, "menu", &[]).await);
    assert!(operator_menu.contains("Admin commands:"));
    assert!(operator_menu.contains("Operator commands:"));
}
