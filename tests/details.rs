mod helpers;

use crossterm::event::KeyCode;
use feasibility::storage::ProjectId;
use feasibility::ui::build_detail_lines;
use helpers::TestContext;

fn detail_text(ctx: &TestContext, id: ProjectId) -> Vec<String> {
    let project = ctx.app.repository.get(id).unwrap();
    build_detail_lines(project, 80)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[test]
fn test_details_open_on_selected_project() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Enter);

    assert_eq!(ctx.app.detail_state().map(|s| s.id), Some(ProjectId(2)));
    assert!(ctx.screen_contains("Project #2"));
    assert!(ctx.screen_contains("Samsung Electronic Housings"));
    assert!(ctx.screen_contains("c comment"));
    ctx.verify_invariants();
}

#[test]
fn test_detail_body_sections() {
    let ctx = TestContext::new();
    let text = detail_text(&ctx, ProjectId(1)).join("\n");

    assert!(text.contains("Honda Automotive Components  Under Review  [High]"));
    assert!(text.contains("Feasibility score: 75%"));
    assert!(text.contains("Company: Honda Motor Co."));
    assert!(text.contains("Departments: Engineering, Production"));
    assert!(text.contains("  • High competition"));
    assert!(text.contains("Manufacturing"));
    assert!(text.contains("PPAP level 3"));
    assert!(text.contains("Comments (2)"));
}

#[test]
fn test_comment_shows_immediately() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('c'));
    assert!(ctx.screen_contains("Comment: "));

    ctx.type_str("Die trial booked for March");
    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("Comment added"));
    let state = ctx.app.detail_state().unwrap();
    assert!(!state.composing);
    assert!(state.comment.content().is_empty());

    let project = ctx.app.repository.get(ProjectId(1)).unwrap();
    assert_eq!(project.comments.len(), 3);
    assert_eq!(project.last_updated, helpers::date(2026, 1, 15));

    let text = detail_text(&ctx, ProjectId(1)).join("\n");
    assert!(text.contains("Comments (3)"));
    assert!(text.contains("Ana Garcia (Sales) · 2026-01-15"));
    assert!(text.contains("  Die trial booked for March"));
    ctx.verify_invariants();
}

#[test]
fn test_blank_comment_is_ignored() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("   ");
    ctx.press(KeyCode::Enter);

    assert_eq!(ctx.app.repository.get(ProjectId(1)).unwrap().comments.len(), 2);
    assert!(ctx.app.detail_state().unwrap().composing);
    assert!(!ctx.status_contains("Comment added"));
}

#[test]
fn test_compose_keys_are_text_not_commands() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("queue ec");

    assert!(!ctx.app.should_quit);
    assert!(ctx.app.detail_state().is_some());
    assert_eq!(ctx.app.detail_state().unwrap().comment.content(), "queue ec");
}

#[test]
fn test_tab_leaves_compose_and_keeps_draft() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("draft");
    ctx.press(KeyCode::Tab);

    let state = ctx.app.detail_state().unwrap();
    assert!(!state.composing);
    assert_eq!(state.comment.content(), "draft");
}

#[test]
fn test_comments_in_sequence_keep_order() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    for text in ["first", "second"] {
        ctx.press(KeyCode::Char('c'));
        ctx.type_str(text);
        ctx.press(KeyCode::Enter);
        ctx.clock.advance_days(1);
    }

    let comments = &ctx.app.repository.get(ProjectId(1)).unwrap().comments;
    let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts[2..], ["first", "second"]);
    assert_eq!(comments[3].date, helpers::date(2026, 1, 16));
}

#[test]
fn test_scroll_and_close() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Char('k'));
    assert_eq!(ctx.app.detail_state().unwrap().scroll, 1);

    ctx.press(KeyCode::Char('q'));
    assert!(!ctx.app.modals.is_open());
    assert!(!ctx.app.should_quit);
    ctx.verify_invariants();
}

#[test]
fn test_edit_from_details_swaps_overlay() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('e'));

    assert_eq!(ctx.app.modals.visible_count(), 1);
    assert!(ctx.app.form_state().is_some());
    assert!(ctx.screen_contains("Edit Project #1"));
    assert!(!ctx.screen_contains("c comment"));
    ctx.verify_invariants();
}
