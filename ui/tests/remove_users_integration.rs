//! Bulk delete flow: selecting rows, triggering the batch-delete menu item,
//! observing the DELETE body and the unconditional reload.

mod common;

use common::TestCtx;
use kittest::Queryable;
use roster_business::{UserQueryCompute, UsersPageState};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_sends_selected_ids_and_reloads() {
    let mut ctx = TestCtx::new_users_page(common::two_users_body()).await;

    Mock::given(method("DELETE"))
        .and(path("/api/rule"))
        .and(body_json(serde_json::json!({"ids": [1, 2]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.wait_for("initial load", |state| {
        state
            .ctx
            .cached::<UserQueryCompute>()
            .is_some_and(|query| query.users().is_some())
    })
    .await;

    // Check both rows.
    {
        let page_state = ctx.harness.state_mut().ctx.state_mut::<UsersPageState>();
        page_state.toggle_selected(1);
        page_state.toggle_selected(2);
    }
    ctx.harness.step();

    // The bulk menu only shows with a non-empty selection.
    let menu = ctx.harness.query_by_label_contains("批量操作");
    assert!(menu.is_some(), "bulk menu should be visible");
    if let Some(menu) = menu {
        menu.click();
    }
    ctx.harness.step();

    if let Some(item) = ctx.harness.query_by_label("批量删除") {
        item.click();
    }

    ctx.wait_for_requests("DELETE", 1).await;

    // Reload happens after the remove settles, and the fresh page clears the
    // selection set.
    ctx.wait_for_requests("GET", 2).await;
    ctx.wait_for("selection cleared", |state| {
        state.ctx.state::<UsersPageState>().selected.is_empty()
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_reloads_even_when_the_service_fails() {
    let mut ctx = TestCtx::new_users_page(common::two_users_body()).await;

    Mock::given(method("DELETE"))
        .and(path("/api/rule"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.mock_server)
        .await;

    ctx.wait_for("initial load", |state| {
        state
            .ctx
            .cached::<UserQueryCompute>()
            .is_some_and(|query| query.users().is_some())
    })
    .await;

    {
        let page_state = ctx.harness.state_mut().ctx.state_mut::<UsersPageState>();
        page_state.toggle_selected(1);
    }
    ctx.harness.step();

    if let Some(menu) = ctx.harness.query_by_label_contains("批量操作") {
        menu.click();
    }
    ctx.harness.step();
    if let Some(item) = ctx.harness.query_by_label("批量删除") {
        item.click();
    }

    ctx.wait_for_requests("DELETE", 1).await;

    // Reload is requested regardless of the handler's outcome.
    ctx.wait_for_requests("GET", 2).await;
}
