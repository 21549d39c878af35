//! The users page queries the list endpoint on its own on the first frame
//! and renders the returned rows.

mod common;

use common::TestCtx;
use kittest::Queryable;
use roster_business::UserQueryCompute;

#[tokio::test(flavor = "multi_thread")]
async fn users_list_loads_on_first_frame() {
    let mut ctx = TestCtx::new_users_page(common::two_users_body()).await;

    ctx.wait_for("users loaded", |state| {
        state
            .ctx
            .cached::<UserQueryCompute>()
            .is_some_and(|query| query.users().is_some())
    })
    .await;

    ctx.harness.step();
    assert!(ctx.harness.query_by_label_contains("alice").is_some());
    assert!(ctx.harness.query_by_label_contains("bob").is_some());
    assert!(ctx.harness.query_by_label_contains("共 2 条").is_some());

    // Status labels come from the value-enum mapping.
    assert!(ctx.harness.query_by_label("正常").is_some());
    assert!(ctx.harness.query_by_label("锁定").is_some());

    let gets = ctx.requests("GET").await;
    assert!(!gets.is_empty(), "initial query must hit the list endpoint");

    // Default pagination goes out with the first query; no sorter yet.
    let query: Vec<(String, String)> = gets[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(query.contains(&("page".to_owned(), "1".to_owned())));
    assert!(query.contains(&("pageSize".to_owned(), "10".to_owned())));
    assert!(query.iter().all(|(k, _)| k != "sorter"));
}
