//! Main page widget for the users admin view.

use egui::{Color32, Response, Ui};
use roster_business::{
    RefreshUsersCommand, RemoveSelectedCommand, UserActionKind, UserActionState, UserActionCompute,
    UserQueryCompute, UserQueryResult, UserRecord, UsersPageState,
};
use roster_states::StateCtx;

use super::modals::{show_create_modal, show_update_modal};
use super::table::{self, TableEvents};

/// Displays the users page: toolbar, table, pagination and the two modals.
///
/// Interactions are collected during layout and applied afterwards, so the
/// page state has exactly one writer per frame.
pub fn users_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    settle_actions(state_ctx);
    ensure_initial_fetch(state_ctx);

    // Snapshot what rendering needs before handing out `ui` closures.
    let page_state = state_ctx.state::<UsersPageState>();
    let page = page_state.page;
    let page_size = page_state.page_size.max(1);
    let sorter = page_state.sorter;
    let selected = page_state.selected.clone();
    let selected_count = selected.len();

    let query = state_ctx.cached::<UserQueryCompute>();
    let users: Vec<UserRecord> = query
        .and_then(UserQueryCompute::users)
        .map(<[UserRecord]>::to_vec)
        .unwrap_or_default();
    let total = query.and_then(UserQueryCompute::total).unwrap_or(0);
    let is_loading = query.is_some_and(UserQueryCompute::is_loading);
    let error = query.and_then(|q| q.error_message().map(str::to_owned));

    let mut open_create = false;
    let mut reload = false;
    let mut remove_selected = false;
    let mut page_delta: i64 = 0;
    let mut table_events = TableEvents::default();

    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("用户列表");
            ui.separator();

            if ui.button("➕ 新建").clicked() {
                open_create = true;
            }
            if ui.button("刷新").clicked() {
                reload = true;
            }
            if selected_count > 0 {
                ui.menu_button(format!("批量操作（{selected_count}）"), |ui| {
                    if ui.button("批量删除").clicked() {
                        remove_selected = true;
                        ui.close();
                    }
                });
            }
            if is_loading {
                ui.spinner();
                ui.label("加载中…");
            }
        });

        if let Some(error) = &error {
            ui.colored_label(Color32::RED, format!("加载失败：{error}"));
        }

        ui.add_space(8.0);
        table_events = table::users_table(ui, &users, &selected, sorter);
        ui.add_space(8.0);

        let total_pages = total.div_ceil(page_size).max(1);
        ui.horizontal(|ui| {
            ui.label(format!("共 {total} 条"));
            if ui
                .add_enabled(page > 1, egui::Button::new("上一页"))
                .clicked()
            {
                page_delta = -1;
            }
            ui.label(format!("第 {page} / {total_pages} 页"));
            if ui
                .add_enabled(page < total_pages, egui::Button::new("下一页"))
                .clicked()
            {
                page_delta = 1;
            }
        });
    });

    // Apply collected interactions.
    if open_create {
        state_ctx.state_mut::<UsersPageState>().open_create_modal();
    }
    for id in table_events.toggled {
        state_ctx.state_mut::<UsersPageState>().toggle_selected(id);
    }
    if let Some(record) = table_events.edit {
        state_ctx
            .state_mut::<UsersPageState>()
            .open_update_modal(&record);
    }
    if let Some(field) = table_events.sort_clicked {
        // Rewrite the sort specification; every toggle refetches immediately.
        state_ctx.state_mut::<UsersPageState>().toggle_sort(field);
        reload = true;
    }
    if page_delta != 0 {
        let page_state = state_ctx.state_mut::<UsersPageState>();
        page_state.page = page_state.page.saturating_add_signed(page_delta).max(1);
        reload = true;
    }
    if remove_selected {
        state_ctx.dispatch::<RemoveSelectedCommand>();
    }
    if reload {
        request_reload(state_ctx);
    }

    // Modals last so they overlay the page content.
    if state_ctx.state::<UsersPageState>().create_modal_open {
        show_create_modal(state_ctx, ui);
    }
    if state_ctx.state::<UsersPageState>().update_modal_open {
        show_update_modal(state_ctx, ui);
    }

    response.response
}

/// React once to a settled mutation: close the owning modal on success and
/// request the follow-up reload, then reset the cache to idle.
///
/// The remove flow reloads regardless of outcome; create/update only reload
/// (and close) when the handler reported success.
fn settle_actions(state_ctx: &mut StateCtx) {
    let Some(action) = state_ctx.cached::<UserActionCompute>().map(UserActionCompute::state)
    else {
        return;
    };

    let UserActionState::Done { kind, ok } = action else {
        return;
    };

    match kind {
        UserActionKind::Create => {
            if ok {
                state_ctx.state_mut::<UsersPageState>().close_create_modal();
            }
        }
        UserActionKind::Update => {
            if ok {
                state_ctx.state_mut::<UsersPageState>().close_update_modal();
            }
        }
        UserActionKind::Remove => {}
    }

    state_ctx.state_mut::<UserActionCompute>().state = UserActionState::Idle;

    let reload = match kind {
        UserActionKind::Remove => true,
        UserActionKind::Create | UserActionKind::Update => ok,
    };
    if reload {
        request_reload(state_ctx);
    }
}

/// First frame with an idle cache triggers the initial fetch.
fn ensure_initial_fetch(state_ctx: &mut StateCtx) {
    let idle = state_ctx
        .cached::<UserQueryCompute>()
        .is_some_and(|query| query.result == UserQueryResult::Idle);
    if idle {
        request_reload(state_ctx);
    }
}

/// Flip the list cache to loading synchronously, then dispatch the query.
///
/// The synchronous flip keeps a frame from re-requesting before the command's
/// own loading write lands.
fn request_reload(state_ctx: &mut StateCtx) {
    state_ctx.state_mut::<UserQueryCompute>().result = UserQueryResult::Loading;
    state_ctx.dispatch::<RefreshUsersCommand>();
}

#[cfg(test)]
mod users_page_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{BusinessConfig, Notices, SortOrder, UserPage};
    use roster_states::Time;
    use ustr::Ustr;

    use super::*;

    /// Helper to create a `StateCtx` for testing the users page.
    fn create_test_state_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(BusinessConfig::new("http://test".to_owned()));
        ctx.add_state(Notices::new());
        ctx.add_state(UsersPageState::new());
        ctx.record_compute(UserQueryCompute::default());
        ctx.record_compute(UserActionCompute::default());
        ctx
    }

    fn test_user(id: i64, username: &str, logincount: i64) -> UserRecord {
        UserRecord {
            id,
            username: username.to_owned(),
            realname: format!("{username}-real"),
            rolename: "user".to_owned(),
            deptname: "测试部".to_owned(),
            position: "QA".to_owned(),
            logincount,
            photo: None,
        }
    }

    fn seed_loaded(ctx: &mut StateCtx, users: Vec<UserRecord>) {
        let total = users.len() as u64;
        ctx.state_mut::<UserQueryCompute>().result =
            UserQueryResult::Loaded(UserPage { data: users, total });
    }

    fn harness(ctx: StateCtx) -> Harness<'static, StateCtx> {
        Harness::new_ui_state(
            |ui, state_ctx: &mut StateCtx| {
                users_page(state_ctx, ui);
            },
            ctx,
        )
    }

    #[test]
    fn test_table_header_elements_exist() {
        let harness = harness(create_test_state_ctx());

        for title in ["用户名", "昵称", "角色", "部门", "岗位", "状态", "头像", "操作"] {
            assert!(
                harness.query_by_label_contains(title).is_some(),
                "{title} header should exist"
            );
        }
    }

    #[test]
    fn test_toolbar_elements_exist() {
        let harness = harness(create_test_state_ctx());

        assert!(
            harness.query_by_label_contains("用户列表").is_some(),
            "page title should exist"
        );
        assert!(
            harness.query_by_label_contains("新建").is_some(),
            "create button should exist"
        );
        assert!(
            harness.query_by_label_contains("刷新").is_some(),
            "reload button should exist"
        );
    }

    #[test]
    fn test_idle_cache_triggers_initial_fetch() {
        let mut harness = harness(create_test_state_ctx());
        harness.step();

        assert!(
            harness
                .state()
                .cached::<UserQueryCompute>()
                .is_some_and(UserQueryCompute::is_loading),
            "first frame should flip the idle cache to loading"
        );
        assert!(
            harness.query_by_label_contains("加载中").is_some(),
            "loading indicator should be visible"
        );
    }

    #[test]
    fn test_user_rows_display_with_data() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(
            &mut ctx,
            vec![
                test_user(1, "alice", 0),
                test_user(2, "bob", 1),
                test_user(3, "charlie", 0),
            ],
        );

        let harness = harness(ctx);

        for username in ["alice", "bob", "charlie"] {
            assert!(
                harness.query_by_label_contains(username).is_some(),
                "username '{username}' should be displayed"
            );
        }
        assert!(
            harness.query_by_label_contains("共 3 条").is_some(),
            "total count should be displayed"
        );
    }

    #[test]
    fn test_status_labels_render_through_value_enum() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(
            &mut ctx,
            vec![
                test_user(1, "alice", 0),
                test_user(2, "bob", 1),
                // Out-of-enum status renders no label and must not panic.
                test_user(3, "charlie", 7),
            ],
        );

        let harness = harness(ctx);

        assert_eq!(harness.query_all_by_label("正常").count(), 1);
        assert_eq!(harness.query_all_by_label("锁定").count(), 1);
    }

    #[test]
    fn test_error_state_shows_failure_label() {
        let mut ctx = create_test_state_ctx();
        ctx.state_mut::<UserQueryCompute>().result =
            UserQueryResult::Error("network error: connection refused".to_owned());

        let harness = harness(ctx);

        assert!(
            harness.query_by_label_contains("加载失败").is_some(),
            "query failures should surface in the table area"
        );
    }

    #[test]
    fn test_create_button_opens_modal() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![]);
        let mut harness = harness(ctx);
        harness.step();

        assert!(!harness.state().state::<UsersPageState>().create_modal_open);

        if let Some(button) = harness.query_by_label_contains("新建") {
            button.click();
        }
        harness.step();

        assert!(
            harness.state().state::<UsersPageState>().create_modal_open,
            "create modal should open after clicking the toolbar button"
        );
    }

    #[test]
    fn test_empty_submit_shows_required_messages() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![]);
        ctx.state_mut::<UsersPageState>().open_create_modal();

        let mut harness = harness(ctx);
        harness.step();

        if let Some(button) = harness.query_by_label("提交") {
            button.click();
        }
        harness.step();

        assert!(
            harness.query_by_label_contains("用户名为必填项").is_some(),
            "username required message should show"
        );
        assert!(
            harness.query_by_label_contains("昵称为必填项").is_some(),
            "realname required message should show"
        );
        // Nothing was dispatched.
        assert_eq!(
            harness
                .state()
                .cached::<UserActionCompute>()
                .map(UserActionCompute::state),
            Some(UserActionState::Idle)
        );
    }

    #[test]
    fn test_edit_link_prefills_update_form() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![test_user(5, "alice", 0)]);

        let mut harness = harness(ctx);
        harness.step();

        if let Some(link) = harness.query_by_label("编辑") {
            link.click();
        }
        harness.step();

        let page_state = harness.state().state::<UsersPageState>();
        assert!(page_state.update_modal_open, "update modal should open");
        assert_eq!(page_state.editing, Some(5));
        assert_eq!(page_state.update_form.value("username"), Some("alice"));
        assert_eq!(page_state.update_form.value("realname"), Some("alice-real"));
    }

    #[test]
    fn test_sort_header_click_rewrites_sort_spec() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![test_user(1, "alice", 0)]);

        let mut harness = harness(ctx);
        harness.step();

        if let Some(button) = harness.query_by_label_contains("角色") {
            button.click();
        }
        harness.step();

        assert_eq!(
            harness
                .state()
                .state::<UsersPageState>()
                .sorter_param()
                .as_deref(),
            Some("rolename ascend")
        );

        if let Some(button) = harness.query_by_label_contains("角色") {
            button.click();
        }
        harness.step();

        assert_eq!(
            harness
                .state()
                .state::<UsersPageState>()
                .sorter_param()
                .as_deref(),
            Some("rolename descend")
        );
    }

    #[test]
    fn test_bulk_menu_appears_with_selection() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![test_user(1, "alice", 0), test_user(2, "bob", 0)]);

        let mut harness = harness(ctx);
        harness.step();
        assert!(
            harness.query_by_label_contains("批量操作").is_none(),
            "bulk menu hidden without selection"
        );

        harness.state_mut().state_mut::<UsersPageState>().toggle_selected(1);
        harness.step();

        assert!(
            harness.query_by_label_contains("批量操作").is_some(),
            "bulk menu appears once rows are selected"
        );
    }

    #[test]
    fn test_settle_remove_reloads_regardless_of_outcome() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![test_user(1, "alice", 0)]);
        ctx.state_mut::<UserActionCompute>().state = UserActionState::Done {
            kind: UserActionKind::Remove,
            ok: false,
        };

        let mut harness = harness(ctx);
        harness.step();

        let state_ctx = harness.state();
        assert_eq!(
            state_ctx
                .cached::<UserActionCompute>()
                .map(UserActionCompute::state),
            Some(UserActionState::Idle),
            "settled action must reset to idle"
        );
        assert!(
            state_ctx
                .cached::<UserQueryCompute>()
                .is_some_and(UserQueryCompute::is_loading),
            "remove settling must request a reload even on failure"
        );
    }

    #[test]
    fn test_settle_failed_create_keeps_modal_open() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![]);
        ctx.state_mut::<UsersPageState>().open_create_modal();
        ctx.state_mut::<UserActionCompute>().state = UserActionState::Done {
            kind: UserActionKind::Create,
            ok: false,
        };

        let mut harness = harness(ctx);
        harness.step();

        let page_state = harness.state().state::<UsersPageState>();
        assert!(
            page_state.create_modal_open,
            "failed create leaves the modal open for correction"
        );
    }

    #[test]
    fn test_settle_successful_create_closes_modal_and_reloads() {
        let mut ctx = create_test_state_ctx();
        seed_loaded(&mut ctx, vec![]);
        ctx.state_mut::<UsersPageState>().open_create_modal();
        ctx.state_mut::<UserActionCompute>().state = UserActionState::Done {
            kind: UserActionKind::Create,
            ok: true,
        };

        let mut harness = harness(ctx);
        harness.step();

        assert!(!harness.state().state::<UsersPageState>().create_modal_open);
        assert!(
            harness
                .state()
                .cached::<UserQueryCompute>()
                .is_some_and(UserQueryCompute::is_loading),
            "successful create requests a table reload"
        );
    }

    #[test]
    fn test_pagination_buttons_change_page() {
        let mut ctx = create_test_state_ctx();
        // 3 pages worth of rows (page size 10, total 25).
        ctx.state_mut::<UserQueryCompute>().result = UserQueryResult::Loaded(UserPage {
            data: vec![test_user(1, "alice", 0)],
            total: 25,
        });

        let mut harness = harness(ctx);
        harness.step();

        if let Some(button) = harness.query_by_label("下一页") {
            button.click();
        }
        harness.step();

        assert_eq!(harness.state().state::<UsersPageState>().page, 2);
        assert!(
            harness
                .state()
                .cached::<UserQueryCompute>()
                .is_some_and(UserQueryCompute::is_loading),
            "page change refetches"
        );
    }

    #[test]
    fn test_sort_toggle_state_machine() {
        // Direct state-level check of the last-writer-wins sort contract.
        let mut page_state = UsersPageState::new();
        page_state.set_sort(Ustr::from("rolename"), SortOrder::Descend);
        assert_eq!(page_state.sorter_param().as_deref(), Some("rolename descend"));
        page_state.set_sort(Ustr::from("rolename"), SortOrder::Ascend);
        assert_eq!(page_state.sorter_param().as_deref(), Some("rolename ascend"));
    }
}
