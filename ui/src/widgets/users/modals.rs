//! Create/update modal forms for the users page.
//!
//! Both modals render the same form-mode projection of the column schema;
//! required-field validation runs in the form layer, so an invalid submit
//! never reaches the command layer. Success/failure settling (closing the
//! modal, reloading the table) lives in the panel.

use egui::{Color32, Ui, Window};
use roster_business::{
    SubmitCreateCommand, SubmitUpdateCommand, UserActionKind, UserActionCompute, UserForm,
    UsersPageState, form_columns,
};
use roster_states::StateCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalEvent {
    None,
    Submit,
    Cancel,
}

/// Shows the create-user modal window.
pub fn show_create_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let in_flight = action_in_flight(state_ctx, UserActionKind::Create);
    let mut open = true;
    let mut event = ModalEvent::None;

    Window::new("新建用户")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if in_flight {
                render_in_flight(ui);
                return;
            }

            let page_state = state_ctx.state_mut::<UsersPageState>();
            render_form_fields(ui, &mut page_state.create_form);
            event = render_buttons(ui);
        });

    match event {
        ModalEvent::Submit => {
            let valid = state_ctx
                .state_mut::<UsersPageState>()
                .create_form
                .validate(form_columns());
            if valid {
                state_ctx.dispatch::<SubmitCreateCommand>();
            }
        }
        ModalEvent::Cancel => state_ctx.state_mut::<UsersPageState>().close_create_modal(),
        ModalEvent::None => {}
    }

    if !open {
        state_ctx.state_mut::<UsersPageState>().close_create_modal();
    }
}

/// Shows the update-user modal window, pre-filled from the clicked row.
pub fn show_update_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let in_flight = action_in_flight(state_ctx, UserActionKind::Update);
    let mut open = true;
    let mut event = ModalEvent::None;

    Window::new("编辑用户")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if in_flight {
                render_in_flight(ui);
                return;
            }

            let page_state = state_ctx.state_mut::<UsersPageState>();
            if let Some(id) = page_state.editing {
                ui.weak(format!("记录 #{id}"));
                ui.add_space(4.0);
            }
            render_form_fields(ui, &mut page_state.update_form);
            event = render_buttons(ui);
        });

    match event {
        ModalEvent::Submit => {
            let valid = state_ctx
                .state_mut::<UsersPageState>()
                .update_form
                .validate(form_columns());
            if valid {
                state_ctx.dispatch::<SubmitUpdateCommand>();
            }
        }
        ModalEvent::Cancel => state_ctx.state_mut::<UsersPageState>().close_update_modal(),
        ModalEvent::None => {}
    }

    if !open {
        state_ctx.state_mut::<UsersPageState>().close_update_modal();
    }
}

fn action_in_flight(state_ctx: &StateCtx, kind: UserActionKind) -> bool {
    state_ctx
        .cached::<UserActionCompute>()
        .is_some_and(|action| action.in_flight_kind() == Some(kind))
}

fn render_in_flight(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("正在提交…");
    });
}

/// One labeled input per form-visible schema column, with the required-field
/// message under the fields that failed the last validation.
fn render_form_fields(ui: &mut Ui, form: &mut UserForm) {
    for column in form_columns() {
        ui.horizontal(|ui| {
            ui.label(column.title);
            ui.text_edit_singleline(form.buffer_mut(column.data_index));
        });
        if let Some(message) = form.error(column.data_index) {
            ui.colored_label(Color32::RED, message);
        }
    }
}

fn render_buttons(ui: &mut Ui) -> ModalEvent {
    let mut event = ModalEvent::None;
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("提交").clicked() {
            event = ModalEvent::Submit;
        }
        if ui.button("取消").clicked() {
            event = ModalEvent::Cancel;
        }
    });
    event
}
