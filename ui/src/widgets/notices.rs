//! Toast overlay for the action-handler notices.
//!
//! Renders the single in-flight indicator plus short-lived success/error
//! toasts, anchored to the top center of the viewport. Expiry runs against
//! the frame clock (`Time`), never the wall clock.

use chrono::Duration;
use egui::{Align2, Area, Color32, Frame, Id, Order, RichText};
use roster_business::{Notice, NoticeKind, Notices};
use roster_states::{StateCtx, Time};

/// How long a terminal toast stays on screen.
const TOAST_TTL_SECONDS: i64 = 3;

pub fn notice_overlay(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    let now = *state_ctx.state::<Time>().as_ref();

    let notices = state_ctx.state_mut::<Notices>();
    notices.tick(now, Duration::seconds(TOAST_TTL_SECONDS));

    let loading = notices.loading().map(str::to_owned);
    let toasts: Vec<Notice> = notices.toasts().to_vec();

    if loading.is_none() && toasts.is_empty() {
        return;
    }

    Area::new(Id::new("notice_overlay"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 12.0))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(text) = &loading {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(text);
                        });
                    });
                    ui.add_space(4.0);
                }

                for toast in &toasts {
                    let (mark, color) = match toast.kind {
                        NoticeKind::Success => ("✓", Color32::from_rgb(34, 139, 34)),
                        NoticeKind::Error => ("✗", Color32::RED),
                    };
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("{mark} {}", toast.text)).color(color),
                        );
                    });
                    ui.add_space(4.0);
                }
            });
        });

    // Keep repainting while something is on screen so expiry does not wait
    // for the next input event.
    ctx.request_repaint();
}
