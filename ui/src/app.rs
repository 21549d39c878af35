use chrono::Utc;
use roster_states::Time;

use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, mut state: State) -> Self {
        // Remote avatar images are loaded through the egui_extras loaders.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Repaint as soon as a command publishes a result, not on the next
        // input event.
        let egui_ctx = cc.egui_ctx.clone();
        state.ctx.set_wake(move || egui_ctx.request_repaint());

        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Stamp the frame clock, then apply whatever the commands published.
        self.state.ctx.state_mut::<Time>().set(Utc::now());
        self.state.ctx.apply_pending();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster");
                ui.separator();
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_page(&mut self.state.ctx, ui);
        });

        widgets::notice_overlay(&mut self.state.ctx, ctx);
    }
}
