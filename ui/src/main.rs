#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use roster_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    use std::fs;

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    // Column titles and notices are Chinese; the embedded egui fonts have no
    // CJK glyphs, so append a local font to the proportional family when one
    // is present.
    let font_data = fs::read("assets/fonts/SourceHanSansCN-Regular.otf").ok();

    eframe::run_native(
        "Roster",
        native_options,
        Box::new(move |cc| {
            if let Some(data) = font_data {
                use egui::epaint::text::{FontInsert, FontPriority, InsertFontFamily};

                cc.egui_ctx.add_font(FontInsert::new(
                    "cjk-ui",
                    egui::FontData::from_owned(data),
                    vec![InsertFontFamily {
                        family: egui::FontFamily::Proportional,
                        priority: FontPriority::Lowest,
                    }],
                ));
            } else {
                log::warn!(
                    "assets/fonts/SourceHanSansCN-Regular.otf not found; CJK text will not render"
                );
            }

            let state = State::default();
            let app = roster_ui::RosterApp::new(cc, state);
            Ok(Box::new(app))
        }),
    )
}
