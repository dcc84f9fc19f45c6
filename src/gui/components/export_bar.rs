// src/gui/components/export_bar.rs

use std::path::Path;

use eframe::egui;

use crate::{
    config::{self, consts::CONFIG_FILE, options::ExportFormat},
    gui::{actions::export, app::App, pages::PageCtx},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Page-specific controls ---
    let changed = {
        let page = app.current_page();
        let mut ctx = PageCtx {
            filter: &mut app.state.options.view.filter,
            states: &app.states,
            present_states: &app.present_states,
        };
        page.draw_controls(ui, &mut ctx)
    };
    if changed {
        app.rebuild_view();
    }

    // --- Format + Include headers ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            app.state.refresh_out_path_text();
        }

        let export = &mut app.state.options.export;
        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    });

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }

        if ui.button("Copy").clicked() {
            export::copy(ui.ctx(), app);
        }
        if ui.button("Export").clicked() {
            export::export(app);
        }
        if ui.button("Save settings").on_hover_text(CONFIG_FILE).clicked() {
            match config::file::save(Path::new(CONFIG_FILE), &app.state.options) {
                Ok(()) => {
                    logf!("Config: saved {}", CONFIG_FILE);
                    app.status(format!("Saved {CONFIG_FILE}"));
                }
                Err(e) => {
                    loge!("Config: save failed: {}", e);
                    app.status(format!("Could not save settings: {e}"));
                }
            }
        }
    });
}
