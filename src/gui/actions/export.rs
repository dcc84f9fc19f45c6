// src/gui/actions/export.rs
use eframe::egui;

use crate::{csv, file, gui::app::App};

/// Current page's tables to the clipboard, in the selected format.
pub fn copy(ctx: &egui::Context, app: &App) {
    if app.sections.iter().all(|s| s.data.rows.is_empty()) {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let sep = export.format.delim();
    let txt = app
        .sections
        .iter()
        .map(|s| csv::to_export_string(&s.data, export.include_headers, sep))
        .collect::<Vec<_>>()
        .join("\n");

    logf!("Copy: page={:?}, tables={}", app.current_page_kind(), app.sections.len());
    ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    if app.sections.iter().all(|s| s.data.rows.is_empty()) {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    if app.state.gui.out_path_dirty {
        let text = app.state.gui.out_path_text.clone();
        app.state.options.export.set_path(&text);
        app.state.gui.out_path_dirty = false;
    }

    let chamber = app.chamber();
    let kind = app.current_page_kind();
    match file::write_export_sections(&app.state.options.export, chamber, kind, &app.sections) {
        Ok(path) => {
            app.state.gui.out_path_text = path.to_string_lossy().into_owned();
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
