// src/gui/components/data_table.rs
//
// Draws the current page's tables, one `egui_extras` table per section.
// Purely a view over `app.sections`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::report::{self, Section};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    if app.sections.is_empty() {
        let msg = if app.loading.is_some() { "Loading…" } else { "No data loaded" };
        ui.label(msg);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("page_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if page.shows_heading() {
                ui.heading(report::chamber_heading(app.chamber()));
                ui.add_space(4.0);
            }
            for (ix, section) in app.sections.iter().enumerate() {
                ui.label(RichText::new(&section.title).strong().size(15.0));
                section_table(ui, section, ix);
                ui.add_space(12.0);
            }
        });
}

fn section_table(ui: &mut egui::Ui, section: &Section, ix: usize) {
    let data = &section.data;
    let cols = data.ncols();
    if cols == 0 {
        return;
    }
    if data.rows.is_empty() {
        ui.label("No matching members");
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(("section_table", ix))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0));
    for _ in 1..cols {
        table = table.column(Column::auto().resizable(true).at_least(60.0));
    }

    table
        .header(22.0, |mut header| {
            for ci in 0..cols {
                let text = data
                    .headers
                    .as_ref()
                    .and_then(|h| h.get(ci).cloned())
                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(text).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, data.rows.len(), |mut row| {
                let Some(cells) = data.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        // First column is a name or party; the rest are figures.
                        if ci == 0 {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
