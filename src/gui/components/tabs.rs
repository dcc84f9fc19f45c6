// src/gui/components/tabs.rs
//
// Page tabs on the left, chamber switch on the right. Tab switches only
// rebuild tables from memory; a chamber switch may start a load.

use eframe::egui;

use crate::gui::{actions::load, app::App, router};
use crate::model::Chamber;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                app.set_page(idx);
            }
        }

        ui.separator();

        let ctx = ui.ctx().clone();
        let busy = app.loading.is_some();
        ui.add_enabled_ui(!busy, |ui| {
            for chamber in Chamber::ALL {
                let selected = chamber == app.chamber();
                if ui.selectable_label(selected, chamber.label()).clicked() && !selected {
                    app.set_chamber(&ctx, chamber);
                }
            }
            if ui.button("Reload").on_hover_text("Fetch again, ignoring the local cache").clicked() {
                load::reload(app, &ctx);
            }
        });
        if busy {
            ui.spinner();
        }
    });
}
