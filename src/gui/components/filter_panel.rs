// src/gui/components/filter_panel.rs
//
// Members page filters: one checkbox per party, and a state menu listing the
// states present in the loaded chamber.

use eframe::egui;

use crate::gui::pages::PageCtx;
use crate::model::Party;

pub fn draw(ui: &mut egui::Ui, ctx: &mut PageCtx) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Party:");
        for party in Party::ALL {
            let mut on = ctx.filter.parties.contains(&party);
            if ui.checkbox(&mut on, party.member_label()).changed() {
                ctx.filter.toggle_party(party, on);
                logf!("UI: Party {} → {}", party.code(), on);
                changed = true;
            }
        }

        ui.separator();
        ui.label("State:");

        let selected_text = match &ctx.filter.state {
            Some(code) => state_label(ctx, code),
            None => s!("All"),
        };

        egui::ComboBox::from_id_salt("state_filter")
            .selected_text(selected_text)
            .height(320.0)
            .show_ui(ui, |ui| {
                if ui.selectable_label(ctx.filter.state.is_none(), "All").clicked() {
                    ctx.filter.state = None;
                    changed = true;
                }
                for code in ctx.present_states {
                    let selected = ctx.filter.state.as_deref() == Some(code.as_str());
                    if ui.selectable_label(selected, state_label(ctx, code)).clicked() && !selected {
                        ctx.filter.set_state(code);
                        changed = true;
                    }
                }
            });
    });

    if changed {
        logd!("UI: Filter → {:?}", ctx.filter);
    }
    changed
}

fn state_label(ctx: &PageCtx, code: &str) -> String {
    match ctx.states.name(code) {
        Some(name) => format!("{name} ({code})"),
        None => s!(code),
    }
}
