// src/gui/pages/members.rs
use eframe::egui;

use crate::config::options::PageKind::{ self, * };
use crate::gui::components::filter_panel;
use super::{ Page, PageCtx };

pub struct MembersPage;
pub static PAGE: MembersPage = MembersPage;

impl Page for MembersPage {
    fn kind(&self) -> PageKind { Members }
    fn label(&self) -> &'static str { "Members" }

    fn shows_heading(&self) -> bool { false }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut PageCtx) -> bool {
        filter_panel::draw(ui, ctx)
    }
}
