// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    model::{MemberRecord, StateLookup},
    report::{self, Section},
    roster::RosterFilter,
};

pub mod attendance;
pub mod loyalty;
pub mod members;

/// What a page's controls may touch. Borrowed from `App` for one frame.
pub struct PageCtx<'a> {
    pub filter: &'a mut RosterFilter,
    pub states: &'a StateLookup,
    /// State codes present in the loaded chamber.
    pub present_states: &'a [String],
}

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Show "<Chamber> at a Glance" above the tables.
    fn shows_heading(&self) -> bool { true }

    /// Tables for the current chamber, top to bottom.
    fn build(&self, members: &[MemberRecord], filter: &RosterFilter) -> Vec<Section> {
        report::page_sections(self.kind(), members, filter)
    }

    /// Draw page-specific controls above the tables. Returns true when the
    /// view needs rebuilding.
    fn draw_controls(&self, _ui: &mut egui::Ui, _ctx: &mut PageCtx) -> bool { false }
}
