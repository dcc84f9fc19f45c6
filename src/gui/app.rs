// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::{AppOptions, PageKind}, state::AppState},
    model::{Chamber, MemberRecord, StateLookup},
    report::Section,
    roster,
};

use super::{
    actions::load::{self, LoadMsg},
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::new(AppOptions::load());
    eframe::run_native(
        "Congress Stats",
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // members per chamber, kept for the whole session
    pub members: HashMap<Chamber, Vec<MemberRecord>>,
    pub states: StateLookup,
    /// State codes in the current chamber, for the state menu.
    pub present_states: Vec<String>,

    // tables for the CURRENT page + chamber
    pub sections: Vec<Section>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub loading: Option<Chamber>,
    pub(crate) rx: Option<Receiver<LoadMsg>>,
}

impl App {
    pub fn new(mut state: AppState, ctx: &egui::Context) -> Self {
        state.gui.current_page_index = router::index_of(state.options.view.page);
        logf!(
            "Init: chamber={}, page={:?}, congress={}",
            state.options.source.chamber.slug(),
            state.options.view.page,
            state.options.source.congress
        );

        let mut app = Self {
            state,
            members: HashMap::new(),
            states: StateLookup::builtin(),
            present_states: Vec::new(),
            sections: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: None,
            rx: None,
        };
        load::request(&mut app, ctx, true);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn chamber(&self) -> Chamber { self.state.options.source.chamber }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn set_page(&mut self, idx: usize) {
        let prev = self.current_page_kind();
        self.state.gui.current_page_index = idx;
        let kind = self.current_page_kind();
        self.state.options.view.page = kind;
        logf!("UI: Tab switch {:?} → {:?}", prev, kind);
        self.state.refresh_out_path_text();
        self.rebuild_view();
    }

    /// Switch chamber; loads it on first use.
    pub fn set_chamber(&mut self, ctx: &egui::Context, chamber: Chamber) {
        if chamber == self.chamber() { return; }
        logf!("UI: Chamber → {}", chamber.slug());
        self.state.options.source.chamber = chamber;
        self.state.refresh_out_path_text();
        load::request(self, ctx, false);
    }

    /// Rebuild the tables from the cached members of the current chamber.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        match self.members.get(&self.chamber()) {
            Some(members) => {
                self.present_states = roster::states_in(members);
                self.sections = page.build(members, &self.state.options.view.filter);
                logd!(
                    "View: {:?} {} → {} table(s)",
                    page.kind(),
                    self.chamber().slug(),
                    self.sections.len()
                );
            }
            None => {
                self.present_states.clear();
                self.sections.clear();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        load::poll(self, ctx);

        eframe::egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);
        });

        eframe::egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
