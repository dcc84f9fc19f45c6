// src/gui/actions/load.rs
//
// Chamber loads run on a worker thread; results come back over a channel
// that `poll` drains once per frame.

use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    error::Result,
    gui::{app::App, progress::GuiProgress},
    model::{Chamber, MemberRecord, StateLookup},
    source,
    store::Store,
};

pub enum LoadMsg {
    States(StateLookup),
    Members(Chamber, Result<Vec<MemberRecord>>),
}

/// Show the current chamber, fetching it unless it is already in memory.
/// `with_states` also refreshes the state lookup.
pub fn request(app: &mut App, ctx: &egui::Context, with_states: bool) {
    let chamber = app.chamber();

    if !with_states && app.members.contains_key(&chamber) {
        app.rebuild_view();
        app.status(format!("Showing {}", chamber.label()));
        return;
    }
    if app.loading.is_some() {
        logd!("Load: busy, ignoring request for {}", chamber.slug());
        return;
    }

    app.loading = Some(chamber);
    app.rebuild_view();

    let opts = app.state.options.source.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.rx = Some(rx);

    logf!("Load: Begin {} (states={})", chamber.slug(), with_states);

    thread::spawn(move || {
        if with_states {
            let states = source::load_states(&opts, &Store::default());
            let _ = tx.send(LoadMsg::States(states));
        }

        let mut progress = GuiProgress::new(status);
        let result = source::build_source(&opts)
            .and_then(|src| source::load_chamber(src.as_ref(), chamber, Some(&mut progress)));
        let _ = tx.send(LoadMsg::Members(chamber, result));
        ctx.request_repaint();
    });
}

/// Drop the in-memory copy of the current chamber and fetch it again,
/// bypassing the `.store` cache.
pub fn reload(app: &mut App, ctx: &egui::Context) {
    let chamber = app.chamber();
    app.members.remove(&chamber);
    app.state.options.source.refresh = true;
    request(app, ctx, false);
    app.state.options.source.refresh = false;
}

pub fn poll(app: &mut App, ctx: &egui::Context) {
    let Some(rx) = app.rx.as_ref() else { return };
    let msgs: Vec<LoadMsg> = rx.try_iter().collect();
    let mut stale = false;

    for msg in msgs {
        match msg {
            LoadMsg::States(states) => {
                logd!("Load: {} states", states.len());
                app.states = states;
            }
            LoadMsg::Members(chamber, Ok(members)) => {
                logf!("Load: OK {} rows={}", chamber.slug(), members.len());
                let n = members.len();
                app.members.insert(chamber, members);
                finish(app);
                if chamber == app.chamber() {
                    app.rebuild_view();
                    app.status(format!("Ready: {} {} members", n, chamber.slug()));
                } else {
                    stale = true;
                }
            }
            LoadMsg::Members(chamber, Err(e)) => {
                loge!("Load: Error {}: {}", chamber.slug(), e);
                finish(app);
                app.status(format!("Error: {e}"));
            }
        }
    }

    // The chamber switched while a load was running.
    if stale && app.loading.is_none() {
        request(app, ctx, false);
    }
}

fn finish(app: &mut App) {
    app.loading = None;
    app.rx = None;
}
