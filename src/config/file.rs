// src/config/file.rs
//
// Optional `key=value` config file. Blank lines and `#` comments are ignored,
// unknown keys are logged and skipped, bad values keep the previous setting.

use std::{fs, path::Path};

use super::options::AppOptions;
use crate::model::Party;

/// Apply `path` on top of `opts` if the file exists.
pub fn apply_file(opts: &mut AppOptions, path: &Path) {
    if !path.exists() {
        return;
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            logf!("Config: loading {}", path.display());
            apply_text(opts, &text);
        }
        Err(e) => loge!("Config: could not read {}: {}", path.display(), e),
    }
}

pub fn apply_text(opts: &mut AppOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logd!("Config: ignoring line without '=': {line}");
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        if let Err(msg) = apply_pair(opts, key, val) {
            loge!("Config: {key}: {msg}");
        }
    }
}

fn apply_pair(opts: &mut AppOptions, key: &str, val: &str) -> Result<(), String> {
    match key {
        "chamber" => opts.source.chamber = val.parse().map_err(|e| format!("{e}"))?,
        "congress" => opts.source.congress = val.parse().map_err(|_| format!("not a number: {val}"))?,
        "api_base" => opts.source.api_base = s!(val.trim_end_matches('/')),
        "api_key" => opts.source.api_key = (!val.is_empty()).then(|| s!(val)),
        "states_url" => opts.source.states_url = s!(val),
        "input" => opts.source.input = (!val.is_empty()).then(|| val.into()),
        "timeout_secs" => opts.source.timeout_secs = val.parse().map_err(|_| format!("not a number: {val}"))?,
        "page" => opts.view.page = val.parse().map_err(|e| format!("{e}"))?,
        "parties" => opts.view.filter.parties = Party::parse_list(val).map_err(|e| format!("{e}"))?,
        "state" => opts.view.filter.set_state(val),
        "format" => opts.export.format = val.parse().map_err(|e| format!("{e}"))?,
        "include_headers" => opts.export.include_headers = parse_bool(val)?,
        "out_dir" => opts.export.set_dir(val),
        _ => logd!("Config: unknown key {key}"),
    }
    Ok(())
}

fn parse_bool(val: &str) -> Result<bool, String> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(format!("not a boolean: {val}")),
    }
}

/// Persist the settings a user is likely to change between runs.
pub fn save(path: &Path, opts: &AppOptions) -> std::io::Result<()> {
    let mut s = s!();
    s.push_str(&format!("chamber={}\n", opts.source.chamber.slug()));
    s.push_str(&format!("congress={}\n", opts.source.congress));
    s.push_str(&format!("page={}\n", opts.view.page.slug()));
    let parties = opts.view.filter.parties.iter().map(|p| p.code()).collect::<Vec<_>>().join(",");
    s.push_str(&format!("parties={}\n", parties));
    if let Some(state) = &opts.view.filter.state {
        s.push_str(&format!("state={}\n", state));
    }
    s.push_str(&format!("format={}\n", opts.export.format.ext()));
    s.push_str(&format!("include_headers={}\n", if opts.export.include_headers { 1 } else { 0 }));
    s.push_str(&format!("out_dir={}\n", opts.export.dir().display()));
    fs::write(path, s)
}
