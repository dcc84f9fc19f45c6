// src/source/states.rs
use super::api::{get_text, http_client};
use crate::config::options::SourceOptions;
use crate::error::Result;
use crate::model::StateLookup;
use crate::store::Store;

/// GET the `{"AL": "Alabama", ...}` lookup.
pub fn fetch_states(url: &str, timeout_secs: u64) -> Result<StateLookup> {
    let client = http_client(timeout_secs)?;
    let body = get_text(&client, url, None)?;
    StateLookup::from_json(&body)
}

/// States lookup from the cache, then the network, then the built-in table.
/// Never fails: the state menu always has something to show.
pub fn load_states(opts: &SourceOptions, store: &Store) -> StateLookup {
    let path = store.states_path();

    if !opts.refresh {
        if let Ok(Some(text)) = store.load(&path) {
            match StateLookup::from_json(&text) {
                Ok(states) if !states.is_empty() => return states,
                Ok(_) => logd!("States: cached lookup is empty"),
                Err(e) => loge!("States: bad cache {}: {}", path.display(), e),
            }
        }
    }

    // Offline runs never touch the network.
    if opts.input.is_none() {
        match fetch_states(&opts.states_url, opts.timeout_secs) {
            Ok(states) if !states.is_empty() => {
                let saved = states.to_json().and_then(|body| Ok(store.save(&path, &body)?));
                if let Err(e) = saved {
                    loge!("States: could not cache: {e}");
                }
                return states;
            }
            Ok(_) => loge!("States: fetched lookup is empty, using built-in table"),
            Err(e) => loge!("States: fetch failed, using built-in table: {e}"),
        }
    }

    StateLookup::builtin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_without_cache_uses_builtin() {
        let dir = std::env::temp_dir().join("congress_stats_states_offline");
        let _ = std::fs::remove_dir_all(&dir);
        let opts = SourceOptions { input: Some("members.json".into()), ..SourceOptions::default() };
        let states = load_states(&opts, &Store::new(dir));
        assert_eq!(states.name("ny"), Some("New York"));
    }

    #[test]
    fn cached_lookup_wins() {
        let dir = std::env::temp_dir().join("congress_stats_states_cached");
        let _ = std::fs::remove_dir_all(&dir);
        let store = Store::new(dir);
        store.save(&store.states_path(), r#"{"ZZ":"Zedland"}"#).unwrap();
        let opts = SourceOptions { input: Some("members.json".into()), ..SourceOptions::default() };
        let states = load_states(&opts, &store);
        assert_eq!(states.len(), 1);
        assert_eq!(states.name("zz"), Some("Zedland"));
    }
}
