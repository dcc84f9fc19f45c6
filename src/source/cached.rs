// src/source/cached.rs
use super::MemberDataSource;
use crate::error::Result;
use crate::model::Chamber;
use crate::store::Store;

/// Serves `.store/<congress>_<chamber>.json` when present; otherwise asks
/// the inner source and saves what it returns.
pub struct CachedSource<S> {
    inner: S,
    store: Store,
    congress: u32,
    refresh: bool,
}

impl<S: MemberDataSource> CachedSource<S> {
    pub fn new(inner: S, store: Store, congress: u32, refresh: bool) -> Self {
        Self { inner, store, congress, refresh }
    }
}

impl<S: MemberDataSource> MemberDataSource for CachedSource<S> {
    fn describe(&self) -> String {
        format!("{} via cache", self.inner.describe())
    }

    fn fetch_raw(&self, chamber: Chamber) -> Result<String> {
        let path = self.store.members_path(self.congress, chamber);

        if !self.refresh {
            match self.store.load(&path) {
                Ok(Some(body)) => {
                    logd!("Cache: hit {}", path.display());
                    return Ok(body);
                }
                Ok(None) => logd!("Cache: miss {}", path.display()),
                Err(e) => loge!("Cache: unreadable {}: {}", path.display(), e),
            }
        }

        let body = self.inner.fetch_raw(chamber)?;
        // Best-effort; a failed write only costs a refetch next time.
        if let Err(e) = self.store.save(&path, &body) {
            loge!("Cache: could not write {}: {}", path.display(), e);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
    }

    impl MemberDataSource for Counting {
        fn describe(&self) -> String { s!("counting") }
        fn fetch_raw(&self, _chamber: Chamber) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(s!(r#"[{"party":"D"}]"#))
        }
    }

    fn temp_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!("congress_stats_cache_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    #[test]
    fn second_fetch_comes_from_cache() {
        let source = CachedSource::new(Counting { calls: Cell::new(0) }, temp_store("hit"), 117, false);
        assert_eq!(source.fetch(Chamber::Senate).unwrap().len(), 1);
        assert_eq!(source.fetch(Chamber::Senate).unwrap().len(), 1);
        assert_eq!(source.inner.calls.get(), 1);
    }

    #[test]
    fn refresh_bypasses_cache() {
        let source = CachedSource::new(Counting { calls: Cell::new(0) }, temp_store("refresh"), 117, true);
        source.fetch(Chamber::House).unwrap();
        source.fetch(Chamber::House).unwrap();
        assert_eq!(source.inner.calls.get(), 2);
    }
}
