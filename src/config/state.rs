// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Text in the export path box (applied on export)
    pub out_path_text: String,
    /// User edited the path box since the last export.
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1000,
            window_h: 680,
            current_page_index: 0,
            out_path_text: s!(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options
            .export
            .out_path(options.source.chamber, options.view.page)
            .to_string_lossy()
            .into_owned();
        Self {
            options,
            gui: GuiState { out_path_text, ..GuiState::default() },
        }
    }

    /// Re-derive the path box from the options unless the user typed in it.
    pub fn refresh_out_path_text(&mut self) {
        if !self.gui.out_path_dirty {
            self.gui.out_path_text = self
                .options
                .export
                .out_path(self.options.source.chamber, self.options.view.page)
                .to_string_lossy()
                .into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::PageKind;
    use crate::model::Chamber;

    #[test]
    fn path_text_follows_page_until_edited() {
        let mut state = AppState::new(AppOptions::default());
        assert!(state.gui.out_path_text.ends_with("senate_members.csv"));

        state.options.view.page = PageKind::Loyalty;
        state.options.source.chamber = Chamber::House;
        state.refresh_out_path_text();
        assert!(state.gui.out_path_text.ends_with("house_loyalty.csv"));

        state.gui.out_path_text = s!("mine.csv");
        state.gui.out_path_dirty = true;
        state.refresh_out_path_text();
        assert_eq!(state.gui.out_path_text, "mine.csv");
    }
}
