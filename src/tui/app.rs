use crate::domain::FeedSource;
use crate::tui::screen::Screen;

/// Top-level TUI state: the two feed screens and the tab shell.
///
/// The screens share nothing; the shell only decides which one is visible.
pub struct TuiApp {
    pub screens: Vec<Screen>,
    pub active: usize,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            screens: FeedSource::ALL.iter().map(|&s| Screen::new(s)).collect(),
            active: 0,
            should_quit: false,
        }
    }

    pub fn active_screen(&self) -> &Screen {
        &self.screens[self.active]
    }

    pub fn active_screen_mut(&mut self) -> &mut Screen {
        &mut self.screens[self.active]
    }

    /// Route a fetch completion to its owning screen, visible or not.
    pub fn screen_mut(&mut self, source: FeedSource) -> &mut Screen {
        self.screens
            .iter_mut()
            .find(|s| s.source == source)
            .expect("a screen exists for every source")
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.screens.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.screens.len() - 1) % self.screens.len();
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
