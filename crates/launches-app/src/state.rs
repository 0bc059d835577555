//! Application state (Model in TEA pattern)

use launches_core::{Launch, LoadPhase};

use crate::config::Settings;
use crate::hit_map::HitMap;
use crate::message::FocusMove;

/// Shown for every fetch failure; the technical cause only goes to the log
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load data. Check your internet connection.";

/// Which of the three mutually exclusive main screens is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Fetch not yet resolved
    Loading,
    /// Fetch failed
    Error,
    /// Fetch succeeded (possibly with zero launches)
    Grid,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Settings loaded at startup
    pub settings: Settings,

    /// Fetch lifecycle
    pub phase: LoadPhase,

    /// Launches in arrival order
    pub launches: Vec<Launch>,

    /// User-facing error message when the fetch failed
    pub error: Option<String>,

    /// Launch shown in the details modal
    selected: Option<Launch>,

    /// Details modal visibility, only true while `selected` is set
    modal_visible: bool,

    /// First visible row of the details modal body
    modal_scroll: usize,

    /// Largest useful `modal_scroll` (updated by the renderer)
    modal_scroll_limit: usize,

    /// Focused tile, tracked by flight number
    pub focused: Option<u32>,

    /// First visible grid row
    pub grid_scroll: usize,

    /// Grid rows that fit on screen (updated by the renderer)
    pub grid_rows_visible: usize,

    /// Tile columns actually in use (updated by the renderer)
    pub grid_columns: usize,

    /// Clickable regions from the last frame
    pub hit_map: HitMap,

    /// Loading spinner frame
    pub loading_frame: usize,

    quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let grid_columns = usize::from(settings.ui.columns.max(1));
        Self {
            settings,
            phase: LoadPhase::default(),
            launches: Vec::new(),
            error: None,
            selected: None,
            modal_visible: false,
            modal_scroll: 0,
            modal_scroll_limit: 0,
            focused: None,
            grid_scroll: 0,
            grid_rows_visible: 1,
            grid_columns,
            hit_map: HitMap::new(),
            loading_frame: 0,
            quitting: false,
        }
    }

    /// Header title, e.g. "SpaceX Launches 2020"
    pub fn title(&self) -> String {
        format!("SpaceX Launches {}", self.settings.source.launch_year)
    }

    pub fn screen(&self) -> Screen {
        match self.phase {
            LoadPhase::Idle | LoadPhase::Loading => Screen::Loading,
            LoadPhase::Failed => Screen::Error,
            LoadPhase::Loaded => Screen::Grid,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Fetch Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Move to `Loading`. Returns false if a fetch was already started.
    pub fn begin_fetch(&mut self) -> bool {
        if !self.phase.can_start() {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Store fetched launches. Ignored unless a fetch is in flight.
    pub fn finish_fetch(&mut self, launches: Vec<Launch>) -> bool {
        if self.phase != LoadPhase::Loading || self.quitting {
            return false;
        }
        self.focused = launches.first().map(|l| l.flight_number);
        self.launches = launches;
        self.error = None;
        self.grid_scroll = 0;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Record a failed fetch. Ignored unless a fetch is in flight.
    pub fn fail_fetch(&mut self) -> bool {
        if self.phase != LoadPhase::Loading || self.quitting {
            return false;
        }
        self.launches.clear();
        self.focused = None;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.phase = LoadPhase::Failed;
        true
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn launch(&self, flight_number: u32) -> Option<&Launch> {
        self.launches
            .iter()
            .find(|l| l.flight_number == flight_number)
    }

    /// Open the details modal for a launch in the list
    pub fn select(&mut self, flight_number: u32) -> bool {
        let Some(launch) = self.launch(flight_number).cloned() else {
            return false;
        };
        self.selected = Some(launch);
        self.modal_visible = true;
        self.modal_scroll = 0;
        self.modal_scroll_limit = 0;
        self.focused = Some(flight_number);
        true
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
        self.modal_visible = false;
        self.modal_scroll = 0;
    }

    pub fn selected(&self) -> Option<&Launch> {
        self.selected.as_ref()
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible && self.selected.is_some()
    }

    pub fn modal_scroll(&self) -> usize {
        self.modal_scroll
    }

    /// Scroll the details modal by `delta` rows, within the last drawn limit
    pub fn scroll_modal(&mut self, delta: i32) {
        if !self.is_modal_visible() {
            return;
        }
        let magnitude = delta.unsigned_abs() as usize;
        self.modal_scroll = if delta < 0 {
            self.modal_scroll.saturating_sub(magnitude)
        } else {
            self.modal_scroll
                .saturating_add(magnitude)
                .min(self.modal_scroll_limit)
        };
    }

    /// Record how far the modal body can scroll at the current size
    pub fn set_modal_scroll_limit(&mut self, limit: usize) {
        self.modal_scroll_limit = limit;
        self.modal_scroll = self.modal_scroll.min(limit);
    }

    // ─────────────────────────────────────────────────────────
    // Grid Focus & Scroll
    // ─────────────────────────────────────────────────────────

    pub fn focused_index(&self) -> Option<usize> {
        let focused = self.focused?;
        self.launches
            .iter()
            .position(|l| l.flight_number == focused)
    }

    pub fn focus(&mut self, flight_number: u32) -> bool {
        if self.launch(flight_number).is_none() {
            return false;
        }
        self.focused = Some(flight_number);
        self.ensure_focus_visible();
        true
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        let len = self.launches.len();
        if len == 0 {
            return;
        }
        let cols = self.grid_columns.max(1);
        let page = self.grid_rows_visible.max(1) * cols;
        let last = len - 1;

        let target = match self.focused_index() {
            None => 0,
            Some(idx) => match direction {
                FocusMove::Left => idx.saturating_sub(1),
                FocusMove::Right => (idx + 1).min(last),
                FocusMove::Up => idx.checked_sub(cols).unwrap_or(idx),
                FocusMove::Down => {
                    if idx + cols <= last {
                        idx + cols
                    } else if idx / cols < last / cols {
                        // Partial last row: land on its final tile
                        last
                    } else {
                        idx
                    }
                }
                FocusMove::First => 0,
                FocusMove::Last => last,
                FocusMove::PageUp => idx.saturating_sub(page),
                FocusMove::PageDown => (idx + page).min(last),
            },
        };

        self.focused = Some(self.launches[target].flight_number);
        self.ensure_focus_visible();
    }

    fn total_rows(&self) -> usize {
        self.launches.len().div_ceil(self.grid_columns.max(1))
    }

    fn max_scroll(&self) -> usize {
        self.total_rows()
            .saturating_sub(self.grid_rows_visible.max(1))
    }

    /// Scroll so the focused tile's row is on screen
    pub fn ensure_focus_visible(&mut self) {
        let Some(idx) = self.focused_index() else {
            return;
        };
        let row = idx / self.grid_columns.max(1);
        let visible = self.grid_rows_visible.max(1);
        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + visible {
            self.grid_scroll = row + 1 - visible;
        }
    }

    /// Scroll by whole rows without moving focus
    pub fn scroll_grid(&mut self, delta: i32) {
        let magnitude = delta.unsigned_abs() as usize;
        self.grid_scroll = if delta < 0 {
            self.grid_scroll.saturating_sub(magnitude)
        } else {
            (self.grid_scroll + magnitude).min(self.max_scroll())
        };
    }

    /// Record the grid geometry the renderer settled on
    pub fn set_grid_geometry(&mut self, columns: usize, rows_visible: usize) {
        let columns = columns.max(1);
        let rows_visible = rows_visible.max(1);
        if columns != self.grid_columns || rows_visible != self.grid_rows_visible {
            self.grid_columns = columns;
            self.grid_rows_visible = rows_visible;
            self.ensure_focus_visible();
        }
        self.grid_scroll = self.grid_scroll.min(self.max_scroll());
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        if self.screen() == Screen::Loading {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launches_client::test_utils::{starlink_2, test_launch};

    fn loaded(count: u32) -> AppState {
        let mut state = AppState::default();
        state.begin_fetch();
        let launches = (1..=count)
            .map(|n| test_launch(n, &format!("Mission {n}"), Some("Falcon 9")))
            .collect();
        state.finish_fetch(launches);
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AppState::default();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert_eq!(state.screen(), Screen::Loading);
        assert!(state.selected().is_none());
        assert!(!state.is_modal_visible());
    }

    #[test]
    fn test_title_uses_configured_year() {
        let mut settings = Settings::default();
        settings.source.launch_year = 2019;
        assert_eq!(AppState::new(settings).title(), "SpaceX Launches 2019");
    }

    #[test]
    fn test_begin_fetch_is_single_shot() {
        let mut state = AppState::default();
        assert!(state.begin_fetch());
        assert!(!state.begin_fetch());
        state.finish_fetch(vec![starlink_2()]);
        assert!(!state.begin_fetch());
    }

    #[test]
    fn test_finish_fetch_keeps_arrival_order_and_focuses_first() {
        let state = loaded(3);
        assert_eq!(state.screen(), Screen::Grid);
        let names: Vec<_> = state.launches.iter().map(|l| l.mission_name.as_str()).collect();
        assert_eq!(names, ["Mission 1", "Mission 2", "Mission 3"]);
        assert_eq!(state.focused, Some(1));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fail_fetch_sets_fixed_message() {
        let mut state = AppState::default();
        state.begin_fetch();
        assert!(state.fail_fetch());
        assert_eq!(state.screen(), Screen::Error);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.launches.is_empty());
    }

    #[test]
    fn test_results_ignored_when_not_loading() {
        let mut state = AppState::default();
        assert!(!state.finish_fetch(vec![starlink_2()]));
        assert!(!state.fail_fetch());
        assert_eq!(state.phase, LoadPhase::Idle);
    }

    #[test]
    fn test_results_ignored_after_quit() {
        let mut state = AppState::default();
        state.begin_fetch();
        state.request_quit();
        assert!(!state.finish_fetch(vec![starlink_2()]));
        assert!(state.launches.is_empty());
    }

    #[test]
    fn test_select_and_dismiss_keep_modal_tied_to_selection() {
        let mut state = loaded(2);

        assert!(state.select(2));
        assert!(state.is_modal_visible());
        assert_eq!(state.selected().map(|l| l.flight_number), Some(2));
        assert_eq!(state.focused, Some(2));

        state.dismiss();
        assert!(!state.is_modal_visible());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_unknown_flight_is_rejected() {
        let mut state = loaded(2);
        assert!(!state.select(99));
        assert!(!state.is_modal_visible());
    }

    #[test]
    fn test_move_focus_in_grid() {
        // 7 tiles in 3 columns:
        //  1 2 3
        //  4 5 6
        //  7
        let mut state = loaded(7);
        state.set_grid_geometry(3, 3);

        state.move_focus(FocusMove::Right);
        assert_eq!(state.focused, Some(2));
        state.move_focus(FocusMove::Down);
        assert_eq!(state.focused, Some(5));
        state.move_focus(FocusMove::Down);
        assert_eq!(state.focused, Some(7));
        state.move_focus(FocusMove::Down);
        assert_eq!(state.focused, Some(7));
        state.move_focus(FocusMove::Up);
        assert_eq!(state.focused, Some(4));
        state.move_focus(FocusMove::Left);
        assert_eq!(state.focused, Some(3));
        state.move_focus(FocusMove::First);
        assert_eq!(state.focused, Some(1));
        state.move_focus(FocusMove::Left);
        assert_eq!(state.focused, Some(1));
        state.move_focus(FocusMove::Last);
        assert_eq!(state.focused, Some(7));
    }

    #[test]
    fn test_move_focus_scrolls_into_view() {
        let mut state = loaded(9);
        state.set_grid_geometry(3, 1);

        state.move_focus(FocusMove::Down);
        assert_eq!(state.grid_scroll, 1);
        state.move_focus(FocusMove::Last);
        assert_eq!(state.grid_scroll, 2);
        state.move_focus(FocusMove::First);
        assert_eq!(state.grid_scroll, 0);
    }

    #[test]
    fn test_scroll_grid_is_clamped() {
        let mut state = loaded(9);
        state.set_grid_geometry(3, 2);

        state.scroll_grid(5);
        assert_eq!(state.grid_scroll, 1);
        state.scroll_grid(-5);
        assert_eq!(state.grid_scroll, 0);
    }

    #[test]
    fn test_move_focus_on_empty_list_is_noop() {
        let mut state = loaded(0);
        state.move_focus(FocusMove::Down);
        assert!(state.focused.is_none());
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::default();
        state.tick();
        assert_eq!(state.loading_frame, 1);

        let mut state = loaded(1);
        state.tick();
        assert_eq!(state.loading_frame, 0);
    }

    #[test]
    fn test_modal_scroll_is_clamped_to_limit() {
        let mut state = loaded(2);
        state.select(1);
        state.set_modal_scroll_limit(4);

        state.scroll_modal(3);
        assert_eq!(state.modal_scroll(), 3);
        state.scroll_modal(10);
        assert_eq!(state.modal_scroll(), 4);
        state.scroll_modal(-1);
        assert_eq!(state.modal_scroll(), 3);
        state.scroll_modal(i32::MIN);
        assert_eq!(state.modal_scroll(), 0);
    }

    #[test]
    fn test_modal_scroll_resets_on_select_and_dismiss() {
        let mut state = loaded(2);
        state.select(1);
        state.set_modal_scroll_limit(5);
        state.scroll_modal(5);

        state.select(2);
        assert_eq!(state.modal_scroll(), 0);

        state.set_modal_scroll_limit(5);
        state.scroll_modal(2);
        state.dismiss();
        assert_eq!(state.modal_scroll(), 0);
    }

    #[test]
    fn test_modal_scroll_ignored_without_modal() {
        let mut state = loaded(2);
        state.set_modal_scroll_limit(5);
        state.scroll_modal(2);
        assert_eq!(state.modal_scroll(), 0);
    }

    #[test]
    fn test_shrinking_limit_pulls_scroll_back() {
        let mut state = loaded(1);
        state.select(1);
        state.set_modal_scroll_limit(6);
        state.scroll_modal(6);

        state.set_modal_scroll_limit(2);
        assert_eq!(state.modal_scroll(), 2);
    }
}
