//! Client view state: exactly one view is active at a time, with a stack
//! of previous views for "back".

use serde::{Deserialize, Serialize};

const MAX_HISTORY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    Recommended,
    Recent,
    SavedSearches,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    Dashboard { tab: DashboardTab },
    Profile,
    ResumeUpload,
    JobDetail { job_id: String },
    SavedJobs,
    MyJobs,
    Notifications,
    AiChat,
    /// Waiting for the user to enter a location before searching `role`.
    LocationPrompt { role: String },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Dashboard { tab: DashboardTab::Recommended }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ViewState,
    history: Vec<ViewState>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Switches to `view`, remembering the current one. Navigating to the
    /// active view does nothing.
    pub fn navigate(&mut self, view: ViewState) {
        if view == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, view);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    /// Returns to the previous view. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Swaps the active view without recording history.
    pub fn replace(&mut self, view: ViewState) {
        self.current = view;
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.current = ViewState::default();
    }

    /// Leaves an active location prompt and hands back the role that was
    /// waiting on it.
    pub fn complete_location_prompt(&mut self) -> Option<String> {
        let ViewState::LocationPrompt { role } = &self.current else {
            return None;
        };
        let role = role.clone();
        if !self.back() {
            self.current = ViewState::default();
        }
        Some(role)
    }
}
