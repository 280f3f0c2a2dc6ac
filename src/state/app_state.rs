//! Application state definitions

use super::gallery::GalleryState;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Home,
    About,
    Projects,
    Services,
    Clients,
    Careers,
    Contact,
}

impl View {
    /// Views in sidebar order
    pub const NAVIGATION: [View; 7] = [
        View::Home,
        View::About,
        View::Projects,
        View::Services,
        View::Clients,
        View::Careers,
        View::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Splash => "",
            View::Home => "Home",
            View::About => "About",
            View::Projects => "Projects",
            View::Services => "Services",
            View::Clients => "Clients",
            View::Careers => "Careers",
            View::Contact => "Contact",
        }
    }

    /// Position in the sidebar, `None` for the splash screen
    pub fn nav_index(self) -> Option<usize> {
        Self::NAVIGATION.iter().position(|v| *v == self)
    }

    pub fn next(self) -> Self {
        match self.nav_index() {
            Some(i) => Self::NAVIGATION[(i + 1) % Self::NAVIGATION.len()],
            None => View::Home,
        }
    }

    pub fn prev(self) -> Self {
        let len = Self::NAVIGATION.len();
        match self.nav_index() {
            Some(i) => Self::NAVIGATION[(i + len - 1) % len],
            None => View::Home,
        }
    }

    /// Whether typing goes into a form on this view
    pub fn is_form_view(self) -> bool {
        matches!(self, View::Contact)
    }
}

/// Tabs of the services view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceTab {
    #[default]
    Hvac,
    Plumbing,
    Electrical,
}

impl ServiceTab {
    pub const ALL: [ServiceTab; 3] = [ServiceTab::Hvac, ServiceTab::Plumbing, ServiceTab::Electrical];

    pub fn next(self) -> Self {
        match self {
            Self::Hvac => Self::Plumbing,
            Self::Plumbing => Self::Electrical,
            Self::Electrical => Self::Hvac,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Hvac => Self::Electrical,
            Self::Plumbing => Self::Hvac,
            Self::Electrical => Self::Plumbing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hvac => "HVAC",
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical & ELV",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Page scrolling within the current view
    pub scroll_offset: usize,

    // Hero carousel pointer/focus
    pub hero_hovered: bool,
    pub hero_focused: bool,

    // Client testimonials carousel pointer
    pub clients_hovered: bool,

    // Per-view selections
    pub gallery: GalleryState,
    pub service_tab: ServiceTab,
    pub selected_position: usize,

    // Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(gallery: GalleryState) -> Self {
        Self {
            current_view: View::Splash,
            scroll_offset: 0,
            hero_hovered: false,
            hero_focused: false,
            clients_hovered: false,
            gallery,
            service_tab: ServiceTab::default(),
            selected_position: 0,
            error_queue: VecDeque::new(),
        }
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn select_next_position(&mut self, count: usize) {
        if count > 0 && self.selected_position < count - 1 {
            self.selected_position += 1;
        }
    }

    pub fn select_prev_position(&mut self) {
        self.selected_position = self.selected_position.saturating_sub(1);
    }

    /// Whether the hero carousel should hold its current slide
    pub fn hero_paused(&self) -> bool {
        self.hero_hovered || self.hero_focused
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "showing error");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
