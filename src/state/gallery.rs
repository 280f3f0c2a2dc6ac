//! Project gallery filter and hover state

use crate::content::GalleryItem;

/// Filter value matching every project
pub const ALL_CATEGORIES: &str = "all";

/// Category filter and highlighted item of the projects view
#[derive(Debug, Clone)]
pub struct GalleryState {
    categories: Vec<String>,
    filter: usize,
    /// Index into the visible items; drives the highlight style
    pub hovered: Option<usize>,
}

impl GalleryState {
    /// Build the category list: "all" then each category in first-seen order
    pub fn new(items: &[GalleryItem]) -> Self {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for category in items.iter().filter_map(|item| item.category.as_deref()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        Self {
            categories,
            filter: 0,
            hovered: None,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.categories[self.filter]
    }

    pub fn next_category(&mut self) {
        self.filter = (self.filter + 1) % self.categories.len();
        self.hovered = None;
    }

    pub fn prev_category(&mut self) {
        self.filter = (self.filter + self.categories.len() - 1) % self.categories.len();
        self.hovered = None;
    }

    /// Items passing the active filter
    pub fn visible<'a>(&self, items: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        let active = self.active_category();
        items
            .iter()
            .filter(|item| active == ALL_CATEGORIES || item.category.as_deref() == Some(active))
            .collect()
    }

    pub fn hover_next(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(i) => (i + 1) % visible_len,
            None => 0,
        });
    }

    pub fn hover_prev(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(0) | None => visible_len - 1,
            Some(i) => i - 1,
        });
    }
}
