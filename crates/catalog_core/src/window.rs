//! Windowing over the filtered set.
//!
//! One state machine backs two presentations: reveal mode accumulates a
//! growing prefix ("load more"), page mode replaces the window with a single
//! page slice. Both are reset by [`RenderWindow::set_source`].

use crate::record::DisplayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Reveal,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    pub displayed_count: usize,
    pub total_count: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWindow {
    source: Vec<DisplayRecord>,
    items_per_page: usize,
    revealed_count: usize,
    current_page: usize,
    total_pages: usize,
    mode: WindowMode,
}

impl RenderWindow {
    /// `items_per_page` of zero is treated as one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            source: Vec::new(),
            items_per_page: items_per_page.max(1),
            revealed_count: 0,
            current_page: 1,
            total_pages: 1,
            mode: WindowMode::Reveal,
        }
    }

    pub fn set_source(&mut self, filtered: Vec<DisplayRecord>) {
        self.total_pages = filtered.len().div_ceil(self.items_per_page).max(1);
        self.source = filtered;
        self.revealed_count = 0;
        self.current_page = 1;
        self.mode = WindowMode::Reveal;
    }

    /// Extends the revealed prefix by one page. Returns whether items remain.
    pub fn reveal_next(&mut self) -> bool {
        self.mode = WindowMode::Reveal;
        if !self.has_more() {
            return false;
        }
        self.revealed_count = (self.revealed_count + self.items_per_page).min(self.source.len());
        self.has_more()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.current_page = page;
        self.mode = WindowMode::Page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// The currently materialized items for the active mode.
    pub fn visible(&self) -> &[DisplayRecord] {
        match self.mode {
            WindowMode::Reveal => &self.source[..self.revealed_count],
            WindowMode::Page => self.page_slice(self.current_page),
        }
    }

    pub fn page_slice(&self, page: usize) -> &[DisplayRecord] {
        if page < 1 || page > self.total_pages {
            return &[];
        }
        let start = ((page - 1) * self.items_per_page).min(self.source.len());
        let end = (start + self.items_per_page).min(self.source.len());
        &self.source[start..end]
    }

    pub fn window_info(&self) -> WindowInfo {
        WindowInfo {
            displayed_count: self.revealed_count,
            total_count: self.source.len(),
            has_more: self.has_more(),
        }
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next: self.current_page < self.total_pages,
            has_prev: self.current_page > 1,
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    fn has_more(&self) -> bool {
        self.revealed_count < self.source.len()
    }
}
