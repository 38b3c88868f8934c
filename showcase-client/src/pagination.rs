//! Page-window arithmetic and the todo status filter.
//!
//! Nothing here mutates the collection it is given: windows are borrowed
//! slices and filters are recomputed from the unfiltered source.

use crate::models::Todo;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;

pub const POSTS_PER_PAGE: usize = 6;
pub const TODOS_PER_PAGE: usize = 10;
pub const ALBUM_LIMIT: usize = 10;
pub const PHOTO_LIMIT: usize = 12;
pub const RELATED_TODO_LIMIT: usize = 5;

/// `ceil(len / page_size)`; an empty collection has no pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `page` (1-indexed), clamped to `len`.
pub fn page_bounds(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Current page after clamping into `[1, total_pages]`.
    pub fn effective_page(&self, len: usize) -> usize {
        self.current_page.clamp(1, self.total_pages(len).max(1))
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[page_bounds(items.len(), self.page_size, self.effective_page(items.len()))]
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len).max(1));
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn page_numbers(&self, len: usize) -> RangeInclusive<usize> {
        1..=self.total_pages(len)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TodoFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Completed, TodoFilter::Pending];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Completed => todo.completed,
            TodoFilter::Pending => !todo.completed,
        }
    }

    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|todo| self.matches(todo)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Completed => "completed",
            TodoFilter::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Completed => "Completed",
            TodoFilter::Pending => "Pending",
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TodoFilter::All),
            "completed" => Ok(TodoFilter::Completed),
            "pending" => Ok(TodoFilter::Pending),
            other => Err(format!(
                "unknown filter {:?}, expected one of: all, completed, pending",
                other
            )),
        }
    }
}
