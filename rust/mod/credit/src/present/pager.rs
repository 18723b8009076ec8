//! Zero-based page cursor.

use credit_client::Page;

/// Page index plus the server's page count.
///
/// `next`/`previous` never leave `[0, total_pages - 1]`; with no pages the
/// only index is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }.clamped()
    }

    pub fn of<T>(page: &Page<T>) -> Self {
        Self::new(page.number, page.total_pages)
    }

    fn last(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    fn clamped(self) -> Self {
        Self {
            page: self.page.min(self.last()),
            ..self
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn next(&self) -> Self {
        Self {
            page: (self.page + 1).min(self.last()),
            ..*self
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..*self
        }
    }

    /// `Page 2 of 5`, one-based for people.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages.max(1))
    }
}

/// Direction of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Next,
    Previous,
}

impl Pager {
    pub fn turn(&self, turn: PageTurn) -> Self {
        match turn {
            PageTurn::Next => self.next(),
            PageTurn::Previous => self.previous(),
        }
    }
}
