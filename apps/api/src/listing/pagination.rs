/// Number of records added to the visible window per "load more".
pub const PAGE_SIZE: usize = 6;

/// Visible prefix of a filtered list. Grows by `PAGE_SIZE` on demand and
/// snaps back to `PAGE_SIZE` whenever the filters change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    visible: usize,
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self { visible: PAGE_SIZE }
    }
}

impl PaginationWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.visible = PAGE_SIZE;
    }

    /// Number of records actually rendered out of `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn can_load_more(&self, total: usize) -> bool {
        self.visible_count(total) < total
    }

    /// Grows the window by one page, capped at `total`. Never shrinks it.
    /// Returns the new visible count.
    pub fn load_more(&mut self, total: usize) -> usize {
        self.visible = (self.visible + PAGE_SIZE).min(total).max(self.visible);
        self.visible_count(total)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }
}
