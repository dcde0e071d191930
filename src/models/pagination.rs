use serde::Serialize;

use super::Manga;

/// Paging information returned alongside every catalog list response.
///
/// Replaced wholesale on each successful fetch; never patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMetadata {
    pub total: u32,
    pub current_page: u32,
    pub items_per_page: u32,
}

impl PaginationMetadata {
    pub fn new(total: u32, current_page: u32, items_per_page: u32) -> Self {
        Self {
            total,
            current_page: current_page.max(1),
            items_per_page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.items_per_page)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize)]
pub struct MangaPage {
    pub mangas: Vec<Manga>,
    pub metadata: PaginationMetadata,
}
