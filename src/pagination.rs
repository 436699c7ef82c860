// src/pagination.rs
use serde::Serialize;

pub const DEFAULT_SIBLING_COUNT: i64 = 1;
pub const DEFAULT_BOUNDARY_COUNT: i64 = 1;

/// Pojedynczy znacznik w pasku paginacji: konkretna strona albo wielokropek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

/// Liczba stron dla danej liczby elementów. Zero przy pustej liście albo
/// niepoprawnym rozmiarze strony.
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items <= 0 || page_size <= 0 {
        return 0;
    }
    total_items / page_size + i64::from(total_items % page_size != 0)
}

/// Wylicza kolejne znaczniki paska paginacji.
///
/// Strony brzegowe (`boundary_count` z każdej strony) są zawsze widoczne,
/// wokół bieżącej strony pokazujemy `sibling_count` sąsiadów, a resztę
/// zwijamy do `Ellipsis`. Gdy stron jest mało, zwracamy wszystkie.
///
/// Funkcja nie sprawdza, czy `current_page` mieści się w `[1, total_pages]`.
/// Przy stronie spoza zakresu zakres sąsiadów może wyjść pusty.
pub fn generate_page_items(
    current_page: i64,
    total_items: i64,
    page_size: i64,
    sibling_count: i64,
    boundary_count: i64,
) -> Vec<PageItem> {
    let sibling_count = sibling_count.max(0);
    let boundary_count = boundary_count.max(0);
    let total_pages = total_pages(total_items, page_size);

    let max_visible = 7i64
        .saturating_add(sibling_count.saturating_mul(2))
        .saturating_add(boundary_count.saturating_mul(2));
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let start_pages = 1..=boundary_count.min(total_pages);
    let end_pages = (total_pages - boundary_count + 1).max(boundary_count + 1)..=total_pages;
    let start_sibling = (boundary_count + 1).max(current_page.saturating_sub(sibling_count));
    let end_sibling = (total_pages - boundary_count).min(current_page.saturating_add(sibling_count));

    let with_ellipsis = boundary_count > 0 && sibling_count > 0;
    let left_ellipsis =
        with_ellipsis && current_page > boundary_count + sibling_count + 1;
    let right_ellipsis =
        with_ellipsis && current_page < total_pages - boundary_count - sibling_count;

    let mut items = Vec::new();
    items.extend(start_pages.map(PageItem::Page));
    if left_ellipsis {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start_sibling..=end_sibling).map(PageItem::Page));
    if right_ellipsis {
        items.push(PageItem::Ellipsis);
    }
    items.extend(end_pages.map(PageItem::Page));
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub current_page: i64,
    pub total_items: i64,
    pub page_size: i64,
    pub sibling_count: i64,
    pub boundary_count: i64,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_items: 0,
            page_size: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
        }
    }
}

impl PaginationRequest {
    pub fn new(current_page: i64, total_items: i64, page_size: i64) -> Self {
        Self {
            current_page,
            total_items,
            page_size,
            ..Self::default()
        }
    }

    pub fn with_sibling_count(mut self, sibling_count: i64) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn with_boundary_count(mut self, boundary_count: i64) -> Self {
        self.boundary_count = boundary_count;
        self
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.total_items, self.page_size)
    }

    pub fn items(&self) -> Vec<PageItem> {
        generate_page_items(
            self.current_page,
            self.total_items,
            self.page_size,
            self.sibling_count,
            self.boundary_count,
        )
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Offset pierwszego elementu strony `page` (numeracja od 1).
    pub fn offset_of(&self, page: i64) -> i64 {
        (page - 1).max(0).saturating_mul(self.page_size.max(0))
    }
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub pages: Vec<PageItem>,
    pub data: Vec<T>,
}
