use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
    /// Link to the following page, only when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl PaginationMeta {
    /// `page` is zero-based; `path` is the listing the `next` link points at.
    pub fn new(page: i64, page_size: i64, total_records: i64, path: &str) -> Self {
        let total_pages = if page_size > 0 {
            ((total_records as f64) / (page_size as f64)).ceil() as i64
        } else {
            0
        };
        let next = page
            .checked_add(1)
            .filter(|next| *next < total_pages)
            .map(|next| format!("{}?page={}", path, next));

        Self {
            current_page: page,
            page_size,
            total_records,
            total_pages,
            next,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(
        results: Vec<T>,
        page: i64,
        page_size: i64,
        total_records: i64,
        path: &str,
    ) -> Self {
        Self {
            results,
            pagination: PaginationMeta::new(page, page_size, total_records, path),
        }
    }
}
