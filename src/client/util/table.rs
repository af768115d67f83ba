//! Search filtering and pagination for dashboard tables.
//!
//! Both are derived view state and never touch the stores.

use crate::model::{account::AccountDto, ship::ShipDto};

/// Something a table row can be matched against
pub trait Searchable {
    /// Fields the search box matches, case-insensitively
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for AccountDto {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }
}

impl Searchable for ShipDto {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.imo.as_str()]
    }
}

/// Rows whose fields contain every whitespace-separated term of `query`
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect();

    items
        .iter()
        .filter(|item| {
            let fields: Vec<String> = item
                .search_fields()
                .into_iter()
                .map(str::to_lowercase)
                .collect();

            terms
                .iter()
                .all(|term| fields.iter().any(|field| field.contains(term.as_str())))
        })
        .collect()
}

/// One page of rows plus what the pager needs to render
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// 1-based page actually shown, clamped into range
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Slice out page `page` (1-based); out of range pages clamp to the nearest valid page
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = rows.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(rows.len());
    let end = (start + per_page).min(rows.len());

    Page {
        rows: &rows[start..end],
        page,
        total_pages,
        total_rows: rows.len(),
    }
}
