use crate::error::{Error, Result};

pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: u32,
    page_count: u32,
}

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub entries: &'a [T],
    pub current_page: u32,
    pub total_pages: u32,
    pub total_entries: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<'a, T> Paginator<'a, T> {
    pub fn from(items: &'a [T], page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidArgument(
                "page_size has to be greater than 0".to_string(),
            ));
        }

        // An empty list still has one (empty) page
        let item_count = items.len() as u32;
        let page_count = if item_count == 0 {
            1
        } else {
            (item_count - 1) / page_size + 1
        };

        Ok(Paginator {
            items,
            page_size,
            page_count,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Out-of-range page numbers clamp to the nearest valid page instead of
    /// failing, so a stale ?page= link still renders something.
    pub fn page(&self, page: u32) -> Page<'a, T> {
        let page = page.clamp(1, self.page_count);

        let index = ((page - 1) * self.page_size) as usize;
        let end = usize::min(index + self.page_size as usize, self.items.len());

        Page {
            entries: &self.items[index..end],
            current_page: page,
            total_pages: self.page_count,
            total_entries: self.items.len(),
            has_next: page < self.page_count,
            has_prev: page > 1,
        }
    }
}

pub fn paginate<T>(items: &[T], page: u32, page_size: u32) -> Result<Page<'_, T>> {
    Ok(Paginator::from(items, page_size)?.page(page))
}
