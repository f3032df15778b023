//! Pagination limits
//!
//! Page size is capped at [`MAX_PAGE_ITEMS`]; larger requests are silently
//! reduced. Page numbers past the end are pulled back to the last page, so a
//! pagination request never fails once it has been validated.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Error, Result};

/// Largest page size served
pub const MAX_PAGE_ITEMS: u32 = 20;

/// Page size when the caller gives none
pub const DEFAULT_PAGE_ITEMS: u32 = 10;

/// Page number when the caller gives none
pub const DEFAULT_PAGE: u32 = 1;

fn default_page() -> i64 {
    DEFAULT_PAGE as i64
}

fn default_items() -> i64 {
    DEFAULT_PAGE_ITEMS as i64
}

/// Raw pagination parameters, as received from a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Records per page
    #[serde(default = "default_items")]
    pub items: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            items: default_items(),
        }
    }
}

impl PageQuery {
    /// Validate into a [`PageRequest`]
    ///
    /// # Errors
    /// Returns `InvalidInput` if `page` or `items` is below 1.
    pub fn into_request(self) -> Result<PageRequest> {
        if self.page < 1 {
            return Err(Error::invalid_input(format!(
                "page must be greater than or equal to 1, got {}",
                self.page
            )));
        }
        if self.items < 1 {
            return Err(Error::invalid_input(format!(
                "items must be greater than or equal to 1, got {}",
                self.items
            )));
        }
        let page = u32::try_from(self.page).unwrap_or(u32::MAX);
        let items = u32::try_from(self.items).unwrap_or(u32::MAX);
        PageRequest::new(page, items)
    }
}

/// A validated pagination window
///
/// `items` is already capped at [`MAX_PAGE_ITEMS`]; `page` is capped against
/// the record count by [`PageRequest::bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    items: u32,
}

impl PageRequest {
    /// Create a request, capping `items` at [`MAX_PAGE_ITEMS`]
    ///
    /// # Errors
    /// Returns `InvalidInput` if `page` or `items` is zero.
    pub fn new(page: u32, items: u32) -> Result<Self> {
        if page == 0 {
            return Err(Error::invalid_input("page must be greater than or equal to 1"));
        }
        if items == 0 {
            return Err(Error::invalid_input("items must be greater than or equal to 1"));
        }
        Ok(Self {
            page,
            items: items.min(MAX_PAGE_ITEMS),
        })
    }

    /// Requested page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size after capping
    pub fn items(&self) -> u32 {
        self.items
    }

    /// Index range of this page within a sequence of `count` records
    ///
    /// The page is clamped to the last page (`ceil(count / items)`).
    /// An empty sequence yields an empty range.
    pub fn bounds(&self, count: usize) -> Range<usize> {
        if count == 0 {
            return 0..0;
        }
        let items = self.items as usize;
        let last_page = count.div_ceil(items);
        let page = (self.page as usize).min(last_page);
        let start = (page - 1) * items;
        let stop = (start + items).min(count);
        start..stop
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items: DEFAULT_PAGE_ITEMS,
        }
    }
}
