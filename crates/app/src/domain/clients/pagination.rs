//! Client listing pages.

use crate::domain::clients::records::ClientRecord;

/// Page size used when the caller gives none, or an unusable one.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// A window into the ordered client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    offset: i64,
}

impl PageRequest {
    /// Build a page request, falling back to the defaults for a limit that is not
    /// positive or an offset that is negative.
    #[must_use]
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_PAGE_LIMIT),
            offset: offset.filter(|offset| *offset >= 0).unwrap_or(0),
        }
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// The page after this one, if `total` rows leave anything past it.
    #[must_use]
    pub fn next(&self, total: i64) -> Option<Self> {
        let offset = self.offset.saturating_add(self.limit);

        (offset < total).then_some(Self {
            limit: self.limit,
            offset,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Listing query: a page plus an optional exact-match city filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientsQuery {
    pub page: PageRequest,
    pub city: Option<String>,
}

impl ClientsQuery {
    /// An empty city means no filter.
    #[must_use]
    pub fn new(page: PageRequest, city: Option<String>) -> Self {
        Self {
            page,
            city: city.filter(|city| !city.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
    /// Query for the following page, keeping the same limit and city filter.
    pub next: Option<ClientsQuery>,
}

impl PageInfo {
    #[must_use]
    pub fn new(total: i64, query: &ClientsQuery) -> Self {
        let limit = query.page.limit();

        Self {
            total,
            total_pages: total / limit + i64::from(total % limit != 0),
            current_page: (query.page.offset() / limit).saturating_add(1),
            next: query.page.next(total).map(|page| ClientsQuery {
                page,
                city: query.city.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientsPage {
    pub clients: Vec<ClientRecord>,
    pub info: PageInfo,
}
