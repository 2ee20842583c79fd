//! Pagination envelope shared by all list endpoints.
//!
//! This is the response-shaping core: given a fully filtered collection and
//! the inbound request's path/query, it produces the `{info, results}`
//! envelope with accurate counts, the clamped page slice, and reconstructed
//! next/prev links. It never fails; invalid input degrades to page 1, null
//! links, or an empty result set.

use serde::Serialize;
use url::form_urlencoded;

/// Everything the envelope builder needs to know about the inbound request.
///
/// The raw query string is parsed once into an ordered list of key/value
/// pairs with every `page` entry removed, so link reconstruction is a
/// deterministic re-serialization rather than pattern substitution on the
/// raw string.
#[derive(Debug, Clone)]
pub struct PageRequest {
    origin: String,
    path: String,
    /// Query pairs in original order, `page` entries stripped.
    query: Vec<(String, String)>,
    /// Requested page, if the (last) `page` parameter parsed as an integer.
    page: Option<u64>,
    page_size: usize,
}

impl PageRequest {
    pub fn new(origin: String, path: String, raw_query: Option<&str>, page_size: usize) -> Self {
        let mut page = None;
        let mut query = Vec::new();

        if let Some(raw) = raw_query {
            for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
                if key == "page" {
                    // Last occurrence wins; junk values fall back to page 1.
                    page = value.parse().ok();
                } else {
                    query.push((key.into_owned(), value.into_owned()));
                }
            }
        }

        Self {
            origin,
            path,
            query,
            page,
            page_size,
        }
    }

    /// Fully qualified URL for the given page: `page` always comes first,
    /// followed by the remaining query pairs in their original order.
    fn page_url(&self, page: usize) -> String {
        let mut url = format!("{}{}?page={}", self.origin, self.path, page);
        if !self.query.is_empty() {
            let rest = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            url.push('&');
            url.push_str(&rest);
        }
        url
    }
}

/// Pagination metadata: `count` covers the whole filtered collection, not
/// just the current page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Info {
    pub count: usize,
    pub pages: usize,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
}

/// The response envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub info: Info,
    pub results: Vec<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Build the envelope for one page of `content`.
    ///
    /// The requested page is clamped to `[1, pages]`: absent, non-numeric,
    /// zero, or too-large values all resolve to page 1.
    pub fn build(request: &PageRequest, content: Vec<T>) -> Self {
        let count = content.len();

        if count == 0 {
            return Self {
                info: Info {
                    count: 0,
                    pages: 0,
                    next_page: None,
                    prev_page: None,
                },
                results: Vec::new(),
            };
        }

        let pages = count.div_ceil(request.page_size);
        let current = match request.page {
            Some(p) if p >= 1 && p as usize <= pages => p as usize,
            _ => 1,
        };

        let results: Vec<T> = content
            .into_iter()
            .skip((current - 1) * request.page_size)
            .take(request.page_size)
            .collect();

        Self {
            info: Info {
                count,
                pages,
                next_page: (current < pages).then(|| request.page_url(current + 1)),
                prev_page: (current > 1).then(|| request.page_url(current - 1)),
            },
            results,
        }
    }
}
