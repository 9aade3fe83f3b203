//! # Query State
//!
//! The two view parameters, `page` and `search`, travel together as a [`ViewQuery`].
//! They arrive as loose strings (flags, a query string) and default sensibly:
//! an absent page is page 1, an absent search matches everything.
//!
//! Changing the search always returns to page 1; changing the page keeps the search.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub page: usize,
    pub search: String,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ViewQuery {
    pub fn new(page: usize, search: impl Into<String>) -> Self {
        Self {
            page,
            search: search.into(),
        }
    }

    /// Builds a query from raw parameter values.
    /// A page that is missing, unparsable or below 1 becomes page 1.
    pub fn from_params(page: Option<&str>, search: Option<&str>) -> Self {
        Self {
            page: parse_page(page.unwrap_or("1")),
            search: search.unwrap_or_default().to_string(),
        }
    }

    /// Parses `search=<term>&page=<n>` as a URL query string. Unknown keys are ignored;
    /// `+` and percent escapes are decoded.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut page = None;
        let mut search = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => page = Some(value.into_owned()),
                "search" => search = Some(value.into_owned()),
                _ => {}
            }
        }
        Self::from_params(page.as_deref(), search.as_deref())
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("search", &self.search)
            .append_pair("page", &self.page.to_string())
            .finish()
    }
}

impl fmt::Display for ViewQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

fn parse_page(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}
