//! Pagination and ordering shared by the list endpoints.
//!
//! Pages are 1-based. The page size comes from the `perpage` parameter and is clamped to
//! `1..=MAX_PER_PAGE`; a page past the end yields an empty result list rather than an error.
//! Ordering is restricted to an allow-list per resource, see [`SortField`].

use crate::server::{
    error::AppError,
    util::parse::{invalid, parse_int},
};

/// Page size used when `perpage` is absent.
pub const DEFAULT_PER_PAGE: u64 = 3;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 5;

/// Requested page of a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Builds a page request from the raw `page` and `perpage` query values.
    ///
    /// A `perpage` outside `1..=MAX_PER_PAGE` is clamped into range. A `page` of zero is
    /// treated as the first page.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Parsed and clamped request
    /// - `Err(AppError::BadRequest)` - Either value is not a non-negative integer
    pub fn from_query(page: Option<&str>, perpage: Option<&str>) -> Result<Self, AppError> {
        let page = match page {
            Some(value) => parse_int::<u64>("page", value)?.max(1),
            None => 1,
        };

        let per_page = match perpage {
            Some(value) => clamp_per_page(value)?,
            None => DEFAULT_PER_PAGE,
        };

        Ok(Self { page, per_page })
    }

    /// Zero-based page index as used by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// Clamps a `perpage` value of any length into `1..=MAX_PER_PAGE`.
///
/// Integers too large for `u64` clamp like any other oversized value; only non-integers
/// are rejected.
fn clamp_per_page(value: &str) -> Result<u64, AppError> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid("perpage", value));
    }
    if negative {
        return Ok(1);
    }

    Ok(digits
        .parse::<u64>()
        .map_or(MAX_PER_PAGE, |per_page| per_page.clamp(1, MAX_PER_PAGE)))
}

/// One page of results together with the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages: total.div_ceil(request.per_page),
        }
    }
}

/// A column a list endpoint may be ordered by.
///
/// Implemented by an enum per resource so that only known columns ever reach the query.
pub trait SortField: Sized + Copy + Default {
    /// Maps the `ordering` parameter (without a leading `-`) to a field.
    fn from_name(name: &str) -> Option<Self>;
}

/// Parsed `ordering` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort<F> {
    pub field: F,
    pub descending: bool,
}

impl<F: SortField> Sort<F> {
    /// Parses the raw `ordering` value. A leading `-` selects descending order.
    ///
    /// # Returns
    /// - `Ok(Sort)` - Known field, or the default field ascending when absent or blank
    /// - `Err(AppError::BadRequest)` - Field is not in the allow-list
    pub fn from_query(ordering: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = ordering.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self {
                field: F::default(),
                descending: false,
            });
        };

        let (name, descending) = match raw.strip_prefix('-') {
            Some(name) => (name, true),
            None => (raw, false),
        };

        let field = F::from_name(name)
            .ok_or_else(|| AppError::BadRequest("Invalid ordering field".to_string()))?;

        Ok(Self { field, descending })
    }

    pub fn order(&self) -> sea_orm::Order {
        if self.descending {
            sea_orm::Order::Desc
        } else {
            sea_orm::Order::Asc
        }
    }
}
