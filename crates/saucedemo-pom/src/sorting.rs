// Sorting - Product sort orders and order checks for the listing page
//
// The listing's sort select has four options. After selecting one, the names
// or prices read back from the page must be monotonic in the matching key.
// Empty and single-element lists are trivially sorted.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Sort options offered by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameAscending,
    NameDescending,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NameAscending,
        SortOrder::NameDescending,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    /// `value` attribute of the matching `<option>`
    pub fn option_value(&self) -> &'static str {
        match self {
            SortOrder::NameAscending => "az",
            SortOrder::NameDescending => "za",
            SortOrder::PriceAscending => "lohi",
            SortOrder::PriceDescending => "hilo",
        }
    }

    /// Visible label of the matching `<option>`
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NameAscending => "Name (A to Z)",
            SortOrder::NameDescending => "Name (Z to A)",
            SortOrder::PriceAscending => "Price (low to high)",
            SortOrder::PriceDescending => "Price (high to low)",
        }
    }

    /// True when the order is keyed on price (the values are `$`-prefixed prices)
    pub fn by_price(&self) -> bool {
        matches!(self, SortOrder::PriceAscending | SortOrder::PriceDescending)
    }

    fn descending(&self) -> bool {
        matches!(self, SortOrder::NameDescending | SortOrder::PriceDescending)
    }

    /// Checks that `values` (names, or prices for price orders) are in this order.
    ///
    /// Fails with [`Error::AssertionFailed`] naming the first out-of-order pair, or when
    /// a price cannot be parsed.
    pub fn assert_sorted<S: AsRef<str>>(&self, values: &[S]) -> Result<()> {
        match self.first_violation(values)? {
            None => Ok(()),
            Some(index) => Err(Error::AssertionFailed(format!(
                "Expected {} order, but '{}' (position {}) is followed by '{}'",
                self.label(),
                values[index].as_ref(),
                index,
                values[index + 1].as_ref()
            ))),
        }
    }

    /// Returns whether `values` are in this order.
    pub fn is_sorted<S: AsRef<str>>(&self, values: &[S]) -> Result<bool> {
        Ok(self.first_violation(values)?.is_none())
    }

    // Index of the first element that is out of order with its successor.
    fn first_violation<S: AsRef<str>>(&self, values: &[S]) -> Result<Option<usize>> {
        for (index, pair) in values.windows(2).enumerate() {
            let (prev, next) = (pair[0].as_ref(), pair[1].as_ref());
            let ordering = if self.by_price() {
                let (a, b) = (parse_price(prev)?, parse_price(next)?);
                a.total_cmp(&b)
            } else {
                prev.cmp(next)
            };

            let in_order = if self.descending() {
                ordering != Ordering::Less
            } else {
                ordering != Ordering::Greater
            };
            if !in_order {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

/// Parses a display price such as `"$29.99"`. Non-finite values (`NaN`, `inf`) are rejected.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let price = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .parse::<f64>()
        .map_err(|e| Error::AssertionFailed(format!("Invalid price '{}': {}", raw, e)))?;
    if !price.is_finite() {
        return Err(Error::AssertionFailed(format!(
            "Invalid price '{}': not a finite number",
            raw
        )));
    }
    Ok(price)
}
