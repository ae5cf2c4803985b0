use crate::domain::property::Property;
use crate::error::HomedeskError;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Orderings offered by the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    FeaturedFirst,
    PriceAscending,
    PriceDescending,
    NewestFirst,
}

impl FromStr for SortKey {
    type Err = HomedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "featured" | "featured-first" => Ok(SortKey::FeaturedFirst),
            "price-low" | "price-asc" | "price-ascending" => Ok(SortKey::PriceAscending),
            "price-high" | "price-desc" | "price-descending" => Ok(SortKey::PriceDescending),
            "newest" | "newest-first" => Ok(SortKey::NewestFirst),
            _ => Err(HomedeskError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::FeaturedFirst => write!(f, "featured"),
            SortKey::PriceAscending => write!(f, "price-low"),
            SortKey::PriceDescending => write!(f, "price-high"),
            SortKey::NewestFirst => write!(f, "newest"),
        }
    }
}

/// Sorts listings in-place by the given key.
///
/// The sort is stable: listings that compare equal keep their input order.
/// Works on owned listings as well as on borrowed ones, so a view can be
/// ordered without cloning the catalog.
///
/// # Examples
/// ```
/// use homedesk_core::domain::property::{Property, PropertyCategory};
/// use homedesk_core::domain::sorting::{sort_properties, SortKey};
///
/// let mut listings = vec![
///     Property::new("b", PropertyCategory::Landed, 2_000_000.0),
///     Property::new("a", PropertyCategory::Hdb, 450_000.0),
/// ];
///
/// sort_properties(&mut listings, SortKey::PriceAscending);
/// assert_eq!(listings[0].id, "a");
/// ```
pub fn sort_properties<P: Borrow<Property>>(listings: &mut [P], key: SortKey) {
    listings.sort_by(|a, b| compare(a.borrow(), b.borrow(), key));
}

fn compare(a: &Property, b: &Property, key: SortKey) -> Ordering {
    match key {
        // true before false
        SortKey::FeaturedFirst => b.featured.cmp(&a.featured),
        SortKey::PriceAscending => a.price.total_cmp(&b.price),
        SortKey::PriceDescending => b.price.total_cmp(&a.price),
        SortKey::NewestFirst => b.date_added.cmp(&a.date_added),
    }
}
