//! Filtering, ordering and partitioning of the property catalog.
//!
//! [`view`] is a pure function of its inputs: it never mutates the catalog
//! and returns borrowed listings, so calling it repeatedly with the same
//! arguments yields the same view.

use crate::domain::property::{ListingStatus, Property, PropertyCategory};
use crate::domain::sorting::{sort_properties, SortKey};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display title used when a ticket references a listing that is not loaded
pub const UNKNOWN_PROPERTY_TITLE: &str = "Unknown Property";

/// Conjunction of optional listing predicates.
///
/// An absent field never excludes anything; the default value is the
/// identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub category: Option<PropertyCategory>,
    pub status: Option<ListingStatus>,
}

impl FilterSpec {
    /// Returns true when no predicate is set
    pub fn is_unconstrained(&self) -> bool {
        self == &FilterSpec::default()
    }

    /// Checks a listing against every set predicate
    pub fn matches(&self, property: &Property) -> bool {
        let above_min = self.min_price.map_or(true, |min| property.price >= min);
        let below_max = self.max_price.map_or(true, |max| property.price <= max);
        let enough_bedrooms = self
            .min_bedrooms
            .map_or(true, |min| property.bedrooms >= min);
        let category_matches = self.category.map_or(true, |c| property.category == c);
        let status_matches = self.status.map_or(true, |s| property.status == s);

        above_min && below_max && enough_bedrooms && category_matches && status_matches
    }
}

/// Filter values as typed into the listing page's filter panel.
///
/// Blank fields impose no constraint. Numeric fields that do not parse are
/// also treated as blank rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterForm {
    pub price_min: String,
    pub price_max: String,
    pub bedrooms: String,
    pub property_type: String,
    pub status: String,
}

impl FilterForm {
    /// Converts the raw form into a [`FilterSpec`].
    ///
    /// Fails only when the category or status names an unknown value.
    pub fn to_spec(&self) -> Result<FilterSpec> {
        Ok(FilterSpec {
            min_price: parse_bound("priceMin", &self.price_min),
            max_price: parse_bound("priceMax", &self.price_max),
            min_bedrooms: parse_bedrooms(&self.bedrooms),
            category: non_blank(&self.property_type)
                .map(str::parse::<PropertyCategory>)
                .transpose()?,
            status: non_blank(&self.status)
                .map(str::parse::<ListingStatus>)
                .transpose()?,
        })
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_bound(field: &str, raw: &str) -> Option<f64> {
    let value = non_blank(raw)?;
    match value.parse::<f64>() {
        Ok(bound) if bound.is_finite() => Some(bound),
        _ => {
            debug!(field, value, "ignoring non-numeric price bound");
            None
        }
    }
}

fn parse_bedrooms(raw: &str) -> Option<u32> {
    let value = non_blank(raw)?;
    match value.parse::<u32>() {
        Ok(min) => Some(min),
        Err(_) => {
            debug!(value, "ignoring non-numeric bedroom bound");
            None
        }
    }
}

/// Filtered, ordered catalog split into featured and regular listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingView<'a> {
    pub featured: Vec<&'a Property>,
    pub regular: Vec<&'a Property>,
    /// Number of listings that passed the filter
    pub total: usize,
}

impl<'a> ListingView<'a> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates featured listings followed by regular ones
    pub fn iter(&self) -> impl Iterator<Item = &'a Property> + '_ {
        self.featured.iter().chain(self.regular.iter()).copied()
    }
}

/// Filters, sorts and partitions the catalog.
///
/// Sorting happens on the filtered set before it is split, and each
/// partition keeps the post-sort relative order.
pub fn view<'a>(properties: &'a [Property], spec: &FilterSpec, key: SortKey) -> ListingView<'a> {
    let mut matching: Vec<&Property> = properties.iter().filter(|p| spec.matches(p)).collect();
    sort_properties(&mut matching, key);

    let total = matching.len();
    let (featured, regular): (Vec<_>, Vec<_>) = matching.into_iter().partition(|p| p.featured);

    debug!(
        catalog = properties.len(),
        total,
        featured = featured.len(),
        sort = %key,
        "built listing view"
    );

    ListingView {
        featured,
        regular,
        total,
    }
}

/// Looks up a listing by id
pub fn find_property<'a>(properties: &'a [Property], id: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.id == id)
}

/// Title of the referenced listing, or [`UNKNOWN_PROPERTY_TITLE`]
pub fn property_title<'a>(properties: &'a [Property], id: &str) -> &'a str {
    find_property(properties, id)
        .map(|p| p.title.as_str())
        .unwrap_or(UNKNOWN_PROPERTY_TITLE)
}
