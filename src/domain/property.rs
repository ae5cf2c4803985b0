use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

use crate::error::{HomedeskError, Result};

/// Category of a listed property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    Condominium,
    #[serde(rename = "HDB")]
    Hdb,
    Landed,
    Shophouse,
    Commercial,
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condominium => write!(f, "Condominium"),
            Self::Hdb => write!(f, "HDB"),
            Self::Landed => write!(f, "Landed"),
            Self::Shophouse => write!(f, "Shophouse"),
            Self::Commercial => write!(f, "Commercial"),
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = HomedeskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "condominium" | "condo" => Ok(Self::Condominium),
            "hdb" => Ok(Self::Hdb),
            "landed" => Ok(Self::Landed),
            "shophouse" => Ok(Self::Shophouse),
            "commercial" => Ok(Self::Commercial),
            _ => Err(HomedeskError::InvalidCategory(s.to_string())),
        }
    }
}

/// Market status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Available,
    #[serde(rename = "Under Offer")]
    UnderOffer,
    Sold,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::UnderOffer => write!(f, "Under Offer"),
            Self::Sold => write!(f, "Sold"),
        }
    }
}

impl FromStr for ListingStatus {
    type Err = HomedeskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "under offer" | "under-offer" | "underoffer" => Ok(Self::UnderOffer),
            "sold" => Ok(Self::Sold),
            _ => Err(HomedeskError::InvalidListingStatus(s.to_string())),
        }
    }
}

/// Street address plus map coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A listed property.
///
/// Supplied by the host at session start and never mutated by this crate.
/// Field names on the wire follow the storefront's seed data (`camelCase`,
/// `type` for the category, `sqft` for the floor area).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub category: PropertyCategory,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "sqft")]
    pub area_sqft: f64,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: ListingStatus,
    pub agent: String,
    pub agent_phone: String,
    #[serde(with = "date_added")]
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub tenure: String,
    pub psf: f64,
}

impl Property {
    /// Creates an available, non-featured listing with empty optional fields
    pub fn new(id: impl Into<String>, category: PropertyCategory, price: f64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            category,
            price,
            bedrooms: 0,
            bathrooms: 0,
            area_sqft: 0.0,
            location: Location {
                address: String::new(),
                lat: 0.0,
                lng: 0.0,
            },
            images: Vec::new(),
            description: String::new(),
            amenities: Vec::new(),
            status: ListingStatus::Available,
            agent: String::new(),
            agent_phone: String::new(),
            date_added: Utc::now(),
            featured: false,
            property_type: String::new(),
            tenure: String::new(),
            psf: 0.0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn added_on(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Checks the numeric field constraints of a single listing
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id must not be blank"));
        }
        for (field, value) in [
            ("price", self.price),
            ("sqft", self.area_sqft),
            ("psf", self.psf),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(self.invalid(&format!("{field} must be a non-negative number")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> HomedeskError {
        HomedeskError::InvalidProperty {
            id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Validates every listing and checks that ids are unique across the set
pub fn validate_catalog(properties: &[Property]) -> Result<()> {
    let mut seen = HashSet::with_capacity(properties.len());
    for property in properties {
        property.validate()?;
        if !seen.insert(property.id.as_str()) {
            return Err(property.invalid("duplicate id"));
        }
    }
    Ok(())
}

/// Parses a listing date given either as `YYYY-MM-DD` or RFC 3339
pub fn parse_date_added(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("invalid date '{raw}', expected YYYY-MM-DD or RFC 3339"))
}

mod date_added {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_added(&raw).map_err(serde::de::Error::custom)
    }
}
