//! # Homedesk Core
//!
//! Listing and maintenance-ticket logic for a property storefront.
//!
//! This crate provides the listing filter/sort engine and the ticket
//! workflow store. It works on plain in-memory data and knows nothing about
//! page rendering, maps or contact links; the host hands in data and
//! requests and renders the views that come back.

pub mod domain;
pub mod error;
pub mod session;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    listing::{view, FilterForm, FilterSpec, ListingView},
    property::{ListingStatus, Property, PropertyCategory},
    sorting::SortKey,
    stats::{stats, TicketStats},
    ticket::{Comment, Ticket, TicketDraft, TicketId, TicketPriority, TicketStatus, TicketUpdate},
};
pub use error::{HomedeskError, Result};
pub use session::Session;
pub use storage::DataSource;
pub use store::{StoreConfig, StoreEvent, TicketQuery, TicketStore};
