use crate::{
    domain::{property::Property, ticket::Ticket},
    error::Result,
};
use async_trait::async_trait;

pub mod file_source;
pub mod memory_source;

pub use file_source::FileSource;
pub use memory_source::MemorySource;

/// Read-only source of the seed data a session starts from.
///
/// Nothing is ever written back; ticket changes live only in the
/// [`TicketStore`](crate::store::TicketStore) for the session.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Loads the property catalog, validated for unique ids and
    /// non-negative numbers
    async fn load_properties(&self) -> Result<Vec<Property>>;

    /// Loads the initial tickets in storage order (newest first)
    async fn load_tickets(&self) -> Result<Vec<Ticket>>;
}
