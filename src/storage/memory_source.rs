use crate::{
    domain::{
        property::{validate_catalog, Property},
        ticket::Ticket,
    },
    error::Result,
    storage::DataSource,
};
use async_trait::async_trait;

/// Seed data already held in memory, e.g. embedded in the host binary
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    properties: Vec<Property>,
    tickets: Vec<Ticket>,
}

impl MemorySource {
    pub fn new(properties: Vec<Property>, tickets: Vec<Ticket>) -> Self {
        Self {
            properties,
            tickets,
        }
    }

    /// Parses both collections from JSON arrays
    pub fn from_json(properties: &str, tickets: &str) -> Result<Self> {
        Ok(Self::new(
            serde_json::from_str(properties)?,
            serde_json::from_str(tickets)?,
        ))
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn load_properties(&self) -> Result<Vec<Property>> {
        validate_catalog(&self.properties)?;
        Ok(self.properties.clone())
    }

    async fn load_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.clone())
    }
}
