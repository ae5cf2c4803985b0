use tracing::info;

use crate::domain::listing::{property_title, view, FilterSpec, ListingView};
use crate::domain::property::Property;
use crate::domain::sorting::SortKey;
use crate::domain::stats::{stats, TicketStats};
use crate::error::Result;
use crate::storage::DataSource;
use crate::store::{StoreConfig, TicketQuery, TicketStore};

/// One storefront session: the loaded catalog plus its ticket store.
///
/// Ticket changes made through [`Session::tickets_mut`] are discarded when
/// the session is dropped.
#[derive(Debug)]
pub struct Session {
    properties: Vec<Property>,
    tickets: TicketStore,
}

impl Session {
    /// Loads seed data from `source` and builds the ticket store
    pub async fn open(source: &dyn DataSource, config: StoreConfig) -> Result<Self> {
        let properties = source.load_properties().await?;
        let tickets = source.load_tickets().await?;

        info!(
            properties = properties.len(),
            tickets = tickets.len(),
            "opened session"
        );

        Ok(Self {
            properties,
            tickets: TicketStore::with_tickets(config, tickets),
        })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn tickets(&self) -> &TicketStore {
        &self.tickets
    }

    pub fn tickets_mut(&mut self) -> &mut TicketStore {
        &mut self.tickets
    }

    /// Filtered, sorted and partitioned listings
    pub fn listings(&self, spec: &FilterSpec, key: SortKey) -> ListingView<'_> {
        view(&self.properties, spec, key)
    }

    /// Status counts over the tickets matching `query`
    pub fn ticket_stats(&self, query: &TicketQuery) -> TicketStats {
        stats(self.tickets.query(query))
    }

    /// Title of the property a ticket refers to
    pub fn property_title(&self, property_id: &str) -> &str {
        property_title(&self.properties, property_id)
    }
}
