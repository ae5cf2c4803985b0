//! In-memory ticket workflow store.
//!
//! The store owns the session's ticket collection. Every mutation builds a
//! new collection and swaps it in, so a [`TicketStore::snapshot`] taken
//! earlier keeps seeing the state it was taken from.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ticket::{Comment, CommentId, Ticket, TicketDraft, TicketId, TicketUpdate};
use crate::error::{HomedeskError, Result};

pub mod config;
pub mod query;

pub use config::StoreConfig;
pub use query::TicketQuery;

/// Change notification sent to subscribers after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(TicketId),
    Updated(TicketId),
    Commented { ticket: TicketId, comment: CommentId },
}

impl StoreEvent {
    pub fn ticket_id(&self) -> &TicketId {
        match self {
            StoreEvent::Created(id) | StoreEvent::Updated(id) => id,
            StoreEvent::Commented { ticket, .. } => ticket,
        }
    }
}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Authoritative ticket collection for one session, newest first
pub struct TicketStore {
    config: StoreConfig,
    tickets: Arc<Vec<Ticket>>,
    listeners: Vec<Listener>,
}

impl TicketStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_tickets(config, Vec::new())
    }

    /// Creates a store seeded with tickets, kept in the given order
    pub fn with_tickets(config: StoreConfig, tickets: Vec<Ticket>) -> Self {
        Self {
            config,
            tickets: Arc::new(tickets),
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Registers a callback run after every create, update and comment
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Creates an Open ticket from the draft and puts it first.
    ///
    /// Fails with [`HomedeskError::MissingField`] when the draft lacks a
    /// title, description or property reference.
    pub fn create(&mut self, mut draft: TicketDraft) -> Result<Ticket> {
        if draft.reporter.trim().is_empty() {
            draft.reporter = self.config.default_reporter.clone();
        }
        let ticket = Ticket::from_draft(self.fresh_ticket_id(), draft)?;

        let mut next = Vec::with_capacity(self.tickets.len() + 1);
        next.push(ticket.clone());
        next.extend(self.tickets.iter().cloned());
        self.tickets = Arc::new(next);

        debug!(ticket = %ticket.id, property = %ticket.property_id, "created ticket");
        self.notify(StoreEvent::Created(ticket.id.clone()));
        Ok(ticket)
    }

    /// Merges `changes` into the ticket and refreshes its update time.
    ///
    /// Unknown ids are ignored; the return value says whether anything was
    /// applied.
    pub fn update(&mut self, id: &TicketId, changes: TicketUpdate) -> bool {
        let applied = self.replace_ticket(id, |ticket| ticket.apply(changes));
        if !applied {
            warn!(ticket = %id, "ignoring update for unknown ticket");
            return false;
        }

        debug!(ticket = %id, "updated ticket");
        self.notify(StoreEvent::Updated(id.clone()));
        true
    }

    /// Appends a comment to the ticket's discussion.
    ///
    /// Blank content and unknown ids are ignored; the return value says
    /// whether the comment was added.
    pub fn add_comment(
        &mut self,
        id: &TicketId,
        author: impl Into<String>,
        content: impl Into<String>,
        attachments: Vec<String>,
    ) -> bool {
        let content = content.into();
        if content.trim().is_empty() {
            debug!(ticket = %id, "ignoring blank comment");
            return false;
        }

        let comment = Comment::new(
            CommentId::generate(&self.config.comment_id_prefix),
            author.into(),
            content,
            attachments,
        );
        let comment_id = comment.id.clone();

        if !self.replace_ticket(id, |ticket| ticket.push_comment(comment)) {
            warn!(ticket = %id, "ignoring comment for unknown ticket");
            return false;
        }

        debug!(ticket = %id, comment = %comment_id, "added comment");
        self.notify(StoreEvent::Commented {
            ticket: id.clone(),
            comment: comment_id,
        });
        true
    }

    /// Tickets matching every condition in the query, in storage order
    pub fn query(&self, query: &TicketQuery) -> Vec<&Ticket> {
        let matches = query.matcher();
        self.tickets.iter().filter(|t| matches(*t)).collect()
    }

    /// All tickets raised against one property
    pub fn tickets_for_property(&self, property_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.property_id == property_id)
            .collect()
    }

    pub fn get(&self, id: &TicketId) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| HomedeskError::TicketNotFound(id.to_string()))
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Shares the current collection without copying it
    pub fn snapshot(&self) -> Arc<Vec<Ticket>> {
        Arc::clone(&self.tickets)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    fn fresh_ticket_id(&self) -> TicketId {
        loop {
            let id = TicketId::generate(&self.config.ticket_id_prefix);
            if !self.tickets.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }

    fn replace_ticket(&mut self, id: &TicketId, edit: impl FnOnce(&mut Ticket)) -> bool {
        let Some(index) = self.tickets.iter().position(|t| &t.id == id) else {
            return false;
        };

        let mut next: Vec<Ticket> = self.tickets.as_ref().clone();
        edit(&mut next[index]);
        self.tickets = Arc::new(next);
        true
    }

    fn notify(&self, event: StoreEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketStore")
            .field("config", &self.config)
            .field("tickets", &self.tickets.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
