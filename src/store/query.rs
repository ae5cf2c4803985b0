use serde::{Deserialize, Serialize};

use crate::domain::ticket::{Ticket, TicketPriority, TicketStatus};

/// Conjunctive ticket filter; unset fields match every ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketQuery {
    /// Case-insensitive substring of the title or description
    pub text: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub property_id: Option<String>,
}

impl TicketQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn property(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = Some(property_id.into());
        self
    }

    /// Returns a predicate for this query with the search text lowercased once
    pub(crate) fn matcher(&self) -> impl Fn(&Ticket) -> bool + '_ {
        let needle = self
            .text
            .as_deref()
            .map(str::to_lowercase)
            .filter(|text| !text.is_empty());

        move |ticket: &Ticket| {
            needle.as_deref().map_or(true, |n| ticket.mentions(n))
                && self.status.map_or(true, |s| ticket.status == s)
                && self.priority.map_or(true, |p| ticket.priority == p)
                && self
                    .property_id
                    .as_deref()
                    .map_or(true, |id| ticket.property_id == id)
        }
    }

    /// Checks a single ticket against the query
    pub fn matches(&self, ticket: &Ticket) -> bool {
        (self.matcher())(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::{TicketDraft, TicketId};

    fn ticket() -> Ticket {
        let draft = TicketDraft::new("P1", "Leaky Tap", "Kitchen tap leaking")
            .with_priority(TicketPriority::High);
        Ticket::from_draft(TicketId::generate("ticket-"), draft).unwrap()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(TicketQuery::new().matches(&ticket()));
        assert!(TicketQuery::new().text("").matches(&ticket()));
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let ticket = ticket();
        assert!(TicketQuery::new().text("LEAKY").matches(&ticket));
        assert!(TicketQuery::new().text("kItChEn").matches(&ticket));
        assert!(!TicketQuery::new().text("roof").matches(&ticket));
    }

    #[test]
    fn test_all_conditions_must_hold() {
        let ticket = ticket();
        let query = TicketQuery::new()
            .text("tap")
            .status(TicketStatus::Open)
            .priority(TicketPriority::High)
            .property("P1");
        assert!(query.matches(&ticket));

        assert!(!query.clone().priority(TicketPriority::Low).matches(&ticket));
        assert!(!query.clone().property("P2").matches(&ticket));
        assert!(!query.status(TicketStatus::Closed).matches(&ticket));
    }
}
