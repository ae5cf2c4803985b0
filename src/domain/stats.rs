use crate::domain::ticket::{Ticket, TicketStatus};
use serde::Serialize;

/// Status counts shown above the ticket list.
///
/// Closed tickets count towards `total` but have no tally of their own, so
/// `open + in_progress + resolved` may be less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl TicketStats {
    /// Tickets counted in `total` but in none of the tallies
    pub fn closed(&self) -> usize {
        self.total - self.open - self.in_progress - self.resolved
    }
}

/// Counts tickets by status over whatever set is passed in
pub fn stats<'a, I>(tickets: I) -> TicketStats
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .fold(TicketStats::default(), |mut acc, ticket| {
            acc.total += 1;
            match ticket.status {
                TicketStatus::Open => acc.open += 1,
                TicketStatus::InProgress => acc.in_progress += 1,
                TicketStatus::Resolved => acc.resolved += 1,
                TicketStatus::Closed => {}
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::{TicketDraft, TicketId, TicketUpdate};

    fn ticket_with(status: TicketStatus) -> Ticket {
        let draft = TicketDraft::new("P1", "Title", "Description");
        let mut ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft).unwrap();
        ticket.apply(TicketUpdate::status(status));
        ticket
    }

    #[test]
    fn test_stats_empty() {
        let tickets: Vec<Ticket> = Vec::new();
        assert_eq!(stats(&tickets), TicketStats::default());
    }

    #[test]
    fn test_stats_counts_each_status() {
        let tickets = vec![
            ticket_with(TicketStatus::Open),
            ticket_with(TicketStatus::Open),
            ticket_with(TicketStatus::InProgress),
            ticket_with(TicketStatus::Resolved),
        ];

        let summary = stats(&tickets);

        assert_eq!(
            summary,
            TicketStats {
                total: 4,
                open: 2,
                in_progress: 1,
                resolved: 1,
            }
        );
        assert_eq!(summary.closed(), 0);
    }

    #[test]
    fn test_closed_tickets_are_not_tallied() {
        let tickets = vec![
            ticket_with(TicketStatus::Closed),
            ticket_with(TicketStatus::Closed),
            ticket_with(TicketStatus::Resolved),
        ];

        let summary = stats(&tickets);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.open + summary.in_progress + summary.resolved, 1);
        assert_eq!(summary.closed(), 2);
    }

    #[test]
    fn test_stats_over_borrowed_subset() {
        let tickets = vec![
            ticket_with(TicketStatus::Open),
            ticket_with(TicketStatus::InProgress),
        ];
        let subset: Vec<&Ticket> = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .collect();

        let summary = stats(subset);

        assert_eq!(summary.total, 1);
        assert_eq!(summary.open, 1);
    }
}
