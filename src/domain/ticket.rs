use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::HomedeskError;

/// Unique identifier for a maintenance ticket (e.g., ticket-001)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(String);

impl TicketId {
    /// Generates a fresh id with the given prefix
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4().simple()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TicketId {
    type Err = HomedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(HomedeskError::InvalidTicketId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a comment, unique within the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(String);

impl CommentId {
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a ticket.
///
/// Any status may move to any other; closed tickets can be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = HomedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(HomedeskError::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of a ticket, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = HomedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(HomedeskError::InvalidPriority(s.to_string())),
        }
    }
}

/// A note appended to a ticket's discussion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl Comment {
    pub fn new(id: CommentId, author: String, content: String, attachments: Vec<String>) -> Self {
        Self {
            id,
            author,
            content,
            timestamp: Utc::now(),
            attachments,
        }
    }
}

/// Caller-supplied fields for a new ticket.
///
/// There is no status here: new tickets always start Open, with no
/// comments or attachments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketDraft {
    pub property_id: String,
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub assignee: String,
    pub reporter: String,
}

impl TicketDraft {
    pub fn new(
        property_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn reported_by(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = reporter.into();
        self
    }

    /// Rejects drafts missing a title, description or property reference
    pub fn validate(&self) -> Result<(), HomedeskError> {
        if self.title.trim().is_empty() {
            return Err(HomedeskError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(HomedeskError::MissingField("description"));
        }
        if self.property_id.trim().is_empty() {
            return Err(HomedeskError::MissingField("propertyId"));
        }
        Ok(())
    }
}

/// Partial edit of a ticket; only the fields that are `Some` are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketUpdate {
    pub property_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl TicketUpdate {
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A maintenance ticket raised against a listed property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub property_id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub reporter: String,
    #[serde(rename = "createdDate")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedDate")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl Ticket {
    /// Builds an Open ticket from a validated draft
    pub fn from_draft(id: TicketId, draft: TicketDraft) -> Result<Self, HomedeskError> {
        draft.validate()?;

        let now = Utc::now();
        Ok(Self {
            id,
            property_id: draft.property_id,
            title: draft.title,
            description: draft.description,
            status: TicketStatus::Open,
            priority: draft.priority,
            assignee: draft.assignee,
            reporter: draft.reporter,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            attachments: Vec::new(),
        })
    }

    /// Overwrites the fields present in `update` and refreshes `updated_at`
    pub fn apply(&mut self, update: TicketUpdate) {
        if let Some(property_id) = update.property_id {
            self.property_id = property_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(assignee) = update.assignee {
            self.assignee = assignee;
        }
        if let Some(reporter) = update.reporter {
            self.reporter = reporter;
        }
        if let Some(attachments) = update.attachments {
            self.attachments = attachments;
        }
        self.touch();
    }

    /// Appends a comment and refreshes `updated_at`
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.touch();
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    // updated_at must strictly advance on every mutation, even within one clock tick
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TicketDraft {
        TicketDraft::new("P1", "Leaky tap", "Kitchen tap leaking")
            .with_priority(TicketPriority::High)
            .assigned_to("A")
            .reported_by("B")
    }

    #[test]
    fn test_ticket_id_generation() {
        let id = TicketId::generate("ticket-");
        assert!(id.as_str().starts_with("ticket-"));
        assert_eq!(id.as_str().len(), "ticket-".len() + 32);
        assert_ne!(id, TicketId::generate("ticket-"));
    }

    #[test]
    fn test_ticket_id_parsing() {
        let id = TicketId::from_str(" ticket-001 ").unwrap();
        assert_eq!(id.as_str(), "ticket-001");

        assert!(TicketId::from_str("").is_err());
        assert!(TicketId::from_str("   ").is_err());
        assert!(TicketId::from_str("ticket 001").is_err());
    }

    #[test]
    fn test_status_parsing_and_display() {
        for status in TicketStatus::ALL {
            assert_eq!(TicketStatus::from_str(&status.to_string()).unwrap(), status);
        }
        assert_eq!(
            TicketStatus::from_str("in-progress").unwrap(),
            TicketStatus::InProgress
        );
        assert!(TicketStatus::from_str("blocked").is_err());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(TicketPriority::Critical > TicketPriority::High);
        assert!(TicketPriority::Low < TicketPriority::Medium);
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
        assert!(TicketPriority::from_str("urgent").is_err());
    }

    #[test]
    fn test_from_draft_starts_open() {
        let ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft()).unwrap();

        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.priority, TicketPriority::High);
        assert!(ticket.comments.is_empty());
        assert_eq!(ticket.created_at, ticket.updated_at);
    }

    #[test]
    fn test_draft_validation() {
        let missing_title = TicketDraft::new("P1", "  ", "desc");
        assert!(matches!(
            missing_title.validate(),
            Err(HomedeskError::MissingField("title"))
        ));

        let missing_description = TicketDraft::new("P1", "title", "");
        assert!(matches!(
            missing_description.validate(),
            Err(HomedeskError::MissingField("description"))
        ));

        let missing_property = TicketDraft::new("", "title", "desc");
        assert!(matches!(
            missing_property.validate(),
            Err(HomedeskError::MissingField("propertyId"))
        ));
    }

    #[test]
    fn test_draft_ignores_status_on_the_wire() {
        let json = r#"{
            "propertyId": "P1",
            "title": "Broken door",
            "description": "Front door will not latch",
            "priority": "Low",
            "status": "Closed"
        }"#;

        let draft: TicketDraft = serde_json::from_str(json).unwrap();
        let ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft).unwrap();

        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn test_apply_overwrites_only_given_fields() {
        let mut ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft()).unwrap();

        ticket.apply(TicketUpdate {
            assignee: Some("C".to_string()),
            status: Some(TicketStatus::InProgress),
            ..TicketUpdate::default()
        });

        assert_eq!(ticket.assignee, "C");
        assert!(TicketUpdate::default().is_empty());
        assert!(!TicketUpdate::status(TicketStatus::Closed).is_empty());
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.title, "Leaky tap");
        assert_eq!(ticket.reporter, "B");
    }

    #[test]
    fn test_mutations_advance_updated_at() {
        let mut ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft()).unwrap();
        let created = ticket.created_at;

        ticket.apply(TicketUpdate::default());
        let after_apply = ticket.updated_at;
        assert!(after_apply > created);

        ticket.push_comment(Comment::new(
            CommentId::generate("comment-"),
            "Alice".to_string(),
            "On my way".to_string(),
            Vec::new(),
        ));
        assert!(ticket.updated_at > after_apply);
        assert_eq!(ticket.created_at, created);
    }

    #[test]
    fn test_any_status_can_follow_any_other() {
        let mut ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft()).unwrap();

        for from in TicketStatus::ALL {
            for to in TicketStatus::ALL {
                ticket.apply(TicketUpdate::status(from));
                ticket.apply(TicketUpdate::status(to));
                assert_eq!(ticket.status, to);
            }
        }
    }

    #[test]
    fn test_mentions_checks_title_and_description() {
        let ticket = Ticket::from_draft(TicketId::generate("ticket-"), draft()).unwrap();

        assert!(ticket.mentions("leaky"));
        assert!(ticket.mentions("kitchen"));
        assert!(!ticket.mentions("roof"));
    }

    #[test]
    fn test_deserialize_seed_ticket() {
        let json = r#"{
            "id": "ticket-001",
            "propertyId": "prop-001",
            "title": "Aircon not cooling",
            "description": "Master bedroom unit blows warm air",
            "status": "In Progress",
            "priority": "High",
            "assignee": "Tech Team",
            "reporter": "Tenant",
            "createdDate": "2024-01-20T09:00:00Z",
            "updatedDate": "2024-01-21T14:30:00Z",
            "comments": [
                {
                    "id": "comment-001",
                    "author": "Tech Team",
                    "content": "Scheduled a visit",
                    "timestamp": "2024-01-21T14:30:00Z",
                    "attachments": []
                }
            ],
            "attachments": []
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id.as_str(), "ticket-001");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.comments.len(), 1);
        assert!(ticket.updated_at > ticket.created_at);
    }
}
