use thiserror::Error;

pub type Result<T> = std::result::Result<T, HomedeskError>;

#[derive(Debug, Error)]
pub enum HomedeskError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Invalid ticket ID: {0:?}")]
    InvalidTicketId(String),

    #[error("Invalid property {id}: {reason}")]
    InvalidProperty { id: String, reason: String },

    #[error("Invalid ticket status '{0}'. Valid statuses: Open, In Progress, Resolved, Closed")]
    InvalidStatus(String),

    #[error("Invalid ticket priority '{0}'. Valid priorities: Low, Medium, High, Critical")]
    InvalidPriority(String),

    #[error(
        "Invalid property category '{0}'. Valid categories: Condominium, HDB, Landed, Shophouse, Commercial"
    )]
    InvalidCategory(String),

    #[error("Invalid listing status '{0}'. Valid statuses: Available, Under Offer, Sold")]
    InvalidListingStatus(String),

    #[error("Invalid sort key '{0}'. Valid keys: featured, price-low, price-high, newest")]
    InvalidSortKey(String),

    #[error("Data source not found: {0}")]
    DataSourceNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
