use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a [`TicketStore`](super::TicketStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub ticket_id_prefix: String,
    pub comment_id_prefix: String,
    /// Used when a draft arrives without a reporter
    pub default_reporter: String,
}

impl StoreConfig {
    /// Reads a config from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ticket_id_prefix: "ticket-".to_string(),
            comment_id_prefix: "comment-".to_string(),
            default_reporter: "Current User".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.ticket_id_prefix, "ticket-");
        assert_eq!(config.comment_id_prefix, "comment-");
        assert_eq!(config.default_reporter, "Current User");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StoreConfig::from_json(r#"{ "ticketIdPrefix": "MT-" }"#).unwrap();
        assert_eq!(config.ticket_id_prefix, "MT-");
        assert_eq!(config.comment_id_prefix, "comment-");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(StoreConfig::from_json("{ not json").is_err());
    }
}
