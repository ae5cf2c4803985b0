use crate::{
    domain::{
        property::{validate_catalog, Property},
        ticket::Ticket,
    },
    error::{HomedeskError, Result},
    storage::DataSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Seed data read from a directory of JSON files
pub struct FileSource {
    root_path: PathBuf,
}

impl FileSource {
    const PROPERTIES_FILE: &'static str = "properties.json";
    const TICKETS_FILE: &'static str = "tickets.json";

    /// Creates a source reading from the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().to_path_buf(),
        }
    }

    fn properties_file(&self) -> PathBuf {
        self.root_path.join(Self::PROPERTIES_FILE)
    }

    fn tickets_file(&self) -> PathBuf {
        self.root_path.join(Self::TICKETS_FILE)
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn load_properties(&self) -> Result<Vec<Property>> {
        let file_path = self.properties_file();

        if !file_path.exists() {
            return Err(HomedeskError::DataSourceNotFound(
                file_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&file_path).await?;
        let properties: Vec<Property> = serde_json::from_str(&contents)?;
        validate_catalog(&properties)?;

        debug!(count = properties.len(), path = %file_path.display(), "loaded properties");
        Ok(properties)
    }

    /// A missing tickets file means the session starts with no tickets
    async fn load_tickets(&self) -> Result<Vec<Ticket>> {
        let file_path = self.tickets_file();

        if !file_path.exists() {
            debug!(path = %file_path.display(), "no tickets file, starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&file_path).await?;
        let tickets: Vec<Ticket> = serde_json::from_str(&contents)?;

        debug!(count = tickets.len(), path = %file_path.display(), "loaded tickets");
        Ok(tickets)
    }
}
