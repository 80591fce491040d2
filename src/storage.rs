// File-backed configuration store
// One flat JSON document, rewritten wholesale after every mutation.
// Writes are infrequent admin actions, last-writer-wins is fine.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::models::guild::{ConfigDocument, GlobalSettings};

/// Outcome of adding a channel to a guild's allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    Added { persisted: bool },
    AlreadyListed,
}

/// Outcome of removing a channel from a guild's allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveResult {
    Removed { persisted: bool },
    NotListed,
    NoServerEntry,
}

pub struct ConfigStore {
    path: PathBuf,
    doc: RwLock<ConfigDocument>,
}

impl ConfigStore {
    /// Load the document from disk. A missing file starts from defaults;
    /// an unreadable or unparseable file is logged and also starts from
    /// defaults, so a broken config never takes the bot down.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<ConfigDocument>(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    error!("Error loading config {}: {}", path.display(), e);
                    ConfigDocument::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config file at {}, starting fresh", path.display());
                ConfigDocument::default()
            }
            Err(e) => {
                error!("Error reading config {}: {}", path.display(), e);
                ConfigDocument::default()
            }
        };
        Self {
            path,
            doc: RwLock::new(doc),
        }
    }

    fn persist(&self, doc: &ConfigDocument) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Write the document out, reporting failure to the caller so it can
    /// warn the admin. The in-memory mutation stays applied either way and
    /// the command path never crashes.
    fn persist_logged(&self, doc: &ConfigDocument) -> bool {
        match self.persist(doc) {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving config {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Add a channel to a guild's allow-list (idempotent).
    pub async fn add_channel(&self, guild_id: u64, channel_id: u64) -> AddResult {
        let mut doc = self.doc.write().await;
        let entry = doc.servers.entry(guild_id.to_string()).or_default();
        let id = channel_id.to_string();
        if entry.info_channels.contains(&id) {
            return AddResult::AlreadyListed;
        }
        entry.info_channels.push(id);
        let persisted = self.persist_logged(&doc);
        AddResult::Added { persisted }
    }

    pub async fn remove_channel(&self, guild_id: u64, channel_id: u64) -> RemoveResult {
        let mut doc = self.doc.write().await;
        let Some(entry) = doc.servers.get_mut(&guild_id.to_string()) else {
            return RemoveResult::NoServerEntry;
        };
        let id = channel_id.to_string();
        let Some(pos) = entry.info_channels.iter().position(|c| *c == id) else {
            return RemoveResult::NotListed;
        };
        entry.info_channels.remove(pos);
        let persisted = self.persist_logged(&doc);
        RemoveResult::Removed { persisted }
    }

    pub async fn list_channels(&self, guild_id: u64) -> Vec<String> {
        let doc = self.doc.read().await;
        doc.servers
            .get(&guild_id.to_string())
            .map(|entry| entry.info_channels.clone())
            .unwrap_or_default()
    }

    /// Authorization check for the info command. A guild with no entry (or
    /// an empty list) has no restriction; the global override opens every
    /// channel regardless of per-guild lists.
    pub async fn is_allowed(&self, guild_id: u64, channel_id: u64) -> bool {
        let doc = self.doc.read().await;
        if doc.global_settings.default_all_channels {
            return true;
        }
        let id = channel_id.to_string();
        match doc.servers.get(&guild_id.to_string()) {
            Some(entry) if !entry.info_channels.is_empty() => entry.info_channels.contains(&id),
            _ => true,
        }
    }

    /// Strict membership test, used by the message guard. Unlike
    /// `is_allowed` this is closed by default: only explicitly configured
    /// channels are housekept.
    pub async fn is_listed(&self, guild_id: u64, channel_id: u64) -> bool {
        let doc = self.doc.read().await;
        doc.servers
            .get(&guild_id.to_string())
            .map(|entry| entry.info_channels.contains(&channel_id.to_string()))
            .unwrap_or(false)
    }

    pub async fn global_settings(&self) -> GlobalSettings {
        self.doc.read().await.global_settings
    }
}
