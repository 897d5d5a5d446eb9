use std::{io::ErrorKind, marker::PhantomData, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::entities::TaskList;

/// A value that can live in a single text file.
pub trait SlotValue: Sized + Default {
    /// Parses trimmed file content. `None` means the content is unusable.
    fn decode(content: &str) -> Option<Self>;

    fn encode(&self) -> String;
}

impl SlotValue for TaskList {
    fn decode(content: &str) -> Option<Self> {
        Some(TaskList::from_lines(content))
    }

    fn encode(&self) -> String {
        self.to_lines()
    }
}

impl SlotValue for u32 {
    fn decode(content: &str) -> Option<Self> {
        content.parse().ok()
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

impl SlotValue for i64 {
    fn decode(content: &str) -> Option<Self> {
        content.parse().ok()
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

/// One scalar stored as one file. A missing or empty file reads as the default value.
#[derive(Debug)]
pub struct Slot<V> {
    path: PathBuf,
    _value: PhantomData<V>,
}

impl<V: SlotValue> Slot<V> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _value: PhantomData,
        }
    }

    pub async fn read(&self) -> Result<V> {
        debug!("Reading {:?}", self.path);
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(V::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {:?}", self.path));
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return Ok(V::default());
        }
        match V::decode(content) {
            Some(v) => Ok(v),
            None => {
                // Same as a missing file.
                warn!(
                    "Ignoring unreadable content {content:?} in {:?}, using default",
                    self.path
                );
                Ok(V::default())
            }
        }
    }

    pub async fn write(&self, value: &V) -> Result<()> {
        let content = value.encode();
        tokio::fs::write(&self.path, &content)
            .await
            .with_context(|| format!("Failed to write {:?}", self.path))?;
        info!("Wrote {content:?} to {:?}", self.path);
        Ok(())
    }
}
