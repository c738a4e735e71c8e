//! Trait abstractions for runtime I/O
//!
//! The host transport sits behind [`HostChannel`] so the runtime can be driven
//! by a recording mock in tests.

use crate::host::HostMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Host channel closed")]
    Closed,

    #[error("Failed to encode host message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fire-and-forget outbound channel to the host
#[async_trait]
pub trait HostChannel: Send + Sync {
    /// Deliver `message` to the host.
    ///
    /// # Errors
    ///
    /// Fails when the message cannot be encoded or the host has gone away.
    async fn post(&self, message: HostMessage) -> Result<(), HostError>;
}

#[async_trait]
impl<T: HostChannel + ?Sized> HostChannel for Arc<T> {
    async fn post(&self, message: HostMessage) -> Result<(), HostError> {
        (**self).post(message).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Adapter that encodes host messages as JSON onto an mpsc queue, for hosts
/// that exchange serialized messages with the panel
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: mpsc::Sender<String>,
}

impl ChannelHost {
    #[must_use]
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl HostChannel for ChannelHost {
    async fn post(&self, message: HostMessage) -> Result<(), HostError> {
        let json = serde_json::to_string(&message)?;
        self.tx.send(json).await.map_err(|_| HostError::Closed)
    }
}
