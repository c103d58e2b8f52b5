use super::FlowEvent;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::warn;

/// Destination for flow events
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: FlowEvent);
}

#[async_trait]
impl EventSink for mpsc::Sender<FlowEvent> {
    async fn emit(&self, event: FlowEvent) {
        if let Err(e) = self.send(event).await {
            warn!("Event receiver dropped, discarding {:?}", e.0);
        }
    }
}

/// Records every event in emission order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<FlowEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<FlowEvent> {
        self.events.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn emit(&self, event: FlowEvent) {
        self.events.lock().await.push(event);
    }
}
