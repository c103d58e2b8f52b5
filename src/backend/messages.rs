use crate::flow::FlowSnapshot;
use tokio::sync::oneshot;

/// Commands sent from the presentation layer to the flow
#[derive(Debug)]
pub enum FlowCommand {
    Submit {
        url: String,
    },
    SelectOption(String),
    ConfirmDownload,
    /// Cancel every outstanding submission and download
    CancelPending,
    Snapshot(oneshot::Sender<FlowSnapshot>),
    // System
    Shutdown,
}
