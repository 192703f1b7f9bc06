//! Optional progress reporting for an export run

use tokio::sync::mpsc::UnboundedSender;

/// Milestones of one export, in the order they occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    Crawling { path: String },
    Flattened { total: usize },
    Downloading { index: usize, total: usize, name: String },
    Failed { name: String, reason: String },
    Packaging,
    Finished { assets: usize, failed: usize },
}

#[derive(Clone, Default)]
pub(crate) struct Progress {
    sender: Option<UnboundedSender<ExportEvent>>,
}

impl Progress {
    pub(crate) fn new(sender: Option<UnboundedSender<ExportEvent>>) -> Self {
        Self { sender }
    }

    pub(crate) fn emit(&self, event: ExportEvent) {
        if let Some(sender) = &self.sender {
            // A dropped receiver only means nobody is watching
            let _ = sender.send(event);
        }
    }
}
