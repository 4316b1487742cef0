//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    LoadRecords,
    FetchAvatar,
    /// Cancels in-flight work and stops the worker.
    Shutdown,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            BackendCommand::LoadRecords => "load_records",
            BackendCommand::FetchAvatar => "fetch_avatar",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
