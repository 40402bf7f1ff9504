/// All messages (events) that can flow through the application event loop.
///
/// Sources:
/// - Refresh timer        → `Tick`
/// - Refresh button       → `RefreshRequested`
/// - Config watcher task  → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Periodic refresh timer fired.
    Tick,
    /// User clicked the Refresh button.
    RefreshRequested,
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,
}
