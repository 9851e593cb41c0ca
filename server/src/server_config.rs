use std::default::Default;

/// Contains Config properties which will be used by a server role
#[derive(Clone)]
pub struct ServerConfig {
    /// Number of heartbeat ticks over which every archivable entity is
    /// written to storage exactly once. Zero disables archiving.
    pub archive_period_ticks: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            archive_period_ticks: 100,
        }
    }
}
