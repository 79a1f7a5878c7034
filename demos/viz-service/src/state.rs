use crate::config::Config;
use mosaic::Marshaller;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Shares one dispatch cache across every request
    pub marshaller: Marshaller,

    /// Limits concurrent rendering on the blocking pool
    pub render_semaphore: Arc<Semaphore>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let marshaller = Marshaller::new().with_config(config.encoder);
        let render_semaphore = Arc::new(Semaphore::new(config.server.max_concurrent_renders));

        Self {
            marshaller,
            render_semaphore,
            config: Arc::new(config),
        }
    }
}
