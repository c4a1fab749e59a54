use std::sync::Arc;

use platform::HostPlatform;
use services::ClinicBackend;

pub trait UiApp: Send + Sync {
    fn app_id(&self) -> String;

    fn platform(&self) -> Arc<dyn HostPlatform>;
    fn backend(&self) -> Arc<dyn ClinicBackend>;
}

#[derive(Clone)]
pub struct AppContext {
    app_id: String,
    platform: Arc<dyn HostPlatform>,
    backend: Arc<dyn ClinicBackend>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_id: app.app_id(),
            platform: app.platform(),
            backend: app.backend(),
        }
    }

    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[must_use]
    pub fn platform(&self) -> Arc<dyn HostPlatform> {
        Arc::clone(&self.platform)
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn ClinicBackend> {
        Arc::clone(&self.backend)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
