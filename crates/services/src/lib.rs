#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod query;
pub mod session_gate;

pub use api::{ClinicApi, ClinicApiConfig, ClinicBackend};
pub use error::{FetchError, SessionError};
pub use query::{QueryClient, QueryKey, QueryStatus};
pub use session_gate::{SessionGate, SessionState};
