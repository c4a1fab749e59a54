#![forbid(unsafe_code)]

pub mod estimator;
pub mod model;
pub mod validate;

pub use estimator::estimate_wait;
pub use model::{ExaminationInfo, TicketInfo, WaitEstimate, WaitingTimeInfo};
pub use validate::{ValidationError, validate_examination_number, validate_ticket_number};
