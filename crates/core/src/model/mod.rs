mod examination;
mod ticket;
mod waiting;

pub use examination::ExaminationInfo;
pub use ticket::TicketInfo;
pub use waiting::{WaitEstimate, WaitingTimeInfo};
