mod register_vm;
mod wait_vm;

pub use register_vm::{RegisterOutcome, submit_examination_number};
pub use wait_vm::WaitEstimateVm;
