mod gate;
mod numbers;
mod register;
mod state;
mod waiting;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use gate::GatePanel;
pub use numbers::NumbersView;
pub use register::RegisterView;
pub use state::{
    FETCH_FAILED_MESSAGE, RELOGIN_MESSAGE, ViewError, ViewState, view_state_from_resource,
};
pub use waiting::WaitingView;
