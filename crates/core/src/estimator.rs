//! Pure wait-time estimation.

use crate::model::{WaitEstimate, WaitingTimeInfo};

/// Estimates the wait for `ticket_number` given the clinic's reference data.
///
/// Total over its domain: tickets at or behind the current treatment number
/// yield zero people ahead and a zero-minute estimate.
#[must_use]
pub fn estimate_wait(ticket_number: u32, info: &WaitingTimeInfo) -> WaitEstimate {
    let people_ahead = ticket_number.saturating_sub(info.current_treatment);
    WaitEstimate {
        people_ahead,
        estimated_minutes: f64::from(people_ahead) * info.average_examination_minutes,
        current_treatment: info.current_treatment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(current_treatment: u32, average_examination_minutes: f64) -> WaitingTimeInfo {
        WaitingTimeInfo {
            current_treatment,
            average_examination_minutes,
        }
    }

    #[test]
    fn ticket_behind_current_waits_for_each_person_ahead() {
        let estimate = estimate_wait(12, &info(5, 3.0));
        assert_eq!(estimate.people_ahead, 7);
        assert_eq!(estimate.estimated_minutes, 21.0);
        assert_eq!(estimate.current_treatment, 5);
    }

    #[test]
    fn ticket_already_served_waits_zero() {
        let estimate = estimate_wait(4, &info(9, 3.5));
        assert_eq!(estimate.people_ahead, 0);
        assert_eq!(estimate.estimated_minutes, 0.0);
    }

    #[test]
    fn ticket_equal_to_current_waits_zero() {
        let estimate = estimate_wait(9, &info(9, 3.5));
        assert_eq!(estimate.people_ahead, 0);
        assert_eq!(estimate.estimated_minutes, 0.0);
    }

    #[test]
    fn estimate_is_exact_in_native_precision() {
        let estimate = estimate_wait(10, &info(3, 2.5));
        assert_eq!(estimate.estimated_minutes, 7.0 * 2.5);
    }

    #[test]
    fn fractional_average_carries_through() {
        let estimate = estimate_wait(6, &info(5, 0.5));
        assert_eq!(estimate.people_ahead, 1);
        assert_eq!(estimate.estimated_minutes, 0.5);
    }
}
