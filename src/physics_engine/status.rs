//! Operating status classification

use crate::config::defaults::{DEAD_WHP_PSI, EROSION_VELOCITY_FT_S};
use crate::types::{Locale, WellStatus};

/// Classification result with its operator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAssessment {
    pub status: WellStatus,
    pub message: &'static str,
}

/// Map wellhead pressure and tubing velocity to an operating condition.
///
/// Priority order:
/// 1. WHP <= 0 psi → DEAD (even if velocity is also excessive)
/// 2. velocity > 15 ft/s → EROSION
/// 3. otherwise → OPTIMAL
pub fn classify(whp: f64, velocity: f64, locale: Locale) -> StatusAssessment {
    let status = if whp <= DEAD_WHP_PSI {
        WellStatus::Dead
    } else if velocity > EROSION_VELOCITY_FT_S {
        WellStatus::Erosion
    } else {
        WellStatus::Optimal
    };

    StatusAssessment {
        status,
        message: status.message(locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_optimal() {
        let a = classify(250.0, 4.0, Locale::En);
        assert_eq!(a.status, WellStatus::Optimal);
        assert_eq!(a.message, "Operating within design limits");
    }

    #[test]
    fn test_classify_erosion() {
        assert_eq!(classify(250.0, 15.01, Locale::En).status, WellStatus::Erosion);
        // Threshold itself is not erosional
        assert_eq!(classify(250.0, 15.0, Locale::En).status, WellStatus::Optimal);
    }

    #[test]
    fn test_classify_dead_at_zero_whp() {
        assert_eq!(classify(0.0, 1.0, Locale::En).status, WellStatus::Dead);
        assert_eq!(classify(-850.0, 1.0, Locale::En).status, WellStatus::Dead);
    }

    #[test]
    fn test_dead_takes_priority_over_erosion() {
        let a = classify(-10.0, 40.0, Locale::Ar);
        assert_eq!(a.status, WellStatus::Dead);
        assert_eq!(a.message, WellStatus::Dead.message(Locale::Ar));
    }
}
