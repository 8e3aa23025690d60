//! Head correction kh for V-notch weirs, Kulin & Compton (1975), Fig. 4-3.
use crate::constants::KH_VNOTCH;

/// kh [ft] for a notch angle in degrees. Defined for any angle, though the
/// fit only covers the plotted 20°–100° range.
#[inline]
pub fn kh_vnotch(angle_vnotch: f64) -> f64 {
    KH_VNOTCH.eval(angle_vnotch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn right_angle_notch() {
        assert_abs_diff_eq!(kh_vnotch(90.0), 0.0028180684653000034, epsilon = 1e-12);
    }

    #[test]
    fn sixty_degree_notch() {
        assert_abs_diff_eq!(kh_vnotch(60.0), 0.0037992949112999955, epsilon = 1e-12);
    }

    #[test]
    fn zero_angle_is_constant_term() {
        assert_eq!(kh_vnotch(0.0), 0.0174729907833);
    }

    #[test]
    fn correction_shrinks_with_wider_notch() {
        assert!(kh_vnotch(20.0) > kh_vnotch(60.0));
        assert!(kh_vnotch(60.0) > kh_vnotch(90.0));
    }
}
