//! Tests for motion controller math and state defaults.

#[cfg(test)]
mod tests {
    use super::super::controller::follow_destination;
    use crate::components::MotionState;
    use bevy::prelude::*;

    #[test]
    fn test_destination_backs_off_along_target_axis() {
        // Цель (10,0,0), агент (0,0,0), отступ 5 → (5,0,0)
        let destination =
            follow_destination(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 5.0);
        assert_eq!(destination, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_destination_diagonal() {
        let target = Vec3::new(3.0, 0.0, 4.0); // длина 5
        let destination = follow_destination(target, Vec3::ZERO, 5.0);
        assert!(destination.length() < 1e-5, "отступ 5 по лучу длиной 5 → origin");
    }

    #[test]
    fn test_coincident_positions_yield_target_itself() {
        // Направление не определено → сама цель, без NaN
        let target = Vec3::new(2.0, 1.0, -3.0);
        let destination = follow_destination(target, target, 5.0);
        assert_eq!(destination, target);
        assert!(destination.is_finite());
    }

    #[test]
    fn test_zero_offset_goes_straight_to_target() {
        let target = Vec3::new(7.0, 0.0, 2.0);
        let destination = follow_destination(target, Vec3::ZERO, 0.0);
        assert_eq!(destination, target);
    }

    #[test]
    fn test_motion_state_default_is_stopped() {
        assert_eq!(MotionState::default(), MotionState::Stopped);
    }
}
