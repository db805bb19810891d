use constants::camera::{EDGE_PAN_MARGIN, EDGE_PAN_SPEED};

/// Yaw change for a normalized cursor X in `[0, 1]`.
///
/// Left margin `[0, margin)` turns left (positive yaw), right margin
/// `(1 - margin, 1]` turns right, anything else (including the exact
/// boundaries and positions outside the window) leaves yaw alone.
pub fn edge_pan_yaw_delta(normalized_x: f32) -> f32 {
    if (0.0..EDGE_PAN_MARGIN).contains(&normalized_x) {
        EDGE_PAN_SPEED
    } else if normalized_x > 1.0 - EDGE_PAN_MARGIN && normalized_x <= 1.0 {
        -EDGE_PAN_SPEED
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_margin_increases_yaw() {
        for x in [0.0, 0.01, 0.049] {
            assert_eq!(edge_pan_yaw_delta(x), EDGE_PAN_SPEED, "x = {x}");
        }
    }

    #[test]
    fn right_margin_decreases_yaw() {
        for x in [0.951, 0.99, 1.0] {
            assert_eq!(edge_pan_yaw_delta(x), -EDGE_PAN_SPEED, "x = {x}");
        }
    }

    #[test]
    fn centre_and_boundaries_leave_yaw_unchanged() {
        for x in [0.05, 0.2, 0.5, 0.8, 0.95] {
            assert_eq!(edge_pan_yaw_delta(x), 0.0, "x = {x}");
        }
    }

    #[test]
    fn positions_outside_the_window_are_ignored() {
        assert_eq!(edge_pan_yaw_delta(-0.01), 0.0);
        assert_eq!(edge_pan_yaw_delta(1.01), 0.0);
    }
}
