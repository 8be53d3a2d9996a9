//! Device-tilt gate for the AR overlay
//!
//! The AR overlay is shown only while the device is pitched up from flat
//! toward the user's face, driven by the accelerometer's Y axis. With the
//! device held upright, gravity pulls the Y reading toward -1g.

/// Y-axis acceleration magnitude (in g) past which the device counts as
/// tilted up from flat
pub const TILT_THRESHOLD_G: f64 = 0.5;

/// True when the device is pitched up enough to show the AR overlay
pub fn is_tilted_up(y_acceleration_g: f64) -> bool {
    -y_acceleration_g > TILT_THRESHOLD_G
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_device_is_not_tilted_up() {
        assert!(!is_tilted_up(0.0));
        assert!(!is_tilted_up(-0.3));
    }

    #[test]
    fn test_upright_device_is_tilted_up() {
        assert!(is_tilted_up(-0.6));
        assert!(is_tilted_up(-1.0));
    }

    #[test]
    fn test_face_down_device_is_not_tilted_up() {
        assert!(!is_tilted_up(0.8));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_tilted_up(-TILT_THRESHOLD_G));
        assert!(is_tilted_up(-TILT_THRESHOLD_G - 1e-9));
    }
}
