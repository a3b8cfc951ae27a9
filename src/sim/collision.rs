//! Axis-aligned wall reflection

/// Which wall, if any, turned a velocity component around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    None,
    /// Left or top wall
    Low,
    /// Right or bottom wall
    High,
}

impl Reflection {
    pub fn hit(self) -> bool {
        self != Reflection::None
    }
}

/// Reflect one velocity component against the walls of one axis
///
/// `pos` is the center before this tick's move. The component flips sign when
/// the center has reached or passed a wall while still heading into it, so a
/// ball sitting exactly on the wall and moving away is left alone.
/// `max` is the far wall position (`extent - radius`).
pub fn reflect_axis(pos: f32, vel: &mut f32, radius: f32, max: f32) -> Reflection {
    if pos <= radius && *vel < 0.0 {
        *vel = -*vel;
        Reflection::Low
    } else if pos >= max && *vel > 0.0 {
        *vel = -*vel;
        Reflection::High
    } else {
        Reflection::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_at_low_wall() {
        let mut vel = -1.0;
        assert_eq!(reflect_axis(20.0, &mut vel, 20.0, 80.0), Reflection::Low);
        assert_eq!(vel, 1.0);
    }

    #[test]
    fn test_reflect_past_high_wall() {
        let mut vel = 1.0;
        assert_eq!(reflect_axis(81.0, &mut vel, 20.0, 80.0), Reflection::High);
        assert_eq!(vel, -1.0);
    }

    #[test]
    fn test_no_reflect_when_leaving_wall() {
        // Starting position: on the wall, moving inward
        let mut vel = 1.0;
        assert_eq!(reflect_axis(20.0, &mut vel, 20.0, 80.0), Reflection::None);
        assert_eq!(vel, 1.0);

        let mut vel = -1.0;
        assert_eq!(reflect_axis(80.0, &mut vel, 20.0, 80.0), Reflection::None);
        assert_eq!(vel, -1.0);
    }

    #[test]
    fn test_no_reflect_in_open_space() {
        let mut vel = 3.0;
        assert!(!reflect_axis(50.0, &mut vel, 20.0, 80.0).hit());
        assert_eq!(vel, 3.0);
    }
}
