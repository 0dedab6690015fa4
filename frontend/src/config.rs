use log::Level;

/// Timer intervals driving the animated widgets, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTimings {
    pub step_interval_ms: u32,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
    pub blink_ms: u32,
}

impl AnimationTimings {
    pub const DEFAULT: AnimationTimings = AnimationTimings {
        step_interval_ms: 2000,
        type_ms: 50,
        delete_ms: 30,
        pause_ms: 3000,
        blink_ms: 500,
    };
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Tick-level logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let timings = AnimationTimings::default();
        assert_eq!(timings.step_interval_ms, 2000);
        assert_eq!(timings.type_ms, 50);
        assert_eq!(timings.delete_ms, 30);
        assert_eq!(timings.pause_ms, 3000);
        assert_eq!(timings.blink_ms, 500);
    }

    #[test]
    fn test_deleting_is_faster_than_typing() {
        let timings = AnimationTimings::DEFAULT;
        assert!(timings.delete_ms < timings.type_ms);
    }
}
