use log::Level;

/// How long the loading screen stays up before the page is shown.
pub const LOADING_DELAY_MS: u32 = 2500;

pub const ELLIPSIS_TICK_MS: u32 = 300;
pub const ELLIPSIS_MAX_DOTS: usize = 6;

/// Vertical offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const CROSSFADE_MS: u32 = 500;
pub const STAGGER_STEP_MS: u32 = 100;

// Passed straight to IntersectionObserverInit.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_outlasts_the_crossfade() {
        assert!(LOADING_DELAY_MS > CROSSFADE_MS);
    }

    #[test]
    fn ellipsis_completes_at_least_one_cycle_while_loading() {
        let cycle = ELLIPSIS_TICK_MS * (ELLIPSIS_MAX_DOTS as u32 + 1);
        assert!(cycle <= LOADING_DELAY_MS);
    }

    #[test]
    fn log_level_follows_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
