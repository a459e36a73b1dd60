//! Navigation drawer state and slide animation

use std::time::{Duration, Instant};

/// Full-screen navigation panel that slides in from the right
#[derive(Debug, Default)]
pub struct NavDrawer {
    open: bool,
    /// When the last open/close transition started
    transition_start: Option<Instant>,
    /// Highlighted entry
    pub selected: usize,
}

impl NavDrawer {
    /// Duration of the slide animation
    const SLIDE_DURATION: Duration = Duration::from_millis(500);

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open_at(Instant::now());
    }

    pub fn close(&mut self) {
        self.close_at(Instant::now());
    }

    fn open_at(&mut self, now: Instant) {
        if !self.open {
            self.open = true;
            self.selected = 0;
            self.transition_start = Some(now);
        }
    }

    fn close_at(&mut self, now: Instant) {
        if self.open {
            self.open = false;
            self.transition_start = Some(now);
        }
    }

    pub fn select_next(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.selected = (self.selected + 1) % entry_count;
        }
    }

    pub fn select_prev(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.selected = if self.selected == 0 {
                entry_count - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Whether the slide animation is still running
    pub fn is_animating(&self) -> bool {
        self.transition_start
            .is_some_and(|start| start.elapsed() < Self::SLIDE_DURATION)
    }

    /// How much of the screen the drawer covers, from 0.0 (hidden) to 1.0
    pub fn coverage(&self) -> f32 {
        self.coverage_at(Instant::now())
    }

    fn coverage_at(&self, now: Instant) -> f32 {
        let progress = match self.transition_start {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        };
        let eased = simple_easing::cubic_out(progress);
        if self.open {
            eased
        } else {
            1.0 - eased
        }
    }

    /// Whether anything of the drawer is on screen
    pub fn is_visible(&self) -> bool {
        self.open || self.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed_and_hidden() {
        let drawer = NavDrawer::default();
        assert!(!drawer.is_open());
        assert!(!drawer.is_visible());
        assert_eq!(drawer.coverage(), 0.0);
    }

    #[test]
    fn test_open_slides_in() {
        let mut drawer = NavDrawer::default();
        let start = Instant::now();
        drawer.open_at(start);

        assert_eq!(drawer.coverage_at(start), 0.0);
        let halfway = drawer.coverage_at(start + Duration::from_millis(250));
        assert!(halfway > 0.5 && halfway < 1.0, "ease-out front-loads motion");
        assert_eq!(drawer.coverage_at(start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn test_close_slides_out() {
        let mut drawer = NavDrawer::default();
        let start = Instant::now();
        drawer.open_at(start);
        drawer.close_at(start + Duration::from_secs(1));

        assert!(!drawer.is_open());
        assert_eq!(drawer.coverage_at(start + Duration::from_secs(1)), 1.0);
        assert_eq!(drawer.coverage_at(start + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn test_reopen_resets_selection() {
        let mut drawer = NavDrawer::default();
        drawer.open();
        drawer.select_next(3);
        drawer.close();
        drawer.open();
        assert_eq!(drawer.selected, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut drawer = NavDrawer::default();
        drawer.select_prev(3);
        assert_eq!(drawer.selected, 2);
        drawer.select_next(3);
        assert_eq!(drawer.selected, 0);
        drawer.select_next(0);
        assert_eq!(drawer.selected, 0);
    }
}
