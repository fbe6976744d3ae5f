//! Infinite-scroll sentinel
//!
//! A thin marker sits at the very end of the background stack. Each time
//! it scrolls into view the image feed asks for another batch. This is the
//! same contract as a browser intersection observer: one notification per
//! hidden -> visible transition, nothing while detached.
//!
//! The background does not scroll on its own; it follows the launch list
//! proportionally, so its position is derived with
//! [`ViewportMetrics::follower`].

/// Scroll position of the page, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Distance scrolled from the top
    pub offset_y: f32,
    /// Height of the visible area
    pub viewport_height: f32,
    /// Height of the whole scrollable content
    pub content_height: f32,
}

impl ViewportMetrics {
    /// Is any part of the last `sentinel_height` pixels on screen?
    pub fn shows_tail(&self, sentinel_height: f32) -> bool {
        let visible_bottom = self.offset_y + self.viewport_height;
        let sentinel_top = self.content_height - sentinel_height;
        visible_bottom >= sentinel_top
    }

    /// Position of a second scrollable that follows a leader proportionally.
    ///
    /// `relative_y` is the leader's scroll fraction (0 = top, 1 = bottom).
    /// The follower shares the leader's viewport height and has its own
    /// `content_height`.
    pub fn follower(relative_y: f32, viewport_height: f32, content_height: f32) -> Self {
        let relative_y = if relative_y.is_finite() {
            relative_y.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scrollable_range = (content_height - viewport_height).max(0.0);

        Self {
            offset_y: relative_y * scrollable_range,
            viewport_height,
            content_height,
        }
    }
}

/// Watches the scroll viewport for the sentinel entering view
#[derive(Debug, Clone)]
pub struct ScrollSentinel {
    sentinel_height: f32,
    attached: bool,
    /// Was the sentinel on screen at the last observation?
    visible: bool,
}

impl ScrollSentinel {
    pub fn new(sentinel_height: f32) -> Self {
        Self {
            sentinel_height,
            attached: false,
            visible: false,
        }
    }

    /// Start delivering notifications
    pub fn attach(&mut self) {
        self.attached = true;
        self.visible = false;
    }

    /// Stop delivering notifications; later observations are ignored
    pub fn detach(&mut self) {
        self.attached = false;
        self.visible = false;
    }

    /// Feed a new scroll position in.
    ///
    /// Returns true when the sentinel just became visible.
    pub fn observe(&mut self, metrics: ViewportMetrics) -> bool {
        if !self.attached {
            return false;
        }

        let now_visible = metrics.shows_tail(self.sentinel_height);
        let entered = now_visible && !self.visible;
        self.visible = now_visible;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset_y: f32, content_height: f32) -> ViewportMetrics {
        ViewportMetrics {
            offset_y,
            viewport_height: 800.0,
            content_height,
        }
    }

    #[test]
    fn test_fires_once_per_entry() {
        let mut sentinel = ScrollSentinel::new(1.0);
        sentinel.attach();

        assert!(!sentinel.observe(at(0.0, 4500.0)));
        assert!(!sentinel.observe(at(3000.0, 4500.0)));
        assert!(sentinel.observe(at(3700.0, 4500.0)));
        // Still visible: no repeat
        assert!(!sentinel.observe(at(3699.5, 4500.0)));
    }

    #[test]
    fn test_fires_again_after_content_grows_and_reaches_end() {
        let mut sentinel = ScrollSentinel::new(1.0);
        sentinel.attach();

        assert!(sentinel.observe(at(3700.0, 4500.0)));
        // Next batch appended: sentinel pushed out of view
        assert!(!sentinel.observe(at(3700.0, 9000.0)));
        assert!(sentinel.observe(at(8200.0, 9000.0)));
    }

    #[test]
    fn test_no_notifications_while_detached() {
        let mut sentinel = ScrollSentinel::new(1.0);
        assert!(!sentinel.observe(at(3700.0, 4500.0)));

        sentinel.attach();
        sentinel.detach();
        assert!(!sentinel.observe(at(0.0, 4500.0)));
        assert!(!sentinel.observe(at(3700.0, 4500.0)));
    }

    #[test]
    fn test_follower_projection() {
        let bottom = ViewportMetrics::follower(1.0, 800.0, 4501.0);
        assert_eq!(bottom.offset_y, 3701.0);
        assert!(bottom.shows_tail(1.0));

        let middle = ViewportMetrics::follower(0.5, 800.0, 4501.0);
        assert!(!middle.shows_tail(1.0));

        let fits = ViewportMetrics::follower(0.3, 800.0, 300.0);
        assert_eq!(fits.offset_y, 0.0);

        let nan = ViewportMetrics::follower(f32::NAN, 800.0, 4501.0);
        assert_eq!(nan.offset_y, 0.0);
    }

    #[test]
    fn test_short_content_shows_tail() {
        assert!(at(0.0, 300.0).shows_tail(1.0));
        assert!(!at(0.0, 4500.0).shows_tail(1.0));
    }
}
