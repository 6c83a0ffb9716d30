// Pointer throttling and scroll debouncing, driven with synthetic timestamps.

mod support;

use glam::Vec2;
use instant::Instant;
use netfield_core::*;
use support::ms;

#[test]
fn first_pointer_move_is_always_accepted() {
    let mut tracker = PointerTracker::new(ms(16));
    assert_eq!(tracker.position(), None);
    assert!(tracker.moved(Vec2::new(3.0, 4.0), Instant::now()));
    assert_eq!(tracker.position(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn pointer_moves_every_millisecond_are_throttled_to_sixty_hertz() {
    let mut tracker = PointerTracker::new(ms(16));
    let t0 = Instant::now();
    let accepted = (0..100u64)
        .filter(|&i| tracker.moved(Vec2::new(i as f32, 0.0), t0 + ms(i)))
        .count();
    assert!(accepted <= 7, "accepted {accepted} updates");
    assert!(accepted >= 6, "accepted only {accepted} updates");
    // the last accepted move was at t = 96ms
    assert_eq!(tracker.position(), Some(Vec2::new(96.0, 0.0)));
}

#[test]
fn rejected_moves_keep_previous_position() {
    let mut tracker = PointerTracker::new(ms(16));
    let t0 = Instant::now();
    assert!(tracker.moved(Vec2::new(1.0, 1.0), t0));
    assert!(!tracker.moved(Vec2::new(2.0, 2.0), t0 + ms(15)));
    assert_eq!(tracker.position(), Some(Vec2::new(1.0, 1.0)));
    assert!(tracker.moved(Vec2::new(3.0, 3.0), t0 + ms(16)));
    assert_eq!(tracker.position(), Some(Vec2::new(3.0, 3.0)));
}

#[test]
fn pointer_leave_clears_immediately() {
    let mut tracker = PointerTracker::new(ms(16));
    let t0 = Instant::now();
    tracker.moved(Vec2::new(10.0, 10.0), t0);
    tracker.left();
    assert_eq!(tracker.position(), None);
}

#[test]
fn scroll_flag_is_raised_immediately() {
    let mut scroll = ScrollActivity::new(ms(150));
    let t0 = Instant::now();
    assert!(!scroll.is_active(t0));
    scroll.scrolled(t0);
    assert!(scroll.is_active(t0));
}

#[test]
fn scroll_flag_stays_set_while_events_keep_coming() {
    let mut scroll = ScrollActivity::new(ms(150));
    let t0 = Instant::now();
    // events every 100ms for one second, checked every 10ms
    for step in 0..=100u64 {
        let now = t0 + ms(step * 10);
        if step % 10 == 0 {
            scroll.scrolled(now);
        }
        assert!(scroll.settle(now), "flag dropped at {}ms", step * 10);
    }
}

#[test]
fn scroll_flag_clears_after_quiet_period() {
    let mut scroll = ScrollActivity::new(ms(150));
    let t0 = Instant::now();
    scroll.scrolled(t0);
    scroll.scrolled(t0 + ms(100));
    assert!(scroll.settle(t0 + ms(249)));
    assert!(!scroll.settle(t0 + ms(250)));
    assert!(!scroll.is_armed());
}

#[test]
fn cancelled_scroll_is_inactive() {
    let mut scroll = ScrollActivity::new(ms(150));
    let t0 = Instant::now();
    scroll.scrolled(t0);
    scroll.cancel();
    assert!(!scroll.is_active(t0));
    assert!(!scroll.is_armed());
}
