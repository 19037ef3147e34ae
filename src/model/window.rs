//! Query time window with a remembered shift direction.
//!
//! All instants are local wall-clock times, matching what `journalctl
//! --since/--until` and `sadf -s/-e` expect on the command line.

use chrono::{Duration, NaiveDateTime};

/// Width of a freshly created window, in minutes.
pub const NOMINAL_SPAN_MINUTES: i64 = 10;

/// Returns the nominal window span.
pub fn nominal_span() -> Duration {
    Duration::minutes(NOMINAL_SPAN_MINUTES)
}

/// Direction of the last user-directed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftDirection {
    Forward,
    #[default]
    Backward,
}

impl ShiftDirection {
    /// Returns the short label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftDirection::Forward => "fwd",
            ShiftDirection::Backward => "back",
        }
    }
}

/// Half-open time range `[start, end)` with `start < end`.
///
/// `end` may be pulled back to "now", so the span can be shorter than
/// [`nominal_span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    direction: ShiftDirection,
}

impl TimeWindow {
    /// Creates a nominal window beginning at `start`, clamped to `now`.
    pub fn starting_at(start: NaiveDateTime, now: NaiveDateTime) -> Self {
        let mut window = Self {
            start,
            end: start + nominal_span(),
            direction: ShiftDirection::default(),
        };
        window.clamp_to_now(now);
        window
    }

    /// Creates a window from explicit bounds. Returns `None` unless `start < end`.
    pub fn from_bounds(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start < end).then_some(Self {
            start,
            end,
            direction: ShiftDirection::default(),
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn direction(&self) -> ShiftDirection {
        self.direction
    }

    /// Length of the window.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Moves both bounds by `delta`, remembering the direction of the move.
    ///
    /// Forward moves never push `end` past `now`: the delta is reduced to the
    /// remaining room. When `start` is already at or past `now` a forward
    /// move is refused and `false` is returned with the window untouched.
    /// A zero delta leaves the direction unchanged.
    pub fn shift(&mut self, delta: Duration, now: NaiveDateTime) -> bool {
        let zero = Duration::zero();
        if delta > zero {
            self.direction = ShiftDirection::Forward;
            if self.start >= now {
                return false;
            }
            self.clamp_to_now(now);
            let room = (now - self.end).max(zero);
            self.translate(delta.min(room));
        } else if delta < zero {
            self.direction = ShiftDirection::Backward;
            self.translate(delta);
        }
        true
    }

    /// Pulls the window back so that `start < end <= now`.
    ///
    /// Idempotent: a second call with the same `now` changes nothing.
    pub fn clamp_to_now(&mut self, now: NaiveDateTime) {
        if self.end > now {
            self.end = now;
        }
        if self.start >= self.end {
            self.start = self.end - nominal_span();
        } else if self.start > now {
            self.start = now - nominal_span();
        }
    }

    /// Replaces the window with a nominal span beginning at `start`, clamped
    /// to `now`. The remembered direction is kept.
    pub fn move_to(&mut self, start: NaiveDateTime, now: NaiveDateTime) {
        self.start = start;
        self.end = start + nominal_span();
        self.clamp_to_now(now);
    }

    /// Moves one nominal span into the past, then clamps.
    pub fn retreat(&mut self, now: NaiveDateTime) {
        self.translate(-nominal_span());
        self.clamp_to_now(now);
    }

    /// Moves one nominal span into the future, then clamps.
    pub fn advance(&mut self, now: NaiveDateTime) {
        self.translate(nominal_span());
        self.clamp_to_now(now);
    }

    /// Moves one nominal span in the remembered direction.
    pub fn step(&mut self, now: NaiveDateTime) {
        match self.direction {
            ShiftDirection::Forward => self.advance(now),
            ShiftDirection::Backward => self.retreat(now),
        }
    }

    fn translate(&mut self, delta: Duration) {
        self.start += delta;
        self.end += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_starting_at_clamps_end_to_now() {
        let w = TimeWindow::starting_at(at(12, 0), at(12, 4));
        assert_eq!(w.start(), at(12, 0));
        assert_eq!(w.end(), at(12, 4));
        assert_eq!(w.span(), Duration::minutes(4));
    }

    #[test]
    fn test_forward_shift_clamps_to_remaining_room() {
        let mut w = TimeWindow::starting_at(at(11, 40), at(12, 0));
        assert!(w.shift(Duration::minutes(15), at(12, 0)));
        assert_eq!(w.end(), at(12, 0));
        assert_eq!(w.start(), at(11, 50));
        assert_eq!(w.direction(), ShiftDirection::Forward);
    }

    #[test]
    fn test_forward_shift_never_passes_now() {
        let now = at(12, 0);
        for start_minute in 0..60 {
            for delta in 1..45 {
                let mut w = TimeWindow::starting_at(at(11, start_minute), now);
                w.shift(Duration::minutes(delta), now);
                assert!(w.end() <= now, "start 11:{start_minute} delta {delta}");
                assert!(w.start() < w.end());
            }
        }
    }

    #[test]
    fn test_forward_shift_with_unclamped_end_stays_before_now() {
        let mut w = TimeWindow::from_bounds(at(11, 55), at(12, 5)).unwrap();
        assert!(w.shift(Duration::minutes(10), at(12, 0)));
        assert!(w.end() <= at(12, 0));
    }

    #[test]
    fn test_forward_shift_refused_when_start_reached_now() {
        let mut w = TimeWindow::from_bounds(at(12, 0), at(12, 10)).unwrap();
        let before = w;
        assert!(!w.shift(Duration::minutes(10), at(12, 0)));
        assert_eq!(w.start(), before.start());
        assert_eq!(w.end(), before.end());
        assert_eq!(w.direction(), ShiftDirection::Forward);
    }

    #[test]
    fn test_backward_shift_is_unclamped() {
        let mut w = TimeWindow::starting_at(at(11, 0), at(12, 0));
        w.shift(Duration::minutes(10), at(12, 0));
        assert!(w.shift(Duration::minutes(-30), at(12, 0)));
        assert_eq!(w.start(), at(10, 40));
        assert_eq!(w.end(), at(10, 50));
        assert_eq!(w.direction(), ShiftDirection::Backward);
    }

    #[test]
    fn test_zero_shift_keeps_direction() {
        let mut w = TimeWindow::starting_at(at(11, 0), at(12, 0));
        w.shift(Duration::minutes(5), at(12, 0));
        assert!(w.shift(Duration::zero(), at(12, 0)));
        assert_eq!(w.direction(), ShiftDirection::Forward);
        assert_eq!(w.start(), at(11, 5));
    }

    #[test]
    fn test_clamp_restores_invariant_when_window_in_future() {
        let mut w = TimeWindow::from_bounds(at(13, 0), at(13, 10)).unwrap();
        w.clamp_to_now(at(12, 0));
        assert_eq!(w.end(), at(12, 0));
        assert_eq!(w.start(), at(11, 50));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let now = at(12, 0);
        let cases = [
            (at(13, 0), at(13, 10)),
            (at(11, 55), at(12, 5)),
            (at(11, 0), at(11, 10)),
            (at(12, 0), at(12, 10)),
        ];
        for (start, end) in cases {
            let mut once = TimeWindow::from_bounds(start, end).unwrap();
            once.clamp_to_now(now);
            let mut twice = once;
            twice.clamp_to_now(now);
            assert_eq!(once, twice);
            assert!(once.start() < once.end());
            assert!(once.end() <= now);
        }
    }

    #[test]
    fn test_retreat_and_advance_move_nominal_span() {
        let now = at(12, 0);
        let mut w = TimeWindow::starting_at(at(11, 0), now);
        w.retreat(now);
        assert_eq!(w.start(), at(10, 50));
        w.advance(now);
        assert_eq!(w.start(), at(11, 0));
        assert_eq!(w.direction(), ShiftDirection::Backward);
    }

    #[test]
    fn test_advance_past_now_settles_on_latest_span() {
        let now = at(12, 0);
        let mut w = TimeWindow::starting_at(at(11, 55), now);
        w.advance(now);
        assert_eq!(w.end(), now);
        assert_eq!(w.start(), at(11, 50));
    }

    #[test]
    fn test_move_to_keeps_direction() {
        let now = at(12, 0);
        let mut w = TimeWindow::starting_at(at(10, 0), now);
        w.shift(Duration::minutes(10), now);
        w.move_to(at(9, 0), now);
        assert_eq!(w.start(), at(9, 0));
        assert_eq!(w.end(), at(9, 10));
        assert_eq!(w.direction(), ShiftDirection::Forward);
    }

    #[test]
    fn test_from_bounds_rejects_empty_window() {
        assert!(TimeWindow::from_bounds(at(12, 0), at(12, 0)).is_none());
        assert!(TimeWindow::from_bounds(at(12, 1), at(12, 0)).is_none());
    }
}
