use chrono::{Duration, NaiveTime, Timelike};

/// Minute boundaries slot starts are aligned to (:00, :15, :30, :45).
const BOUNDARY_MINUTES: u32 = 15;

/// Facility-wide scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingPolicy {
    /// Opening time; no slot starts earlier.
    pub business_open: NaiveTime,
    /// Closing time; every slot ends strictly before it.
    pub business_close: NaiveTime,
    pub slot_duration: Duration,
    pub max_slots: usize,
    /// Length of the date window when no end date is given.
    pub default_window_days: u64,
    pub default_start_time: NaiveTime,
    pub default_end_time: NaiveTime,
    /// Upper bound on calendar days examined per query.
    pub max_scan_days: usize,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            business_open: hm(8, 0),
            business_close: hm(18, 0),
            slot_duration: Duration::minutes(30),
            max_slots: 10,
            default_window_days: 14,
            default_start_time: hm(9, 0),
            default_end_time: hm(17, 0),
            max_scan_days: 366,
        }
    }
}

impl SchedulingPolicy {
    /// Clamps `[start, end)` to business hours and aligns the first slot start.
    ///
    /// Returns `None` when not even one slot fits, including the case where
    /// the requested window lies entirely outside business hours.
    pub fn daily_window(&self, start: NaiveTime, end: NaiveTime) -> Option<DailyWindow> {
        let first_start = round_up_to_boundary(start.max(self.business_open))?;
        let window = DailyWindow {
            first_start,
            close: end.min(self.business_close),
            step: self.slot_duration,
        };
        window.fits(first_start).then_some(window)
    }

    /// End time of a slot starting at `start`, if such a slot may be booked.
    pub fn bookable_end(&self, start: NaiveTime) -> Option<NaiveTime> {
        if start < self.business_open || !on_boundary(start) {
            return None;
        }
        let window = DailyWindow {
            first_start: start,
            close: self.business_close,
            step: self.slot_duration,
        };
        window.fits(start).then(|| window.end_of(start))
    }
}

/// The effective time range within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWindow {
    pub first_start: NaiveTime,
    pub close: NaiveTime,
    pub step: Duration,
}

impl DailyWindow {
    /// Slot start times in ascending order.
    pub fn starts(self) -> impl Iterator<Item = NaiveTime> {
        std::iter::successors(Some(self.first_start), move |start| {
            let (next, wrapped) = start.overflowing_add_signed(self.step);
            (wrapped == 0).then_some(next)
        })
        .take_while(move |start| self.fits(*start))
    }

    pub fn end_of(&self, start: NaiveTime) -> NaiveTime {
        start + self.step
    }

    fn fits(&self, start: NaiveTime) -> bool {
        let (end, wrapped) = start.overflowing_add_signed(self.step);
        wrapped == 0 && end < self.close
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn on_boundary(time: NaiveTime) -> bool {
    time.minute() % BOUNDARY_MINUTES == 0 && time.second() == 0 && time.nanosecond() == 0
}

/// Rounds up to the next quarter hour. `None` past the last boundary of the day.
fn round_up_to_boundary(time: NaiveTime) -> Option<NaiveTime> {
    let partial = u32::from(time.second() > 0 || time.nanosecond() > 0);
    let minutes = time.hour() * 60 + time.minute() + partial;
    let rounded = minutes.div_ceil(BOUNDARY_MINUTES) * BOUNDARY_MINUTES;
    NaiveTime::from_hms_opt(rounded / 60, rounded % 60, 0)
}

