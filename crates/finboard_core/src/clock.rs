//! Injected source of "today".
//!
//! Generation and date-range presets anchor on the current calendar day.
//! Reading it through a [`Clock`] lets callers pin the day in tests while
//! production code uses [`SystemClock`].

use crate::types::Date;

/// Provides the current local calendar day.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Date::today()
    }
}

/// Clock that always reports the same day.
///
/// # Examples
///
/// ```
/// use finboard_core::clock::{Clock, FixedClock};
/// use finboard_core::types::Date;
///
/// let day = Date::from_ymd(2024, 10, 19).unwrap();
/// let clock = FixedClock::new(day);
/// assert_eq!(clock.today(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    pub fn new(date: Date) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
