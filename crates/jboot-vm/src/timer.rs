//! Cheap, accurate interval timing for launcher diagnostics.
//!
//! On Windows the tick source is the performance counter; elsewhere it is
//! the monotonic clock at nanosecond resolution. The counter frequency is
//! queried once per process. If that query fails, every later call returns
//! 0, permanently; there is no retry.

use std::sync::OnceLock;

/// One-time counter calibration. `available` latches false forever when
/// the frequency query fails.
#[derive(Clone, Copy, Debug)]
struct Calibration {
    frequency: i64,
    available: bool,
}

static CALIBRATION: OnceLock<Calibration> = OnceLock::new();

fn calibration() -> Calibration {
    *CALIBRATION.get_or_init(platform::calibrate)
}

/// Current value of the interval counter, in platform ticks. Returns the
/// 0 sentinel when no counter is available.
pub fn ticks() -> i64 {
    if !calibration().available {
        return 0;
    }
    platform::ticks()
}

/// Convert a tick interval to microseconds, or 0 when no counter is
/// available. Integer arithmetic: sub-microsecond precision is truncated
/// and very large intervals can overflow.
pub fn ticks_to_micros(ticks: i64) -> i64 {
    convert(calibration(), ticks)
}

fn convert(cal: Calibration, ticks: i64) -> i64 {
    if !cal.available {
        return 0;
    }
    ticks * 1_000_000 / cal.frequency
}

#[cfg(windows)]
mod platform {
    use windows_sys::Win32::System::Performance::{
        QueryPerformanceCounter, QueryPerformanceFrequency,
    };

    use super::Calibration;

    pub(super) fn calibrate() -> Calibration {
        let mut frequency = 0i64;
        let ok = unsafe { QueryPerformanceFrequency(&mut frequency) } != 0;
        Calibration {
            frequency,
            available: ok && frequency > 0,
        }
    }

    pub(super) fn ticks() -> i64 {
        let mut count = 0i64;
        if unsafe { QueryPerformanceCounter(&mut count) } == 0 {
            return 0;
        }
        count
    }
}

#[cfg(not(windows))]
mod platform {
    use std::sync::OnceLock;
    use std::time::Instant;

    use super::Calibration;

    static EPOCH: OnceLock<Instant> = OnceLock::new();

    // The monotonic clock cannot fail, so the unavailable branch only ever
    // latches on Windows.
    pub(super) fn calibrate() -> Calibration {
        EPOCH.get_or_init(Instant::now);
        Calibration {
            frequency: 1_000_000_000,
            available: true,
        }
    }

    pub(super) fn ticks() -> i64 {
        let epoch = EPOCH.get_or_init(Instant::now);
        epoch.elapsed().as_nanos() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::{Calibration, convert, ticks, ticks_to_micros};

    #[test]
    fn one_full_second_of_ticks_is_a_million_micros() {
        let cal = Calibration {
            frequency: 3_579_545,
            available: true,
        };
        assert_eq!(convert(cal, cal.frequency), 1_000_000);
    }

    #[test]
    fn sub_microsecond_intervals_truncate_to_zero() {
        let cal = Calibration {
            frequency: 1_000_000_000,
            available: true,
        };
        assert_eq!(convert(cal, 999), 0);
    }

    #[test]
    fn unavailable_counter_converts_everything_to_zero() {
        let cal = Calibration {
            frequency: 0,
            available: false,
        };
        assert_eq!(convert(cal, 0), 0);
        assert_eq!(convert(cal, 1), 0);
        assert_eq!(convert(cal, i64::MAX), 0);
    }

    #[test]
    fn intervals_are_monotonic() {
        let a = ticks();
        let b = ticks();
        assert!(b >= a);
        assert!(ticks_to_micros(b - a) >= 0);
    }
}
