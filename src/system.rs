//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    (ts.tv_sec as i64, ts.tv_nsec as i32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, i32) {
    use winapi::shared::minwindef::FILETIME;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let hectonanos = (((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)) as i64
                   - HECTONANOSEC_TO_UNIX_EPOCH;

    (hectonanos.div_euclid(HECTONANOSECS_IN_SEC), (hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as i32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> (i64, i32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)  => (d.as_secs() as i64, d.subsec_nanos() as i32),
        Err(e) => {
            let d = e.duration();
            let nanos = d.subsec_nanos() as i32;
            if nanos == 0 { (-(d.as_secs() as i64), 0) }
                     else { (-(d.as_secs() as i64) - 1, 1_000_000_000 - nanos) }
        }
    }
}


/// Returns the local time zone’s offset from UTC, in seconds, in effect at
/// the given number of seconds since the Unix epoch.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
          target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly"))]
pub(crate) fn sys_utc_offset(seconds: i64) -> i64 {
    let time = seconds as libc::time_t;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        log::warn!("localtime_r failed; assuming UTC");
        0
    }
    else {
        tm.tm_gmtoff as i64
    }
}

/// Returns the local time zone’s offset from UTC, in seconds. Windows only
/// knows the current bias, so the instant is ignored.
#[cfg(windows)]
pub(crate) fn sys_utc_offset(_seconds: i64) -> i64 {
    use winapi::um::timezoneapi::{GetTimeZoneInformation, TIME_ZONE_INFORMATION};

    const TIME_ZONE_ID_STANDARD: u32 = 1;
    const TIME_ZONE_ID_DAYLIGHT: u32 = 2;

    let mut tzi: TIME_ZONE_INFORMATION = unsafe { std::mem::zeroed() };
    let bias = match unsafe { GetTimeZoneInformation(&mut tzi) } {
        TIME_ZONE_ID_DAYLIGHT  => tzi.Bias + tzi.DaylightBias,
        TIME_ZONE_ID_STANDARD  => tzi.Bias + tzi.StandardBias,
        _                      => tzi.Bias,
    };

    // The bias is the number of minutes to add to local time to get UTC.
    -(bias as i64) * 60
}

/// Platforms without a way to ask for the local offset are treated as
/// always being in UTC.
#[cfg(not(any(windows, target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
              target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly")))]
pub(crate) fn sys_utc_offset(_seconds: i64) -> i64 {
    0
}
