use std::time::Duration;

use crate::tf_error::TfError;

/// Mirror of `builtin_interfaces/msg/Time`, kept free of any middleware types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

/// Fails once the seconds no longer fit the message's `i32` field (2038-01-19).
pub fn time_from_duration_since_epoch(d: Duration) -> Result<Time, TfError> {
    let sec = i32::try_from(d.as_secs()).map_err(|_| TfError::TimeOutOfRange(d.as_secs()))?;
    Ok(Time {
        sec,
        nanosec: d.subsec_nanos(),
    })
}
