use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    tf_error::TfError,
    utils::{time_from_duration_since_epoch, Time},
};

/// Source of the stamp written into a transform.
pub trait TfClock {
    fn now(&mut self) -> Result<Time, TfError>;
}

/// Wall clock, for hosts without a middleware clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TfClock for SystemClock {
    fn now(&mut self) -> Result<Time, TfError> {
        // A clock set before 1970 stamps zero rather than failing the publish.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        time_from_duration_since_epoch(since_epoch)
    }
}
