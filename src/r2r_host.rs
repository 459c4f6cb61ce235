use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use log::{debug, info};

use crate::{
    tf_clock::TfClock,
    tf_error::TfError,
    utils::{time_from_duration_since_epoch, Time},
};

const SPIN_TIMEOUT: Duration = Duration::from_millis(100);

/// The process-wide r2r context and the node living on it.
///
/// The host holds the only handles to the node and context, so dropping it
/// lets r2r's own `Drop` impls destroy the node and shut the context down on
/// every exit path after [`R2rHost::init`].
pub struct R2rHost {
    node: r2r::Node,
    clock: r2r::Clock,
}

impl R2rHost {
    pub fn init(node_name: &str, namespace: &str) -> Result<Self, TfError> {
        let ctx = r2r::Context::create().map_err(|err| TfError::R2r(err.to_string()))?;
        let node = r2r::Node::create(ctx, node_name, namespace)
            .map_err(|err| TfError::R2r(err.to_string()))?;
        let clock = r2r::Clock::create(r2r::ClockType::RosTime)
            .map_err(|err| TfError::R2r(err.to_string()))?;
        info!("node {node_name:?} up in namespace {namespace:?}");
        Ok(Self { node, clock })
    }

    pub fn node_mut(&mut self) -> &mut r2r::Node {
        &mut self.node
    }

    /// Spins the node until Ctrl-C. Must run inside a multi-threaded tokio
    /// runtime since each spin blocks the calling worker.
    pub async fn spin_until_interrupted(&mut self) -> Result<(), TfError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = interrupted.clone();
        let signal = tokio::spawn(async move {
            let res = tokio::signal::ctrl_c().await;
            flag.store(true, Ordering::SeqCst);
            res
        });

        while !interrupted.load(Ordering::SeqCst) {
            self.node.spin_once(SPIN_TIMEOUT);
            tokio::task::yield_now().await;
        }
        debug!("interrupt received");

        signal
            .await
            .map_err(|err| TfError::R2r(err.to_string()))?
            .map_err(|err| TfError::R2r(err.to_string()))
    }
}

impl TfClock for R2rHost {
    fn now(&mut self) -> Result<Time, TfError> {
        let now = self
            .clock
            .get_now()
            .map_err(|err| TfError::R2r(err.to_string()))?;
        time_from_duration_since_epoch(now)
    }
}

impl Drop for R2rHost {
    fn drop(&mut self) {
        debug!("shutting down r2r context");
    }
}
