use log::info;

use crate::{
    tf_clock::TfClock,
    tf_error::TfError,
    tf_static_args::StaticTransformArgs,
    tf_static_broadcaster::TransformSender,
    tf_transform_record::TransformRecord,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PublisherState {
    Idle,
    Published(TransformRecord),
}

/// Sends one transform from `world` to a named frame, then never again.
pub struct StaticTransformPublisher<S> {
    sender: S,
    state: PublisherState,
}

impl<S: TransformSender> StaticTransformPublisher<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            state: PublisherState::Idle,
        }
    }

    /// Parses the pose, stamps it with `clock` and hands it to the sender.
    ///
    /// Only the first successful call sends; later calls fail with
    /// [`TfError::AlreadyPublished`]. A failed parse or send leaves the
    /// publisher idle.
    pub fn make_transforms<C: TfClock>(
        &mut self,
        args: &StaticTransformArgs,
        clock: &mut C,
    ) -> Result<TransformRecord, TfError> {
        if let PublisherState::Published(record) = &self.state {
            return Err(TfError::AlreadyPublished(record.child_frame().to_owned()));
        }

        let pose = args.parse_pose()?;
        let record = TransformRecord::from_world(
            clock.now()?,
            args.child_frame(),
            pose.translation,
            pose.rotation(),
        )?;
        self.sender.send_transform(&record)?;
        info!(
            "published static transform {} -> {}",
            record.parent_frame(),
            record.child_frame()
        );

        self.state = PublisherState::Published(record.clone());
        Ok(record)
    }

    pub fn state(&self) -> &PublisherState {
        &self.state
    }

    pub fn is_published(&self) -> bool {
        matches!(self.state, PublisherState::Published(_))
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }
}
