#[cfg(feature = "r2r")]
use r2r::{tf2_msgs::msg::TFMessage, QosProfile};

use crate::{tf_error::TfError, tf_transform_record::TransformRecord};

#[cfg(feature = "r2r")]
use crate::transforms::to_tf_message;

pub const TF_STATIC_TOPIC: &str = "/tf_static";

/// Channel a transform is handed to for broadcasting.
pub trait TransformSender {
    fn send_transform(&mut self, record: &TransformRecord) -> Result<(), TfError>;
}

/// Every static transform sent so far, one per child frame.
///
/// Late joiners on a latched topic only see the last message, so each message
/// has to carry the whole set.
#[derive(Clone, Debug, Default)]
pub struct StaticTransformCache {
    transforms: Vec<TransformRecord>,
}

impl StaticTransformCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any earlier transform for the same child.
    pub fn insert(&mut self, record: TransformRecord) {
        match self
            .transforms
            .iter_mut()
            .find(|known| known.child_frame() == record.child_frame())
        {
            Some(known) => *known = record,
            None => self.transforms.push(record),
        }
    }

    pub fn transforms(&self) -> &[TransformRecord] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

#[cfg(feature = "r2r")]
pub struct TfStaticBroadcaster {
    publisher: r2r::Publisher<TFMessage>,
    cache: StaticTransformCache,
}

#[cfg(feature = "r2r")]
impl TfStaticBroadcaster {
    /// Create a new TfStaticBroadcaster publishing on `/tf_static`
    pub fn new(node: &mut r2r::Node) -> Result<Self, TfError> {
        let qos = QosProfile::default()
            .keep_last(1)
            .reliable()
            .transient_local();
        let publisher = node
            .create_publisher(TF_STATIC_TOPIC, qos)
            .map_err(|err| TfError::R2r(err.to_string()))?;
        Ok(Self {
            publisher,
            cache: StaticTransformCache::new(),
        })
    }
}

#[cfg(feature = "r2r")]
impl TransformSender for TfStaticBroadcaster {
    /// Broadcast transform
    fn send_transform(&mut self, record: &TransformRecord) -> Result<(), TfError> {
        self.cache.insert(record.clone());
        let tf_message = to_tf_message(self.cache.transforms());
        self.publisher
            .publish(&tf_message)
            .map_err(|err| TfError::R2r(err.to_string()))
    }
}
