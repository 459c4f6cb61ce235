pub mod cli;
#[cfg(feature = "r2r")]
mod r2r_host;
mod static_transform_publisher;
mod tf_clock;
mod tf_error;
mod tf_static_args;
mod tf_static_broadcaster;
mod tf_transform_record;
pub mod transforms;
pub mod utils;

#[cfg(feature = "r2r")]
pub use r2r_host::R2rHost;
pub use static_transform_publisher::{PublisherState, StaticTransformPublisher};
pub use tf_clock::{SystemClock, TfClock};
pub use tf_error::TfError;
pub use tf_static_args::{Pose, StaticTransformArgs, POSE_ARGUMENT_COUNT, USAGE};
#[cfg(feature = "r2r")]
pub use tf_static_broadcaster::TfStaticBroadcaster;
pub use tf_static_broadcaster::{StaticTransformCache, TransformSender, TF_STATIC_TOPIC};
pub use tf_transform_record::{TransformRecord, WORLD_FRAME};
