use log::{debug, info};
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    tf_error::TfError, tf_transform_record::WORLD_FRAME, transforms::quaternion_from_euler,
};

/// `child_frame_name x y z roll pitch yaw`
pub const POSE_ARGUMENT_COUNT: usize = 7;

const POSE_FIELDS: [&str; 6] = ["x", "y", "z", "roll", "pitch", "yaw"];

pub const USAGE: &str = "Invalid number of parameters. Usage: \n\
    $ ros2 run static_turtle_tf2_r2r static_turtle_tf2_broadcaster \
    child_frame_name x y z roll pitch yaw";

/// Positional arguments that passed the count and frame-name checks.
///
/// The numeric values stay as text until [`StaticTransformArgs::parse_pose`],
/// so a malformed number is only reported once the host is up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticTransformArgs {
    child_frame: String,
    values: [String; 6],
}

impl StaticTransformArgs {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, TfError> {
        if args.len() < POSE_ARGUMENT_COUNT {
            return Err(TfError::InvalidArgumentCount {
                expected: POSE_ARGUMENT_COUNT,
                found: args.len(),
            });
        }
        let child_frame = args[0].as_ref();
        if child_frame == WORLD_FRAME {
            return Err(TfError::ReservedFrameName(child_frame.to_owned()));
        }
        if args.len() > POSE_ARGUMENT_COUNT {
            debug!(
                "ignoring {} extra argument(s)",
                args.len() - POSE_ARGUMENT_COUNT
            );
        }
        let values = std::array::from_fn(|i| args[i + 1].as_ref().to_owned());
        Ok(Self {
            child_frame: child_frame.to_owned(),
            values,
        })
    }

    /// Like [`StaticTransformArgs::from_args`], but reports usage errors and
    /// returns `Ok(None)`: the caller sends nothing and exits with status 0.
    pub fn from_args_or_usage<S: AsRef<str>>(args: &[S]) -> Result<Option<Self>, TfError> {
        match Self::from_args(args) {
            Ok(args) => Ok(Some(args)),
            Err(TfError::ReservedFrameName(_)) => {
                info!("Your static turtle name cannot be \"{WORLD_FRAME}\"");
                Ok(None)
            }
            Err(err) if err.is_usage_error() => {
                info!("{USAGE}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn child_frame(&self) -> &str {
        &self.child_frame
    }

    pub fn parse_pose(&self) -> Result<Pose, TfError> {
        let mut parsed = [0f64; 6];
        for ((slot, field), value) in parsed.iter_mut().zip(POSE_FIELDS).zip(&self.values) {
            *slot = value
                .trim()
                .parse::<f64>()
                .map_err(|source| TfError::NumberFormat {
                    field,
                    value: value.clone(),
                    source,
                })?;
        }
        let [x, y, z, roll, pitch, yaw] = parsed;
        Ok(Pose {
            translation: Vector3::new(x, y, z),
            roll,
            pitch,
            yaw,
        })
    }
}

/// A 6D pose with the rotation kept as Euler angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vector3<f64>,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        quaternion_from_euler(self.roll, self.pitch, self.yaw)
    }
}
