use nalgebra::{UnitQuaternion, Vector3};

use crate::{tf_error::TfError, utils::Time};

/// Parent frame of every transform this crate publishes.
pub const WORLD_FRAME: &str = "world";

/// A stamped rigid transform from `parent_frame` to `child_frame`.
///
/// The two frame names never match; [`TransformRecord::new`] refuses such a
/// record with [`TfError::ReservedFrameName`].
#[derive(Clone, Debug, PartialEq)]
pub struct TransformRecord {
    stamp: Time,
    parent_frame: String,
    child_frame: String,
    translation: Vector3<f64>,
    rotation: UnitQuaternion<f64>,
}

impl TransformRecord {
    pub fn new(
        stamp: Time,
        parent_frame: impl Into<String>,
        child_frame: impl Into<String>,
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Result<Self, TfError> {
        let parent_frame = parent_frame.into();
        let child_frame = child_frame.into();
        if parent_frame == child_frame {
            return Err(TfError::ReservedFrameName(child_frame));
        }
        Ok(Self {
            stamp,
            parent_frame,
            child_frame,
            translation,
            rotation,
        })
    }

    /// Transform hanging `child_frame` off [`WORLD_FRAME`].
    pub fn from_world(
        stamp: Time,
        child_frame: impl Into<String>,
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Result<Self, TfError> {
        Self::new(stamp, WORLD_FRAME, child_frame, translation, rotation)
    }

    pub fn stamp(&self) -> &Time {
        &self.stamp
    }

    pub fn parent_frame(&self) -> &str {
        &self.parent_frame
    }

    pub fn child_frame(&self) -> &str {
        &self.child_frame
    }

    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_world() {
        let record = TransformRecord::from_world(
            Time {
                sec: 1,
                nanosec: 500_000_000,
            },
            "turtle1",
            Vector3::new(0.0, 2.0, 0.0),
            UnitQuaternion::identity(),
        )
        .unwrap();

        assert_eq!(record.parent_frame(), "world");
        assert_eq!(record.child_frame(), "turtle1");
        assert_eq!(record.stamp(), &Time { sec: 1, nanosec: 500_000_000 });
        assert_eq!(record.translation(), &Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(record.rotation(), &UnitQuaternion::identity());
    }

    #[test]
    fn test_child_must_differ_from_parent() {
        let res = TransformRecord::from_world(
            Time::default(),
            WORLD_FRAME,
            Vector3::zeros(),
            UnitQuaternion::identity(),
        );
        assert!(matches!(res, Err(TfError::ReservedFrameName(name)) if name == "world"));

        let res = TransformRecord::new(
            Time::default(),
            "base_link",
            "base_link",
            Vector3::zeros(),
            UnitQuaternion::identity(),
        );
        assert!(res.is_err());
    }
}
