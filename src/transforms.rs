use nalgebra::UnitQuaternion;

#[cfg(feature = "r2r")]
use r2r::{
    builtin_interfaces::msg::Time,
    geometry_msgs::msg::{Quaternion, Transform, TransformStamped, Vector3},
    std_msgs::msg::Header,
    tf2_msgs::msg::TFMessage,
};

#[cfg(feature = "r2r")]
use crate::tf_transform_record::TransformRecord;

/// Rotation from static-axis Euler angles: roll about X, then pitch about Y,
/// then yaw about Z.
pub fn quaternion_from_euler(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(roll, pitch, yaw)
}

/// Quaternion components in `(x, y, z, w)` order.
pub fn quaternion_xyzw(q: &UnitQuaternion<f64>) -> [f64; 4] {
    [q.i, q.j, q.k, q.w]
}

#[cfg(feature = "r2r")]
pub fn to_transform_stamped(record: &TransformRecord) -> TransformStamped {
    let [x, y, z, w] = quaternion_xyzw(record.rotation());
    let translation = record.translation();
    TransformStamped {
        header: Header {
            stamp: Time {
                sec: record.stamp().sec,
                nanosec: record.stamp().nanosec,
            },
            frame_id: record.parent_frame().to_owned(),
        },
        child_frame_id: record.child_frame().to_owned(),
        transform: Transform {
            translation: Vector3 {
                x: translation.x,
                y: translation.y,
                z: translation.z,
            },
            rotation: Quaternion { x, y, z, w },
        },
    }
}

#[cfg(feature = "r2r")]
pub fn to_tf_message<'a>(records: impl IntoIterator<Item = &'a TransformRecord>) -> TFMessage {
    TFMessage {
        transforms: records.into_iter().map(to_transform_stamped).collect(),
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    use approx::assert_relative_eq;

    use super::*;

    fn reference_quaternion(roll: f64, pitch: f64, yaw: f64) -> [f64; 4] {
        let (sr, cr) = (roll / 2.0).sin_cos();
        let (sp, cp) = (pitch / 2.0).sin_cos();
        let (sy, cy) = (yaw / 2.0).sin_cos();
        [
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        ]
    }

    fn assert_xyzw_eq(actual: [f64; 4], expected: [f64; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_angles_give_identity() {
        let q = quaternion_from_euler(0.0, 0.0, 0.0);
        assert_eq!(quaternion_xyzw(&q), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_single_axis_rotations() {
        let half = FRAC_1_SQRT_2;
        let roll = quaternion_from_euler(FRAC_PI_2, 0.0, 0.0);
        assert_xyzw_eq(quaternion_xyzw(&roll), [half, 0.0, 0.0, half]);
        let pitch = quaternion_from_euler(0.0, FRAC_PI_2, 0.0);
        assert_xyzw_eq(quaternion_xyzw(&pitch), [0.0, half, 0.0, half]);
        let yaw = quaternion_from_euler(0.0, 0.0, FRAC_PI_2);
        assert_xyzw_eq(quaternion_xyzw(&yaw), [0.0, 0.0, half, half]);
    }

    #[test]
    fn test_combined_rotation_order() {
        let (roll, pitch, yaw) = (0.3, -1.1, 2.5);
        let q = quaternion_from_euler(roll, pitch, yaw);
        assert_xyzw_eq(quaternion_xyzw(&q), reference_quaternion(roll, pitch, yaw));

        let composed = UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), yaw)
            * UnitQuaternion::from_axis_angle(&nalgebra::Vector3::y_axis(), pitch)
            * UnitQuaternion::from_axis_angle(&nalgebra::Vector3::x_axis(), roll);
        assert_xyzw_eq(quaternion_xyzw(&q), quaternion_xyzw(&composed));
    }

    #[test]
    fn test_result_is_unit_length() {
        let q = quaternion_from_euler(1.0, 2.0, 3.0);
        let [x, y, z, w] = quaternion_xyzw(&q);
        assert_relative_eq!(x * x + y * y + z * z + w * w, 1.0, epsilon = 1e-12);
    }
}
