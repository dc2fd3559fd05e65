//! Transformation composition.

use glam::{Mat4, Quat};

use crate::document::TransformOp;

/// Composes a transformation block into a single matrix, in document order:
/// the first declared operation is applied to geometry last, matching the
/// usual model-matrix convention (`M = op_0 * op_1 * ... * op_n`).
///
/// The result is immutable once built; components hold either their own
/// composed matrix or a shared table entry.
#[must_use]
pub fn compose(ops: &[TransformOp]) -> Mat4 {
    let mut matrix = Mat4::IDENTITY;
    for op in ops {
        let m = match *op {
            TransformOp::Translate(v) => Mat4::from_translation(v),
            TransformOp::Rotate { axis, angle } => {
                Mat4::from_quat(Quat::from_axis_angle(axis.unit(), angle))
            }
            TransformOp::Scale(v) => Mat4::from_scale(v),
        };
        matrix *= m;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Axis;
    use glam::Vec3;

    #[test]
    fn translate_then_scale_order() {
        // Document order: translate, then scale. A unit point should be
        // scaled first, then translated: (1,0,0) -> (2,0,0) -> (5,0,0).
        let m = compose(&[
            TransformOp::Translate(Vec3::new(3.0, 0.0, 0.0)),
            TransformOp::Scale(Vec3::splat(2.0)),
        ]);
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rotate_about_global_axis() {
        let m = compose(&[TransformOp::Rotate {
            axis: Axis::Z,
            angle: std::f32::consts::FRAC_PI_2,
        }]);
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn empty_block_is_identity() {
        assert_eq!(compose(&[]), Mat4::IDENTITY);
    }
}
