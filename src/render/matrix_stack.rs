//! Cumulative model-matrix stack.

use glam::Mat4;

/// An explicit model-matrix stack with scoped save/restore.
///
/// The traversal never pairs `push`/`pop` by hand: [`MatrixStack::scoped`]
/// multiplies a local matrix onto the top, runs the closure, and restores
/// the previous top however the closure returns. After a full traversal
/// the stack is exactly as it started.
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl MatrixStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }

    /// The current cumulative transform.
    #[must_use]
    pub fn current(&self) -> Mat4 {
        *self.stack.last().expect("stack never empty")
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Runs `f` with `local` multiplied onto the cumulative transform,
    /// restoring the previous transform afterwards.
    pub fn scoped<R>(&mut self, local: &Mat4, f: impl FnOnce(&mut Self) -> R) -> R {
        let combined = self.current() * *local;
        self.stack.push(combined);
        let result = f(self);
        self.stack.pop();
        result
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn scoped_restores_on_exit() {
        let mut stack = MatrixStack::new();
        let local = Mat4::from_translation(Vec3::X);
        stack.scoped(&local, |s| {
            assert_eq!(s.depth(), 2);
            assert_eq!(s.current(), local);
        });
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn scoped_restores_on_early_return() {
        fn inner(stack: &mut MatrixStack) -> Result<(), ()> {
            stack.scoped(&Mat4::from_scale(Vec3::splat(2.0)), |_| Err(()))
        }

        let mut stack = MatrixStack::new();
        assert!(inner(&mut stack).is_err());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn nested_scopes_accumulate() {
        let mut stack = MatrixStack::new();
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_translation(Vec3::Y);
        stack.scoped(&a, |s| {
            s.scoped(&b, |s| {
                let p = s.current().transform_point3(Vec3::ZERO);
                assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
            });
        });
        assert_eq!(stack.depth(), 1);
    }
}
