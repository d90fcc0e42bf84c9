//! Position applier.

use crate::primitives::Vec3;
use crate::scene::SceneHost;

/// Hand `target` to `element`.
///
/// An element with a mover capability receives the target and owns the
/// transition; its position is not touched here. Anything else is moved
/// immediately.
pub fn apply_position<H: SceneHost>(host: &mut H, element: H::Node, target: Vec3) {
    match host.mover(element) {
        Some(mover) => {
            tracing::trace!(?element, ?target, "delegating move");
            mover.move_element(target);
        }
        None => host.set_local_position(element, target),
    }
}
