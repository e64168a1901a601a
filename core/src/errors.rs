//! Twist command errors.

use thiserror::Error;

/// A rejected twist command.
///
/// The only way a twist can fail: the layer index does not name one of the
/// three slices along the axis. The axis itself is a closed enum, so no
/// runtime check exists for it. A rejected twist leaves the cube untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TwistError {
    #[error("layer {layer} is out of range; a cube has layers 0 through 2")]
    LayerOutOfRange { layer: usize },
}
