//! Scene-graph data layer.
//!
//! - [`Transform`]: TRS value type and its matrix form
//! - [`Node`]: hierarchy links, transform slots and the tick dispatch
//! - [`Scene`]: node storage and the per-frame animation pass

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a [`Node`] stored in a [`Scene`].
    pub struct NodeHandle;
}
