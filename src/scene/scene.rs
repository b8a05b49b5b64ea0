use slotmap::SlotMap;

use crate::animation::clock::AnimationClock;
use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Node storage plus the clock driving the per-frame animation pass.
///
/// The scene is a pure data layer: it owns the nodes and ticks them, while
/// matrix composition across ancestors and all rendering stay outside.
/// Single-threaded and frame-driven; timelines must not be mutated while
/// [`Scene::animate`] runs.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
    clock: AnimationClock,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            clock: AnimationClock::new(),
        }
    }

    /// Inserts a node as a root; re-parent it with [`Scene::attach`].
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Makes `child` a child of `parent`, keeping both sides of the
    /// hierarchy in sync: the child is first detached from its previous
    /// parent's child list (or from the root list), so a node is never
    /// listed under two parents.
    pub fn attach(&mut self, parent: NodeHandle, child: NodeHandle) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        // Detach from old
        let old_parent = self.nodes.get(child).and_then(Node::parent);
        if let Some(p) = old_parent {
            if let Some(node) = self.nodes.get_mut(p) {
                node.children.retain(|&h| h != child);
            }
        } else {
            self.root_nodes.retain(|&h| h != child);
        }
        // Attach to new
        if let Some(node) = self.nodes.get_mut(parent) {
            node.push_child(child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.set_parent(Some(parent));
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Starts the animation clock from zero.
    pub fn start_animation(&mut self) {
        self.clock.start();
    }

    /// Configures clock looping; see [`AnimationClock::set_loop`].
    pub fn set_animation_loop(&mut self, enabled: bool, period: f32) {
        self.clock.set_loop(enabled, period);
    }

    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Advances the clock by `dt` and ticks every node.
    ///
    /// The clock time is read once, so all nodes observe the same query
    /// time within a single pass and the whole graph stays frame-coherent.
    pub fn animate(&mut self, dt: f32) {
        self.clock.advance(dt);
        let time = self.clock.time();
        for node in self.nodes.values_mut() {
            node.tick(time);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
