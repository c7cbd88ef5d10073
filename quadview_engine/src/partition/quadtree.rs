/// QuadTree — region quadtree rebuilt from scratch every tick.
///
/// Single-node placement: each AABB is assigned to exactly one node, the
/// deepest one whose region fully contains it (bounded by `max_depth`).
/// An AABB that straddles a quadrant boundary stays in the current node;
/// it is never split or duplicated across quadrants.
///
/// Unlike a static octree, nodes are created on demand: only the branches
/// actually reached by an insertion exist. Nodes live in a flat arena and
/// link to each other by index; the parent link is a plain index, so
/// ownership flows strictly from the arena and `clear()` drops everything
/// at once.

use crate::math::{AABB, Quadrant, subdivide};

/// Index of the root node in the arena.
pub const ROOT: usize = 0;

/// A single node of the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTreeNode {
    /// Region covered by this node
    aabb: AABB,
    /// Parent index (`None` for the root)
    parent: Option<usize>,
    /// Child indices in slot order: bottom-left, bottom-right, top-right, top-left
    children: [Option<usize>; 4],
}

impl QuadTreeNode {
    fn new(aabb: AABB, parent: Option<usize>) -> Self {
        Self {
            aabb,
            parent,
            children: [None; 4],
        }
    }

    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn children(&self) -> &[Option<usize>; 4] {
        &self.children
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<usize> {
        self.children[quadrant.index()]
    }

    /// A node is a leaf iff all 4 child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Quadrant partition over a fixed field region.
#[derive(Debug, Clone)]
pub struct QuadTree {
    /// Region covered by the root
    region: AABB,
    /// Maximum depth (root = 0)
    max_depth: u32,
    /// Node arena; `nodes[ROOT]` always exists
    nodes: Vec<QuadTreeNode>,
}

impl QuadTree {
    /// Create an empty tree (root only) over `region`.
    ///
    /// # Arguments
    ///
    /// * `region` - Field region covered by the root
    /// * `max_depth` - Maximum depth an insertion may descend to (root = 0)
    pub fn new(region: AABB, max_depth: u32) -> Self {
        let mut tree = Self {
            region,
            max_depth,
            nodes: Vec::new(),
        };
        tree.clear();
        tree
    }

    /// Discard every node and start over with a fresh root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(QuadTreeNode::new(self.region, None));
    }

    /// Insert an AABB and return the index of the node it was assigned to.
    ///
    /// Descends from the root, testing the 4 candidate quadrants in slot
    /// order and following the first one that fully contains `aabb`. The
    /// chosen child is created and linked on first use. Stops at
    /// `max_depth` or when no quadrant contains `aabb`; the returned node's
    /// region contains `aabb` whenever the root's region does.
    pub fn add_to_tree(&mut self, aabb: &AABB) -> usize {
        let mut node_idx = ROOT;
        let mut depth = 0;

        loop {
            if depth >= self.max_depth {
                return node_idx;
            }

            let candidates = subdivide(&self.nodes[node_idx].aabb);
            let slot = Quadrant::ALL.into_iter().find(|&q| {
                let region = match self.nodes[node_idx].child(q) {
                    Some(child) => self.nodes[child].aabb,
                    None => candidates[q.index()],
                };
                region.contains(aabb)
            });

            match slot {
                Some(q) => {
                    node_idx = self.link_child(node_idx, q, candidates[q.index()]);
                    depth += 1;
                }
                // Straddles a boundary: stays here
                None => return node_idx,
            }
        }
    }

    /// Return the child in `quadrant`, creating and linking it if absent.
    fn link_child(&mut self, parent: usize, quadrant: Quadrant, region: AABB) -> usize {
        if let Some(existing) = self.nodes[parent].child(quadrant) {
            return existing;
        }

        let child = self.nodes.len();
        self.nodes.push(QuadTreeNode::new(region, Some(parent)));
        self.nodes[parent].children[quadrant.index()] = Some(child);
        child
    }

    // ===== READ ACCESS =====

    pub fn root(&self) -> &QuadTreeNode {
        &self.nodes[ROOT]
    }

    /// Node by index, `None` if the index is not part of the current tree.
    pub fn node(&self, index: usize) -> Option<&QuadTreeNode> {
        self.nodes.get(index)
    }

    /// All nodes with their indices, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &QuadTreeNode)> {
        self.nodes.iter().enumerate()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn region(&self) -> &AABB {
        &self.region
    }

    /// Walk from `index` up to the root, `index` included.
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let start = (index < self.nodes.len()).then_some(index);
        std::iter::successors(start, move |&i| self.nodes[i].parent)
    }

    /// Depth of a node (root = 0).
    pub fn depth_of(&self, index: usize) -> Option<u32> {
        let hops = self.ancestors(index).count();
        (hops > 0).then(|| hops as u32 - 1)
    }
}

#[cfg(test)]
#[path = "quadtree_tests.rs"]
mod tests;
