//! R\*-tree over node locations for nearest-node queries.

use geo::Coord;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::RailwayNode;

/// Node location paired with the node's arena position.
type IndexedNode = GeomWithData<[f64; 2], usize>;

/// Spatial lookup from coordinates to node arena positions.
pub(super) struct NodeIndex {
    tree: RTree<IndexedNode>,
}

impl NodeIndex {
    pub(super) fn new(nodes: &[RailwayNode]) -> Self {
        let entries = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| {
                GeomWithData::new([node.location.x, node.location.y], position)
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Arena position of the node nearest `location`.
    pub(super) fn nearest(&self, location: Coord<f64>) -> Option<usize> {
        self.tree
            .nearest_neighbor(&[location.x, location.y])
            .map(|entry| entry.data)
    }
}
