//! Spatial Index Module
//!
//! R-tree over region envelopes for hit testing. The tree narrows the
//! candidates; the exact half-open `contains` check and the fixed scan
//! order decide the answer, so a point on a shared edge always resolves to
//! the same region.

use crate::region::Region;
use crate::types::{RegionBounds, RegionId};
use rstar::{RTree, RTreeObject, AABB};
use std::fmt;

/// A spatial entry representing one region's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub region: RegionId,
    pub bounds: RegionBounds,
}

impl SpatialEntry {
    pub fn new(region: RegionId, bounds: RegionBounds) -> Self {
        Self { region, bounds }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        // Closed envelope; shared edges are resolved by `contains_point`.
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

/// Spatial index for canvas regions using an R-tree.
#[derive(Clone)]
pub struct RegionIndex {
    tree: RTree<SpatialEntry>,
}

impl RegionIndex {
    /// Build an index from the scene's regions.
    pub fn from_regions<'a, I>(regions: I) -> Self
    where
        I: IntoIterator<Item = &'a Region>,
    {
        let entries: Vec<SpatialEntry> = regions
            .into_iter()
            .map(|region| SpatialEntry::new(region.id(), *region.bounds()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All regions whose bounds contain the point, in scan order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<RegionId> {
        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<RegionId> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.region)
            .collect();
        hits.sort();
        hits
    }

    /// The first region in scan order that contains the point.
    pub fn region_at(&self, x: f32, y: f32) -> Option<RegionId> {
        self.query_point(x, y).into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl fmt::Debug for RegionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionIndex").field("len", &self.len()).finish()
    }
}
