//! Scene - the part of the application the states operate on.

use crate::constants::MAX_JOURNAL_EVENTS;
use crate::region::Region;
use crate::settings::Settings;
use crate::spatial_index::RegionIndex;
use crate::state::StateEvent;
use crate::types::{RegionBounds, RegionId};
use std::collections::VecDeque;

/// Regions, the hovered region, the mouse position and the transition
/// journal. States receive `&mut Scene` rather than the whole application.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Indexed by `RegionId::index`, so iteration is scan order
    regions: [Region; 4],
    hovered: RegionId,
    mouse: (f32, f32),
    index: RegionIndex,
    journal: VecDeque<StateEvent>,
    canvas_size: (f32, f32),
}

impl Scene {
    /// Split the canvas into four quadrants colored from `settings`.
    ///
    /// The mouse starts at the origin and the upper-left region is hovered.
    pub fn new(settings: &Settings) -> Self {
        let (width, height) = settings.canvas_size();
        let (mid_x, mid_y) = (width * 0.5, height * 0.5);

        let regions = RegionId::ALL.map(|id| {
            let bounds = match id {
                RegionId::UpperLeft => RegionBounds::new(0.0, mid_x, 0.0, mid_y),
                RegionId::UpperRight => RegionBounds::new(mid_x, width, 0.0, mid_y),
                RegionId::LowerLeft => RegionBounds::new(0.0, mid_x, mid_y, height),
                RegionId::LowerRight => RegionBounds::new(mid_x, width, mid_y, height),
            };
            let colors = settings.regions.colors_for(id);
            Region::new(
                id,
                bounds.clamped_to_canvas(width, height),
                colors.idle,
                colors.active,
                settings.animation_step,
            )
        });

        let index = RegionIndex::from_regions(regions.iter());

        Self {
            regions,
            hovered: RegionId::UpperLeft,
            mouse: (0.0, 0.0),
            index,
            journal: VecDeque::with_capacity(MAX_JOURNAL_EVENTS),
            canvas_size: (width, height),
        }
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        self.canvas_size
    }

    pub fn regions(&self) -> &[Region; 4] {
        &self.regions
    }

    /// Regions in scan order.
    pub fn regions_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        self.regions.iter_mut()
    }

    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.index()]
    }

    pub fn region_mut(&mut self, id: RegionId) -> &mut Region {
        &mut self.regions[id.index()]
    }

    pub fn hovered(&self) -> RegionId {
        self.hovered
    }

    pub fn hovered_region(&self) -> &Region {
        self.region(self.hovered)
    }

    pub fn set_hovered(&mut self, id: RegionId) {
        self.hovered = id;
    }

    pub fn mouse(&self) -> (f32, f32) {
        self.mouse
    }

    pub fn set_mouse(&mut self, x: f32, y: f32) {
        self.mouse = (x, y);
    }

    /// The first region in scan order containing the point, if any.
    pub fn region_at(&self, x: f32, y: f32) -> Option<RegionId> {
        self.index.region_at(x, y)
    }

    /// Append a state event, dropping the oldest once the journal is full.
    pub fn record(&mut self, event: StateEvent) {
        if self.journal.len() >= MAX_JOURNAL_EVENTS {
            self.journal.pop_front();
        }
        self.journal.push_back(event);
    }

    /// Recent state events, oldest first.
    pub fn journal(&self) -> &VecDeque<StateEvent> {
        &self.journal
    }

    /// Remove and return all recorded events.
    pub fn take_journal(&mut self) -> Vec<StateEvent> {
        self.journal.drain(..).collect()
    }
}
