//! # Scene
//!
//! Flat arena of drawable elements plus an explicit paint order. Elements
//! paint strictly in `draw_order` (painter's algorithm); the `z` field on an
//! element is a hint consumed by [`Scene::sort_by_z`], never enforced
//! implicitly.

use slotmap::{SlotMap, new_key_type};

use crate::context::DrawContext;
use crate::elem::{Elem, ElemKind};

new_key_type! {
    /// Unique identifier for a scene element.
    pub struct ElemId;
}

/// The set of elements drawn over the grid, each independently owned by the
/// arena.
#[derive(Debug, Default)]
pub struct Scene {
    pub elems: SlotMap<ElemId, Elem>,
    /// Paint order, front element last.
    pub draw_order: Vec<ElemId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element at the end of the paint order.
    pub fn insert(&mut self, elem: Elem) -> ElemId {
        let id = self.elems.insert(elem);
        self.draw_order.push(id);
        id
    }

    /// Removes an element from the arena and the paint order.
    pub fn remove(&mut self, id: ElemId) -> Option<Elem> {
        self.draw_order.retain(|&other| other != id);
        self.elems.remove(id)
    }

    pub fn get(&self, id: ElemId) -> Option<&Elem> {
        self.elems.get(id)
    }

    pub fn get_mut(&mut self, id: ElemId) -> Option<&mut Elem> {
        self.elems.get_mut(id)
    }

    /// Re-sorts the paint order by the elements' `z` hint (stable, so
    /// insertion order breaks ties).
    pub fn sort_by_z(&mut self) {
        let elems = &self.elems;
        self.draw_order
            .sort_by_key(|&id| elems.get(id).map_or(0, |elem| elem.z));
    }

    /// Draws every element in paint order. Decorators sync their transform
    /// from their target just before painting, so they always track the
    /// target's latest state.
    pub fn draw(&mut self, ctx: &mut dyn DrawContext, outline: bool) {
        for i in 0..self.draw_order.len() {
            let id = self.draw_order[i];

            let target = match self.elems.get(id) {
                Some(elem) => match elem.kind {
                    ElemKind::Decorator { target } => Some(target),
                    _ => None,
                },
                None => continue,
            };
            if let Some(target) = target {
                let snapshot = self.elems.get(target).map(Elem::transform_snapshot);
                match snapshot {
                    Some(snapshot) => {
                        if let Some(elem) = self.elems.get_mut(id) {
                            elem.sync_from(&snapshot);
                        }
                    }
                    // dangling target: nothing sensible to decorate
                    None => continue,
                }
            }

            if let Some(elem) = self.elems.get_mut(id) {
                elem.draw(ctx, outline);
            }
        }
    }

    /// Hit-tests a screen-space point against the elements, topmost (last
    /// painted) first. Decorators are transparent to hit-testing.
    pub fn hit_test(&mut self, ctx: &mut dyn DrawContext, x: f32, y: f32) -> Option<ElemId> {
        let Self { elems, draw_order } = self;
        for &id in draw_order.iter().rev() {
            if let Some(elem) = elems.get_mut(id) {
                if matches!(elem.kind, ElemKind::Decorator { .. }) {
                    continue;
                }
                if elem.is_point_inside(ctx, x, y) {
                    return Some(id);
                }
            }
        }
        None
    }
}
