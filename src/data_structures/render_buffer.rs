//! Recyclable drawable slots.
//!
//! The host engine owns the actual 2D objects that end up on screen. The core
//! only sees them through the [`Drawable`] trait and overwrites their shape,
//! colour and visibility every frame. A [`RenderBuffer`] hands those slots out
//! in order and hides whatever was not used by the end of the frame.

use std::{cell::RefCell, rc::Rc};

use cgmath::Vector2;

use crate::{data_structures::color::Color, resources::mesh::IndexTriangle};

/// A projected polygon: 2D vertices plus the mesh's triangle list.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector2<f32>>,
    pub triangles: &'static [IndexTriangle],
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2<f32>>, triangles: &'static [IndexTriangle]) -> Self {
        Self { vertices, triangles }
    }
}

/// A host-owned 2D object the projector can draw into.
pub trait Drawable {
    fn set_shape(&mut self, polygon: Polygon);

    fn set_color(&mut self, color: Color);

    /// Collapse the object to zero size so nothing stale stays visible.
    fn hide(&mut self);
}

impl<D: Drawable + ?Sized> Drawable for &mut D {
    fn set_shape(&mut self, polygon: Polygon) {
        (**self).set_shape(polygon);
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}

impl<D: Drawable + ?Sized> Drawable for Rc<RefCell<D>> {
    fn set_shape(&mut self, polygon: Polygon) {
        self.borrow_mut().set_shape(polygon);
    }

    fn set_color(&mut self, color: Color) {
        self.borrow_mut().set_color(color);
    }

    fn hide(&mut self) {
        self.borrow_mut().hide();
    }
}

/// Plain drawable that just records what was written to it.
///
/// Useful for headless hosts and for inspecting projector output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSlot {
    pub shape: Option<Polygon>,
    pub color: Color,
}

impl PolygonSlot {
    pub fn is_hidden(&self) -> bool {
        self.shape.is_none()
    }
}

impl Drawable for PolygonSlot {
    fn set_shape(&mut self, polygon: Polygon) {
        self.shape = Some(polygon);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn hide(&mut self) {
        self.shape = None;
    }
}

/// A fixed ring of drawable slots with a per-frame write cursor.
#[derive(Debug)]
pub struct RenderBuffer<D> {
    slots: Vec<D>,
    head: usize,
}

impl<D: Drawable> RenderBuffer<D> {
    pub fn new(slots: Vec<D>) -> Self {
        Self { slots, head: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots requested since the last [`Self::begin_render`].
    pub fn used(&self) -> usize {
        self.head
    }

    pub fn begin_render(&mut self) {
        self.head = 0;
    }

    /**
     * Returns the next free slot.
     *
     * When more slots are requested than the buffer holds, the cursor wraps and
     * slots from earlier in the same frame are overwritten. Returns `None` only
     * when the buffer has no slots at all.
     */
    pub fn next_slot(&mut self) -> Option<&mut D> {
        if self.slots.is_empty() {
            return None;
        }
        let index = self.head % self.slots.len();
        if self.head == self.slots.len() {
            log::warn!(
                "render buffer overcommitted: more than {} slots requested this frame",
                self.slots.len()
            );
        }
        self.head += 1;
        self.slots.get_mut(index)
    }

    /// Hides every slot past the cursor.
    pub fn end_render(&mut self) {
        log::trace!("render buffer used {}/{} slots", self.head, self.slots.len());
        for slot in self.slots.iter_mut().skip(self.head) {
            slot.hide();
        }
    }

    pub fn slots(&self) -> &[D] {
        &self.slots
    }
}
