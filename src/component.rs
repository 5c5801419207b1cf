// src/component.rs

use std::sync::Arc;

use glam::Vec2;

use crate::error::{Error, Result};
use crate::shapes::{union_all, Point, Shape};
use crate::text::render_text;

/// Height of pin-name labels, in board units.
const PIN_LABEL_SIZE: f32 = 0.01;
/// Height of component reference labels.
const REF_LABEL_SIZE: f32 = 0.05;

/// A pad descriptor in component-local coordinates.
///
/// The shape is defined relative to the pin's own origin; `pad()` places
/// it at the pin offset within the component.
#[derive(Debug, Clone)]
pub struct Pin {
    pub x: f32,
    pub y: f32,
    pub shape: Shape,
    pub name: Option<String>,
}

impl Pin {
    pub fn new(x: f32, y: f32, shape: Shape) -> Self {
        Self {
            x,
            y,
            shape,
            name: None,
        }
    }

    pub fn named(x: f32, y: f32, shape: Shape, name: &str) -> Self {
        Self {
            x,
            y,
            shape,
            name: Some(name.to_string()),
        }
    }

    /// The pad shape placed at the pin's local offset.
    pub fn pad(&self) -> Shape {
        self.shape.translate(self.x, self.y)
    }
}

/// A placed component instance.
///
/// Position and rotation are public so a part can be nudged after
/// placement; the pin table is shared, read-only data (one `Arc` slice
/// per component type), so instances can never mutate each other's pins.
#[derive(Debug, Clone)]
pub struct Component {
    pub x: f32,
    pub y: f32,
    /// Rotation about the component origin, degrees counter-clockwise.
    pub rotation: f32,
    pub name: String,
    /// Reference-designator prefix, e.g. "R" or "U".
    pub prefix: &'static str,
    pins: Arc<[Pin]>,
}

impl Component {
    pub fn new(x: f32, y: f32, rotation: f32, name: &str, pins: Arc<[Pin]>) -> Self {
        Self {
            x,
            y,
            rotation,
            name: name.to_string(),
            prefix: "",
            pins,
        }
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Looks up a pin by name.
    pub fn pin_named(&self, name: &str) -> Result<BoundPin<'_>> {
        let pin = self
            .pins
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .ok_or_else(|| Error::UnknownPinName(name.to_string()))?;
        Ok(BoundPin {
            pin,
            component: self,
        })
    }

    /// Looks up a pin by its position in the pin table.
    pub fn pin_at(&self, index: usize) -> Result<BoundPin<'_>> {
        let pin = self.pins.get(index).ok_or(Error::PinIndexOutOfRange {
            index,
            count: self.pins.len(),
        })?;
        Ok(BoundPin {
            pin,
            component: self,
        })
    }

    /// Index of a named pin, for building storable pad handles.
    pub fn pin_index(&self, name: &str) -> Result<usize> {
        self.pins
            .iter()
            .position(|p| p.name.as_deref() == Some(name))
            .ok_or_else(|| Error::UnknownPinName(name.to_string()))
    }

    /// All pad geometry in board coordinates.
    ///
    /// Pads are placed at their local offsets, the assembly is rotated
    /// about the component origin, then translated to the board position.
    /// The order matters: rotate-then-translate matches the bound-pin
    /// transform applied to every pad vertex.
    pub fn pads(&self) -> Shape {
        log::debug!(
            "aggregating {} pads for component {:?}",
            self.pins.len(),
            self.name
        );
        union_all(self.pins.iter().map(Pin::pad))
            .rotate(self.rotation)
            .translate(self.x, self.y)
    }

    /// Name labels for every named pin, at the pin's board position.
    pub fn pin_labels(&self) -> Shape {
        let mut out = Shape::empty();
        for index in 0..self.pins.len() {
            let bound = BoundPin {
                pin: &self.pins[index],
                component: self,
            };
            if let Some(name) = bound.pin.name.as_deref() {
                out = out.union(render_text(name, bound.x(), bound.y(), PIN_LABEL_SIZE));
            }
        }
        out
    }

    /// The component's reference label at its origin.
    pub fn label(&self) -> Shape {
        render_text(&self.name, self.x, self.y, REF_LABEL_SIZE)
    }
}

/// A pin viewed through its owning component's placement.
///
/// Coordinates are recomputed on every access so the view always
/// reflects the component's current position and rotation.
#[derive(Debug, Clone, Copy)]
pub struct BoundPin<'a> {
    pub pin: &'a Pin,
    pub component: &'a Component,
}

impl BoundPin<'_> {
    pub fn x(&self) -> f32 {
        self.position().x
    }

    pub fn y(&self) -> f32 {
        self.position().y
    }

    /// Board-absolute position: the local pin vector rotated by the
    /// component rotation, then translated to the component position.
    pub fn position(&self) -> Point {
        let rot = Vec2::from_angle(self.component.rotation.to_radians());
        let local = Vec2::new(self.pin.x, self.pin.y);
        Point::from(rot.rotate(local) + Vec2::new(self.component.x, self.component.y))
    }
}
