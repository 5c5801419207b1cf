// src/shapes.rs

use glam::Vec2;
use serde::Serialize;

/// A 2D point in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A simple filled polygon, vertices in counter-clockwise order.
#[derive(Debug, Clone, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

/// A renderable shape: the union of a set of polygons.
///
/// Shapes are immutable values; every operation returns a new shape.
/// Union is plain set accumulation, which keeps combine associative and
/// commutative as downstream renderers expect.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Shape {
    pub polygons: Vec<Polygon>,
}

impl Shape {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Combines two shapes into one renderable set.
    pub fn union(mut self, other: Shape) -> Shape {
        self.polygons.extend(other.polygons);
        self
    }

    /// Returns the shape shifted by (dx, dy).
    pub fn translate(&self, dx: f32, dy: f32) -> Shape {
        let d = Vec2::new(dx, dy);
        Shape {
            polygons: self
                .polygons
                .iter()
                .map(|p| Polygon {
                    vertices: p.vertices.iter().map(|v| *v + d).collect(),
                })
                .collect(),
        }
    }

    /// Returns the shape rotated counter-clockwise about the origin.
    /// The angle is in degrees.
    pub fn rotate(&self, degrees: f32) -> Shape {
        let rot = Vec2::from_angle(degrees.to_radians());
        Shape {
            polygons: self
                .polygons
                .iter()
                .map(|p| Polygon {
                    vertices: p.vertices.iter().map(|v| rot.rotate(*v)).collect(),
                })
                .collect(),
        }
    }

    /// Axis-aligned bounding box over all vertices, or None for an empty
    /// shape.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        let mut verts = self.polygons.iter().flat_map(|p| p.vertices.iter());
        let first = *verts.next()?;
        let (mut min, mut max) = (first, first);
        for v in verts {
            min = min.min(*v);
            max = max.max(*v);
        }
        Some((min, max))
    }
}

/// Builds an axis-aligned rectangle from its extents.
pub fn rectangle(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Shape {
    Shape {
        polygons: vec![Polygon {
            vertices: vec![
                Vec2::new(xmin, ymin),
                Vec2::new(xmax, ymin),
                Vec2::new(xmax, ymax),
                Vec2::new(xmin, ymax),
            ],
        }],
    }
}

/// Union over any number of shapes. Empty input yields the empty shape.
pub fn union_all<I: IntoIterator<Item = Shape>>(shapes: I) -> Shape {
    shapes
        .into_iter()
        .fold(Shape::empty(), |acc, s| acc.union(s))
}
