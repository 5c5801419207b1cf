// src/connection.rs

use crate::component::Component;
use crate::error::{Error, Result};
use crate::pcb::PinHandle;
use crate::shapes::{rectangle, Point, Shape};

/// One stop along a trace: either a fixed board coordinate or a pad on a
/// placed component, resolved against the board when traces are computed.
#[derive(Debug, Clone, Copy)]
pub enum Waypoint {
    Fixed(Point),
    Pad(PinHandle),
}

impl Waypoint {
    pub fn is_pad(&self) -> bool {
        matches!(self, Waypoint::Pad(_))
    }

    /// Current board-absolute position of this waypoint.
    pub fn resolve(&self, components: &[Component]) -> Result<Point> {
        match self {
            Waypoint::Fixed(p) => Ok(*p),
            Waypoint::Pad(handle) => {
                let component = components
                    .get(handle.component.index())
                    .ok_or(Error::UnknownComponent(handle.component.index()))?;
                Ok(component.pin_at(handle.pin)?.position())
            }
        }
    }
}

impl From<Point> for Waypoint {
    fn from(p: Point) -> Self {
        Waypoint::Fixed(p)
    }
}

impl From<PinHandle> for Waypoint {
    fn from(h: PinHandle) -> Self {
        Waypoint::Pad(h)
    }
}

/// A copper route of uniform width through a sequence of waypoints.
#[derive(Debug, Clone)]
pub struct Connection {
    width: f32,
    waypoints: Vec<Waypoint>,
}

impl Connection {
    /// Builds a connection. Fails immediately if fewer than two waypoints
    /// are given; a route that short cannot produce a segment.
    pub fn new(width: f32, waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(Error::TooFewWaypoints(waypoints.len()));
        }
        Ok(Self { width, waypoints })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Flattens the route into one rectangle per consecutive waypoint
    /// pair.
    ///
    /// Every non-terminal segment is lengthened by half the trace width
    /// so that angled joints stay covered at the corner. This is an
    /// approximation of a mitred joint, not the real thing; it leaves
    /// slight overshoot past each bend instead of a notch. The final
    /// segment is never extended.
    pub fn traces(&self, components: &[Component]) -> Result<Shape> {
        let points: Vec<Point> = self
            .waypoints
            .iter()
            .map(|w| w.resolve(components))
            .collect::<Result<_>>()?;

        log::trace!(
            "routing {} segment(s) at width {}",
            points.len() - 1,
            self.width
        );

        let mut out = Shape::empty();
        for (i, pair) in points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            let span = p2.to_vec2() - p1.to_vec2();

            let mut d = span.length();
            let terminal = i + 2 == points.len();
            if !terminal {
                d += self.width / 2.0;
            }

            let heading = span.y.atan2(span.x).to_degrees();
            let segment = rectangle(0.0, d, -self.width / 2.0, self.width / 2.0)
                .rotate(heading)
                .translate(p1.x, p1.y);
            out = out.union(segment);
        }
        Ok(out)
    }
}
