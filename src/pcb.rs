// src/pcb.rs

use crate::component::Component;
use crate::connection::{Connection, Waypoint};
use crate::error::{Error, Result};
use crate::shapes::{rectangle, union_all, Point, Shape};

/// Trace width used by the convenience connect operations.
pub const DEFAULT_TRACE_WIDTH: f32 = 0.008;

/// Identifies a component on a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentId(usize);

impl ComponentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A storable reference to one pad: a component plus a pin index.
///
/// Unlike a `BoundPin` this borrows nothing, so it can sit inside a
/// connection and be resolved against the board's current state whenever
/// trace geometry is computed.
#[derive(Debug, Clone, Copy)]
pub struct PinHandle {
    pub component: ComponentId,
    pub pin: usize,
}

/// Anything that can be added to a board.
#[derive(Debug, Clone)]
pub enum BoardEntity {
    Component(Component),
    Connection(Connection),
}

impl From<Component> for BoardEntity {
    fn from(c: Component) -> Self {
        BoardEntity::Component(c)
    }
}

impl From<Connection> for BoardEntity {
    fn from(c: Connection) -> Self {
        BoardEntity::Connection(c)
    }
}

/// Waypoint-insertion policy for pad-to-pad connects.
///
/// The two flags are mutually exclusive; selecting both is rejected
/// before any connection is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct Route {
    pub horizontal_first: bool,
    pub vertical_first: bool,
}

impl Route {
    /// Straight segment from pad to pad.
    pub fn direct() -> Self {
        Self::default()
    }

    /// Travel horizontally, then vertically.
    pub fn horizontal_first() -> Self {
        Self {
            horizontal_first: true,
            vertical_first: false,
        }
    }

    /// Travel vertically, then horizontally.
    pub fn vertical_first() -> Self {
        Self {
            horizontal_first: false,
            vertical_first: true,
        }
    }

    fn validate(self) -> Result<Self> {
        if self.horizontal_first && self.vertical_first {
            return Err(Error::ConflictingRoute);
        }
        Ok(self)
    }
}

/// A board under construction: dimensions plus append-only lists of
/// placed components and routed connections. All geometry queries are
/// recomputed from current state; nothing is cached.
#[derive(Debug)]
pub struct Pcb {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    components: Vec<Component>,
    connections: Vec<Connection>,
}

impl Pcb {
    pub fn new(x0: f32, y0: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x0, y0),
            width,
            height,
            components: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Adds an entity, dispatching on its kind.
    pub fn add(&mut self, entity: impl Into<BoardEntity>) {
        match entity.into() {
            BoardEntity::Component(c) => self.components.push(c),
            BoardEntity::Connection(c) => self.connections.push(c),
        }
    }

    /// Places a component and returns its id for later pad lookups.
    pub fn add_component(&mut self, component: Component) -> ComponentId {
        self.components.push(component);
        ComponentId(self.components.len() - 1)
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn component(&self, id: ComponentId) -> Result<&Component> {
        self.components.get(id.0).ok_or(Error::UnknownComponent(id.0))
    }

    /// Mutable access, for nudging a placed part.
    pub fn component_mut(&mut self, id: ComponentId) -> Result<&mut Component> {
        self.components
            .get_mut(id.0)
            .ok_or(Error::UnknownComponent(id.0))
    }

    /// Handle to a named pad on a placed component.
    pub fn pad_named(&self, id: ComponentId, name: &str) -> Result<PinHandle> {
        let pin = self.component(id)?.pin_index(name)?;
        Ok(PinHandle { component: id, pin })
    }

    /// Handle to a pad by pin index.
    pub fn pad_at(&self, id: ComponentId, index: usize) -> Result<PinHandle> {
        // Validate eagerly so a bad index fails here, not at trace time.
        self.component(id)?.pin_at(index)?;
        Ok(PinHandle {
            component: id,
            pin: index,
        })
    }

    /// Current board position of a pad.
    pub fn pad_position(&self, handle: PinHandle) -> Result<Point> {
        Waypoint::Pad(handle).resolve(&self.components)
    }

    /// Routes a trace between two pads.
    ///
    /// Horizontal-first inserts the corner `(p1.x, p0.y)`, vertical-first
    /// inserts `(p0.x, p1.y)`. Corner positions are snapshotted from the
    /// pad positions at connect time; the endpoints themselves stay live.
    pub fn connect(&mut self, p0: PinHandle, p1: PinHandle, width: f32, route: Route) -> Result<()> {
        let route = route.validate()?;
        let a = self.pad_position(p0)?;
        let b = self.pad_position(p1)?;

        let waypoints = if route.horizontal_first {
            vec![p0.into(), Point::new(b.x, a.y).into(), p1.into()]
        } else if route.vertical_first {
            vec![p0.into(), Point::new(a.x, b.y).into(), p1.into()]
        } else {
            vec![p0.into(), p1.into()]
        };

        log::trace!("connect {:?} -> {:?} ({} waypoints)", p0, p1, waypoints.len());
        self.connections.push(Connection::new(width, waypoints)?);
        Ok(())
    }

    /// Connects two pads traveling first horizontally, then vertically.
    pub fn connect_horizontal(&mut self, p0: PinHandle, p1: PinHandle) -> Result<()> {
        self.connect(p0, p1, DEFAULT_TRACE_WIDTH, Route::horizontal_first())
    }

    /// Connects two pads traveling first vertically, then horizontally.
    pub fn connect_vertical(&mut self, p0: PinHandle, p1: PinHandle) -> Result<()> {
        self.connect(p0, p1, DEFAULT_TRACE_WIDTH, Route::vertical_first())
    }

    /// Routes through an explicit waypoint list. Free points are allowed
    /// as intermediate stops only; both endpoints must be pads.
    pub fn connect_path(&mut self, width: f32, waypoints: Vec<Waypoint>) -> Result<()> {
        if waypoints.len() < 2 {
            return Err(Error::TooFewWaypoints(waypoints.len()));
        }
        let endpoints_ok =
            waypoints.first().is_some_and(Waypoint::is_pad) && waypoints.last().is_some_and(Waypoint::is_pad);
        if !endpoints_ok {
            return Err(Error::FreeEndpoint);
        }
        self.connections.push(Connection::new(width, waypoints)?);
        Ok(())
    }

    /// All copper on the board: every component's pads unioned with every
    /// connection's trace segments, in insertion order.
    pub fn traces(&self) -> Result<Shape> {
        log::debug!(
            "flattening board: {} components, {} connections",
            self.components.len(),
            self.connections.len()
        );
        let pads = union_all(self.components.iter().map(Component::pads));
        let mut out = pads;
        for connection in &self.connections {
            out = out.union(connection.traces(&self.components)?);
        }
        Ok(out)
    }

    /// Reference and pin-name labels for every placed component.
    pub fn labels(&self) -> Shape {
        union_all(
            self.components
                .iter()
                .map(|c| c.label().union(c.pin_labels())),
        )
    }

    /// The board outline rectangle.
    pub fn outline(&self) -> Shape {
        rectangle(
            self.origin.x,
            self.origin.x + self.width,
            self.origin.y,
            self.origin.y + self.height,
        )
    }
}
