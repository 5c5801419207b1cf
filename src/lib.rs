// src/lib.rs

pub mod component;
pub mod connection;
pub mod error;
pub mod parts;
pub mod pcb;
pub mod shapes;
pub mod text;

pub use component::{BoundPin, Component, Pin};
pub use connection::{Connection, Waypoint};
pub use error::{Error, Result};
pub use pcb::{BoardEntity, ComponentId, Pcb, PinHandle, Route, DEFAULT_TRACE_WIDTH};
pub use shapes::{rectangle, union_all, Point, Polygon, Shape};
pub use text::render_text;
