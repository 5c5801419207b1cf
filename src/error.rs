use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No pin named {0:?} on component")]
    UnknownPinName(String),

    #[error("Pin index {index} out of range (component has {count} pins)")]
    PinIndexOutOfRange { index: usize, count: usize },

    #[error("Component id {0} is not on this board")]
    UnknownComponent(usize),

    #[error("Connection needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("Horizontal-first and vertical-first routing are mutually exclusive")]
    ConflictingRoute,

    #[error("Trace endpoints must be component pads, not free points")]
    FreeEndpoint,
}

pub type Result<T> = std::result::Result<T, Error>;
