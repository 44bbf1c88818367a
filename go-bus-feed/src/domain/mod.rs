//! Domain types for GO bus feed processing.
//!
//! These types represent validated feed identifiers. All types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod color;
mod direction;
mod route_id;
mod stop;

pub use color::{InvalidColor, RouteColor};
pub use direction::{Cardinal, DirectionSlot, InvalidDirection};
pub use route_id::{InvalidRouteId, RouteId};
pub use stop::{InvalidStopCode, StopCode, StopId};
