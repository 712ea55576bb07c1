mod competitor;
mod event;
mod picks;
mod score;
mod snapshot;
mod telemetry;

pub use competitor::*;
pub use event::*;
pub use picks::*;
pub use score::*;
pub use snapshot::*;
pub use telemetry::*;
