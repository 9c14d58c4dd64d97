//! Abilities domain: time-boxed, guard-gated behaviours layered on
//! locomotion.
//!
//! Each ability is explicit timed state advanced by the clock that drives it:
//! dash and hover by the fixed step, fuel by the frame. A rejected start is
//! dropped, never queued.

mod dash;
mod fuel;
mod hover;
mod jump;
mod timer;

pub use dash::Dash;
pub use fuel::Fuel;
pub use hover::Hover;
pub use jump::Jump;
pub use timer::AbilityTimer;
