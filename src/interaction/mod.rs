//! Interaction domain: grabbing, throwing and shaking a nearby rigid body.
//!
//! Independent of locomotion, but uses the same forward-facing visual body
//! as its reference frame.

mod grab;
mod shake;

pub use grab::Grabber;
pub use shake::Shake;
