//! Render layer: the payload handed to the display after every
//! operation, plus the sizing hints the widget uses to draw it.

mod display;
mod frame;

pub use display::DisplayOptions;
pub use frame::Frame;
