//! Calculator engine: the input state machine.
//!
//! The engine owns the operand being typed, the accumulated expression
//! history, and the just-evaluated flag. The input layer feeds it
//! [`InputEvent`](crate::input::InputEvent)s; every operation returns
//! the [`Frame`](crate::render::Frame) the display layer should draw
//! next.

mod ops;
mod state;

pub use state::{ERROR_DISPLAY, Engine};
