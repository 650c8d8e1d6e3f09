//! Core engine for a four-function calculator widget.
//!
//! The engine holds the operand being typed, the accumulated expression
//! history, and an evaluation flag. An input layer feeds it discrete
//! events (digits, operators, equals, backspace, percent, sign toggle,
//! clear); after every event the engine hands back the [`render::Frame`]
//! the display layer should draw. Evaluation is a validated, hand-parsed
//! arithmetic pipeline with no dynamic execution.
//!
//! ```
//! use zcalc::{Engine, InputEvent, Operator};
//!
//! let mut engine = Engine::new();
//! engine.apply(InputEvent::Digit('5'));
//! engine.apply(InputEvent::Operator(Operator::Add));
//! engine.apply(InputEvent::Digit('3'));
//! let frame = engine.apply(InputEvent::Equals);
//! assert_eq!(frame.previous, "5 + 3 =");
//! assert_eq!(frame.current, "8");
//! ```

pub mod engine;
pub mod eval;
pub mod input;
pub mod render;

pub use engine::Engine;
pub use eval::{EvalError, evaluate};
pub use input::{InputEvent, Operator};
pub use render::Frame;
