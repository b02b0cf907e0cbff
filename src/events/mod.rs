pub mod pointer;

pub use pointer::{refresh, wire_input_handlers, InputWiring};
