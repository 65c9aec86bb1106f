// src/gui/actions/mod.rs
//
// Button handlers that act on the whole App rather than drawing anything.

mod copy;

pub use copy::copy;
