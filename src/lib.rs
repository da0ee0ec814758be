//! Askbox: a terminal client for a single-endpoint question-answering service.
//!
//! The binary wires these together; the library split exists so the
//! integration tests can drive the client and the submission cycle.

pub mod client;
pub mod core;
pub mod cycle;
pub mod tui;

#[cfg(test)]
pub mod test_support;
