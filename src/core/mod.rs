//! # Core Application Logic
//!
//! The session controller. It knows nothing about any specific UI
//! technology or HTTP library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • gate (backpressure)  │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  one-shot  │      │   client   │
//!     │  Adapter   │      │   cycle    │      │  (reqwest) │
//!     │ (ratatui)  │      │  (stdout)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`message`]: `Message`, `Role`, and the append-only `History`
//! - [`state`]: `Session`, everything the controller owns
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`gate`]: what a submit key or button press means right now
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod gate;
pub mod message;
pub mod state;
