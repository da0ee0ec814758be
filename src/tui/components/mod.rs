//! # TUI Components
//!
//! ## Stateless (props only)
//!
//! - `TitleBar`: title, endpoint, pending spinner
//! - `MessageCard`: one transcript entry
//! - `SubmitButton`: the `[ Ask ]` control
//! - `LandingPage`: shown while the history is empty
//!
//! ## Stateful (event-driven)
//!
//! - `InputBox`: multi-line question editor
//! - `MessageList`: scrollable transcript that follows the history
//!
//! Each file keeps its state types, events, rendering and tests together.
//! Components get their data as props and never reach into `Session`
//! themselves; `ui::draw_ui` wires them up.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── message.rs
//! ├── message_list.rs
//! ├── submit_button.rs
//! ├── landing.rs
//! └── input_box/
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod message;
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
pub mod submit_button;
pub use submit_button::SubmitButton;
pub mod landing;
pub use landing::LandingPage;
