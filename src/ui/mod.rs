//! Product list client.
//!
//! # Data Flow
//! ```text
//! user action (list / edit / delete / submit)
//!     → controller.rs (one API round trip via catalog_sdk)
//!     → render.rs (whole-list rendering) or form.rs (pre-fill, reset)
//!     → Ui implementation (terminal.rs, or any other front end)
//!
//! shell.rs parses typed commands into controller calls.
//! ```
//!
//! # Design Decisions
//! - Form mode is an owned value inside the controller, not global state
//! - Row actions go through one dispatch point, `handle_action`
//! - No retry, no caching; the list always mirrors the last fetch

pub mod controller;
pub mod form;
pub mod render;
pub mod shell;
pub mod terminal;

pub use controller::{Outcome, ProductListController, Ui};
pub use form::{FormMode, FormState, ValidationError};
pub use render::{ListAction, ListRow, ProductRow, RenderedList};
pub use terminal::TerminalUi;
