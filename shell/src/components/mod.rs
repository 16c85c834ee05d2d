//! Leptos UI components for rendering the dashboard shell.
//!
//! Each component is a Leptos `#[component]` function over plain data from
//! the shell state ([`crate::navigation::NavModel`], [`crate::viewer::ViewerState`]),
//! so the same markup is produced on the server and by the browser module.
//!
//! # Component Hierarchy
//!
//! ```text
//! ShellDocument
//! ├── Topbar
//! │   └── ThemeToggle
//! ├── Sidebar
//! │   └── CategoryGroup (per category)
//! │       └── ReportRow (per report)
//! └── ViewerPanel
//!     └── EmbedView (sandboxed iframe + loading overlay)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_shell`] and the
//! fragment renderers, but can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use fleet_shell::components::ViewerPanel;
//! use fleet_shell::viewer::ViewerState;
//!
//! view! { <ViewerPanel state=ViewerState::Empty /> }
//! ```

mod document;
mod icons;
mod sidebar;
mod topbar;
mod viewer;

pub use document::ShellDocument;
pub use icons::*;
pub use sidebar::Sidebar;
pub use topbar::{ThemeToggle, Topbar};
pub use viewer::ViewerPanel;
