//! User interface rendering layer with component-based architecture.
//!
//! Transforms application state into ANSI-styled output through composable
//! rendering components, with dark and light palettes.
//!
//! ```text
//! AppState → compute_viewmodel → FormViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and width-aware padding
//! - [`theme`]: Palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{FieldView, FooterInfo, FormViewModel, HeaderInfo, InfoPanel, SubmitButton, ToastView};
