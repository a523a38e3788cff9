//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `FormViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust,no_run
//! use zcontact::app::AppState;
//! use zcontact::ui::render;
//!
//! let state = AppState::default();
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning for every row
/// it draws. Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let _span = tracing::trace_span!(
        "render",
        rows,
        cols,
        toast = viewmodel.toast.is_some(),
        info_panel = viewmodel.info_panel.is_some()
    )
    .entered();

    components::render_form(&viewmodel, &state.theme, cols, rows);
}
