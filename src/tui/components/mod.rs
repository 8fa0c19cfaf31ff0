//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: Title, tagline and theme toggle hint
//! - `LoadingSpinner`: Animated indicator while a search runs
//! - `ErrorBanner`: `Error: ...` box
//! - `ResultPanel` / `SourceList`: Answer and citations (widgets, drawn inside `ResultView`)
//! - `FeedbackBar`: Helpful yes/no prompt
//! - `Footer`: Attribution, model name, key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Question input and suggestion chips
//! - `ResultView`: Scrollable answer + sources
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. Every component takes a `Palette` so a
//! theme toggle repaints on the next frame.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Footer::new(app.model_name(), &app.status_message, palette).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! footer.render(frame, area); // reads from global App
//! ```

pub mod error_banner;
pub mod feedback_bar;
pub mod footer;
pub mod header;
pub mod result_panel;
pub mod result_view;
pub mod search_bar;
pub mod source_list;
pub mod spinner;

pub use error_banner::ErrorBanner;
pub use feedback_bar::FeedbackBar;
pub use footer::Footer;
pub use header::Header;
pub use result_view::{ResultView, ResultViewState};
pub use search_bar::{SearchBar, SearchEvent};
pub use spinner::LoadingSpinner;
