//! # Core Application Logic
//!
//! This module contains Rails Hub's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • format (markdown)    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Store    │
//!             │  Adapter   │          │ (~/.rails  │
//!             │ (ratatui)  │          │   hub/)    │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding every piece of view state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`format`]: Markdown-subset parsing of answer text
//! - [`config`]: Config file, env vars and CLI overrides
//! - [`storage`]: File-per-key preference store
//! - [`feedback`]: "Was this helpful?" log
//! - [`theme`]: Light/dark preference

pub mod action;
pub mod config;
pub mod feedback;
pub mod format;
pub mod state;
pub mod storage;
pub mod theme;
