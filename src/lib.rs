// SPDX-License-Identifier: MPL-2.0
//! `folio` renders a personal academic portfolio as a native desktop app
//! built with the Iced GUI framework.
//!
//! It demonstrates key-based internationalization over embedded JSON
//! translation trees, persisted user preferences, responsive breakpoint
//! handling, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
