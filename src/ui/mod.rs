// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`navbar`] - Navigation bar with responsive hamburger overlay
//! - [`pages`] - Static content pages (home, technology, theory, music, contact)
//! - [`breakpoint`] - Viewport width classification
//! - [`theming`] - Light/Dark theme mode management and color schemes
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod breakpoint;
pub mod design_tokens;
pub mod navbar;
pub mod pages;
pub mod theming;
