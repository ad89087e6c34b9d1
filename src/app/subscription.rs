// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are declarative: the runtime keeps the listener alive only
//! while [`create_event_subscription`] keeps being returned from
//! `App::subscription`, so nothing leaks across reconfigurations.

use super::Message;
use iced::{event, window, Subscription};

/// Listens for window resizes, which drive breakpoint reclassification and
/// the mobile-menu invariant. All other native events are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
