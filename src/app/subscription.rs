// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Left/Right arrow keys step through the gallery. Key presses already
//! captured by a widget are left alone.

use super::Message;
use crate::ui::{gallery, page};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                gallery_key(&key).map(|msg| Message::Page(page::Message::Gallery(msg)))
            }
            _ => None,
        }
    })
}

/// Gallery navigation bound to `key`, if any.
fn gallery_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        _ => None,
    }
}
