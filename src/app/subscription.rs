// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Phase};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Files dropped onto the window behave like a dialog selection. The tick
/// stream only runs while a request is in flight, so an idle window costs
/// nothing.
pub fn create(phase: Phase) -> Subscription<Message> {
    let drops = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileSelected(Some(path)))
        }
        _ => None,
    });

    let tick = if phase == Phase::Submitting {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([drops, tick])
}
