//! A decoding engine bound to a text buffer
//!
//! [`Keyboard`] is the host-side glue: it feeds events to its engine, applies
//! the resulting edits to the linked buffer and forwards notifications to a
//! registered handler.

use crate::engine::{DecoderEngine, EngineOutput, InputEvent, Notification, TextBuffer};
use crate::error::Result;

type NotificationHandler = Box<dyn FnMut(&Notification)>;

pub struct Keyboard<B: TextBuffer> {
    engine: DecoderEngine,
    buffer: B,
    handler: Option<NotificationHandler>,
}

impl<B: TextBuffer> Keyboard<B> {
    pub fn new(engine: DecoderEngine, buffer: B) -> Self {
        Self {
            engine,
            buffer,
            handler: None,
        }
    }

    /// Register the callback that receives every notification.
    /// Replaces any previous handler.
    pub fn set_notification_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Process one event: edits are applied to the buffer before any
    /// notification is delivered.
    pub fn handle(&mut self, event: InputEvent) -> Result<EngineOutput> {
        let output = self.engine.process_event(event)?;
        output.apply_to(&mut self.buffer);

        if let Some(handler) = self.handler.as_mut() {
            for notification in &output.notifications {
                handler(notification);
            }
        }
        Ok(output)
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn engine(&self) -> &DecoderEngine {
        &self.engine
    }

    pub fn into_buffer(self) -> B {
        self.buffer
    }
}
