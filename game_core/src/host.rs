//! Host primitives the game runs on top of
//!
//! The core never talks to a platform directly. A host (browser, test
//! harness, ...) implements these traits and hands itself to
//! [`FrameDriver`](crate::FrameDriver). All calls are synchronous and
//! assumed never to fail.

use std::ops::ControlFlow;

/// Frame timing
pub trait Clock {
    /// Seconds since the previous frame (never negative)
    fn get_delta(&mut self) -> f32;
}

/// Keyboard polling
pub trait Keyboard {
    /// Whether the named key is held right now
    fn key_down(&self, name: &str) -> bool;
}

/// Drawing surface, in arena units with the origin at the top-left
pub trait Canvas {
    fn clear(&mut self);
    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Suspension point between frames.
///
/// Returns `Break` once the host stops driving the game; the core itself
/// never decides to stop.
pub trait FrameScheduler {
    fn wait_for_frame(&mut self) -> ControlFlow<()>;
}

/// Everything a frame needs from its host
pub trait Host: Clock + Keyboard + Canvas {}

impl<T: Clock + Keyboard + Canvas + ?Sized> Host for T {}
