//! Scroll-triggered section reveal
//!
//! Every page registers its content sections with a [`RevealController`].
//! A section stays hidden until the viewport platform reports it as at least
//! partially visible, then it is revealed once and never hidden again.

mod controller;

pub use controller::{RevealController, RevealControllerBuilder};

use std::time::Duration;

/// Fraction of a section that must be inside the viewport before it reveals
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Per-handle lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unregistered,
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// One registered section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealTarget {
    pub revealed: bool,
    /// Stagger delay the section was revealed with
    pub delay: Duration,
}

/// A visibility change reported by the viewport platform
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<H> {
    pub handle: H,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
}

impl<H> IntersectionEntry<H> {
    pub fn entered(handle: H, ratio: f64) -> Self {
        Self {
            handle,
            is_intersecting: true,
            ratio,
        }
    }

    pub fn left(handle: H) -> Self {
        Self {
            handle,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Viewport-intersection service the controller observes through.
///
/// Implementations deliver crossings back by calling
/// [`RevealController::on_intersections`]; they never mutate reveal state
/// themselves.
pub trait ViewportObserver<H> {
    /// Start reporting crossings of `threshold` for `handle`
    fn observe(&mut self, handle: &H, threshold: f64);

    /// Stop reporting for a single handle
    fn unobserve(&mut self, _handle: &H) {}

    /// Stop reporting for every handle
    fn disconnect(&mut self);
}

/// Callback applying the "in-view" treatment to a revealed section
pub type RevealEffect<H> = Box<dyn FnMut(&H, Duration)>;
