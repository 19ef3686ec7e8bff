//! World-anchored text label component

use crate::foundation::math::Vec3;
use crate::render::draw_queue::{DrawQueue, OverlayCommand};
use crate::render::error::DrawError;
use crate::scene::{Component, OverlayDrawable};

/// Text overlay anchored to the owner's world position.
///
/// Recorded by [`Scene::draw_overlay`](crate::scene::Scene::draw_overlay);
/// how the anchor is projected to screen space is the backend's business.
#[derive(Debug, Clone)]
pub struct ScreenLabelComponent {
    /// Text to display
    pub text: String,

    /// Text color in linear RGB
    pub color: Vec3,
}

impl ScreenLabelComponent {
    /// White label with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Set the color, chainable
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Replace the label text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Component for ScreenLabelComponent {
    fn overlay_drawable(&self) -> Option<&dyn OverlayDrawable> {
        Some(self)
    }
}

impl OverlayDrawable for ScreenLabelComponent {
    fn record_overlay(&self, world_position: Vec3, queue: &mut DrawQueue) -> Result<(), DrawError> {
        queue.push_overlay(OverlayCommand {
            text: self.text.clone(),
            anchor: world_position,
            color: self.color,
        });
        Ok(())
    }
}
