//! Viewport geometry: effective aspect ratio, screen orientation and
//! pointer-to-NDC mapping.
//!
//! A [`Viewport`] is a snapshot of the host layout. Hosts build a fresh one
//! for every pointer event so resizes are always honored; nothing here is
//! cached.

use glam::Vec2;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Rectangle anchored at the window origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

/// Landscape or portrait, decided by comparing height against width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Width ≥ height.
    Landscape,
    /// Height > width.
    Portrait,
}

impl Orientation {
    /// Portrait iff `height > width`; squares count as landscape.
    #[must_use]
    pub fn of(width: f32, height: f32) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Host layout at the moment of an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Full window inner size in pixels.
    pub window: Vec2,
    /// Bounds of the render surface within the window.
    pub surface: Rect,
    /// Height reserved by overlay chrome such as a title bar (0 if none).
    pub chrome_height: f32,
}

impl Viewport {
    /// Viewport whose render surface fills the whole window, no chrome.
    #[must_use]
    pub fn fullscreen(width: f32, height: f32) -> Self {
        Self {
            window: Vec2::new(width, height),
            surface: Rect::from_size(width, height),
            chrome_height: 0.0,
        }
    }

    /// Reserve `height` pixels of chrome.
    #[must_use]
    pub fn with_chrome(mut self, height: f32) -> Self {
        self.chrome_height = height;
        self
    }

    /// Width over the height left after chrome, with the height floored at
    /// one pixel so degenerate layouts never divide by zero or flip sign.
    #[must_use]
    pub fn effective_aspect(&self) -> f32 {
        let chrome = self.chrome_height.max(0.0);
        self.window.x / (self.window.y - chrome).max(1.0)
    }

    /// Orientation of the window (not the chrome-reduced area).
    #[must_use]
    pub fn screen_orientation(&self) -> Orientation {
        Orientation::of(self.window.x, self.window.y)
    }

    /// Map a window-space pointer position to normalized device coordinates
    /// relative to the render surface. X grows right, Y grows up.
    #[must_use]
    pub fn ndc(&self, pointer: Vec2) -> Vec2 {
        let rect = &self.surface;
        let width = rect.width.max(1.0);
        let height = rect.height.max(1.0);
        Vec2::new(
            ((pointer.x - rect.left) / width) * 2.0 - 1.0,
            -((pointer.y - rect.top) / height) * 2.0 + 1.0,
        )
    }
}
