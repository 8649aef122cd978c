//! Software canvas over a 0RGB pixel buffer.

use swiperow_widget::{Point, Rect};

/// Owns the pixel buffer the window surface is filled from. Painters draw in
/// row-local coordinates; the canvas translates by `origin` and clips against
/// both the clip rect and the buffer bounds.
pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    origin: Point,
    clip: Rect,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            origin: Point::ZERO,
            clip: Rect::default(),
        }
    }

    /// Resizes the buffer and resets origin and clip to cover everything.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.resize((width * height) as usize, 0);
        self.origin = Point::ZERO;
        self.clip = Rect::new(0.0, 0.0, width as f32, height as f32);
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Translation applied to every subsequent fill, in buffer coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Clip rect in buffer coordinates (not affected by the origin).
    pub fn set_clip(&mut self, clip: Rect) {
        self.clip = clip;
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let rect = rect.translated(self.origin.x, self.origin.y);

        let left = rect.x.max(self.clip.x).max(0.0);
        let top = rect.y.max(self.clip.y).max(0.0);
        let right = (rect.x + rect.width)
            .min(self.clip.x + self.clip.width)
            .min(self.width as f32);
        let bottom = (rect.y + rect.height)
            .min(self.clip.y + self.clip.height)
            .min(self.height as f32);

        if right <= left || bottom <= top {
            return;
        }

        let (x0, x1) = (left as usize, right as usize);
        for y in top as usize..bottom as usize {
            let row = y * self.width as usize;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
