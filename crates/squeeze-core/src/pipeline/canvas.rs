//! The pipeline's working canvas.
//!
//! An opaque RGB surface, exclusively owned by the pipeline. Encoders only
//! ever see a [`Canvas::snapshot`], the same way `toBlob` captures the canvas
//! contents at call time.

use crate::decode::DecodedImage;

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    surface: DecodedImage,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Resize the surface. Like assigning `canvas.width`, this clears it.
    pub fn size_to(&mut self, width: u32, height: u32) {
        let len = (width as usize) * (height as usize) * 3;
        self.surface.width = width;
        self.surface.height = height;
        self.surface.pixels.clear();
        self.surface.pixels.resize(len, 0);
    }

    /// Fill with the opaque backdrop.
    pub fn clear(&mut self) {
        self.surface.pixels.fill(0);
    }

    /// Redraw `image` at its natural size, resizing the surface if needed.
    pub fn draw(&mut self, image: &DecodedImage) {
        if self.surface.dimensions() != image.dimensions() {
            self.size_to(image.width, image.height);
        } else {
            self.clear();
        }
        self.surface.pixels.copy_from_slice(&image.pixels);
    }

    pub fn snapshot(&self) -> DecodedImage {
        self.surface.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_to_clears() {
        let mut canvas = Canvas::new();
        canvas.draw(&DecodedImage::new(1, 1, vec![9, 9, 9]));
        canvas.size_to(2, 1);

        assert_eq!((canvas.width(), canvas.height()), (2, 1));
        assert_eq!(canvas.snapshot().pixels, vec![0; 6]);
    }

    #[test]
    fn test_draw_adopts_natural_size() {
        let mut canvas = Canvas::new();
        canvas.size_to(10, 10);

        let image = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        canvas.draw(&image);

        assert_eq!(canvas.snapshot(), image);
    }

    #[test]
    fn test_redraw_replaces_contents() {
        let mut canvas = Canvas::new();
        canvas.draw(&DecodedImage::new(1, 1, vec![1, 1, 1]));
        canvas.draw(&DecodedImage::new(1, 1, vec![2, 2, 2]));

        assert_eq!(canvas.snapshot().pixels, vec![2, 2, 2]);
    }
}
