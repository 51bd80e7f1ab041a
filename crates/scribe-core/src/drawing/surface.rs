use std::sync::Arc;

use image::{imageops, Rgba, RgbaImage};
use kurbo::{Point, Rect, Vec2};

/// Immutable raster state shared between the history and the surface.
pub type Snapshot = Arc<RgbaImage>;

/// Opaque RGBA raster with a background colour.
///
/// Painting overwrites pixels; there is no alpha blending. Coordinates are in
/// pixels with the origin at the top-left corner, and a pixel is covered when
/// its centre lies inside the painted shape.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
    background: Rgba<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, background),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.pixels.pixels_mut() {
            *px = color;
        }
    }

    /// Paint the segment `from`→`to` with round caps.
    pub fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba<u8>) {
        let half = width / 2.0;
        let bounds = Rect::from_points(from, to).inflate(half, half);
        self.paint_where(bounds, color, |p| segment_distance(p, from, to) <= half);
    }

    /// Outline the rectangle spanned by two opposite corners, in any order.
    pub fn stroke_rect(&mut self, corner: Point, opposite: Point, width: f64, color: Rgba<u8>) {
        let rect = Rect::from_points(corner, opposite);
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        for (i, start) in corners.iter().enumerate() {
            let end = corners[(i + 1) % corners.len()];
            self.stroke_line(*start, end, width, color);
        }
    }

    /// Outline a circle.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba<u8>) {
        let half = width / 2.0;
        let reach = radius + half;
        let bounds = Rect::new(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
        );
        self.paint_where(bounds, color, |p| (p.distance(center) - radius).abs() <= half);
    }

    /// Change the surface size, keeping existing pixels anchored at the origin
    /// and filling newly exposed area with the background.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        let mut resized = RgbaImage::from_pixel(width, height, self.background);
        imageops::replace(&mut resized, &self.pixels, 0, 0);
        self.pixels = resized;
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::new(self.pixels.clone())
    }

    /// Clear to the background and draw `image` at the origin, clipped to the
    /// current size.
    pub fn restore(&mut self, image: &RgbaImage) {
        if image.dimensions() == self.pixels.dimensions() {
            self.pixels.clone_from(image);
            return;
        }
        self.fill(self.background);
        imageops::replace(&mut self.pixels, image, 0, 0);
    }

    fn paint_where<F>(&mut self, bounds: Rect, color: Rgba<u8>, covers: F)
    where
        F: Fn(Point) -> bool,
    {
        let (width, height) = self.pixels.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let x0 = bounds.x0.floor().max(0.0) as u32;
        let y0 = bounds.y0.floor().max(0.0) as u32;
        let x1 = (bounds.x1.ceil().max(0.0) as u32).min(width);
        let y1 = (bounds.y1.ceil().max(0.0) as u32).min(height);

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if covers(center) {
                    self.pixels.put_pixel(x, y, color);
                }
            }
        }
    }
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab: Vec2 = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn painted(surface: &Surface) -> usize {
        surface.pixels().pixels().filter(|px| **px != WHITE).count()
    }

    #[test]
    fn test_new_surface_is_background() {
        let surface = Surface::new(4, 3, WHITE);
        assert_eq!(surface.width(), 4);
        assert_eq!(surface.height(), 3);
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_horizontal_line_covers_its_width() {
        let mut surface = Surface::new(20, 20, WHITE);
        surface.stroke_line(Point::new(2.0, 10.0), Point::new(18.0, 10.0), 4.0, BLACK);

        assert_eq!(surface.pixel(10, 10), Some(BLACK));
        assert_eq!(surface.pixel(10, 8), Some(BLACK));
        assert_eq!(surface.pixel(10, 5), Some(WHITE));
        assert_eq!(surface.pixel(10, 14), Some(WHITE));
    }

    #[test]
    fn test_degenerate_segment_paints_a_dot() {
        let mut surface = Surface::new(10, 10, WHITE);
        let p = Point::new(5.0, 5.0);
        surface.stroke_line(p, p, 2.0, BLACK);
        assert!(painted(&surface) > 0);
    }

    #[test]
    fn test_rect_outline_in_any_direction() {
        let mut a = Surface::new(30, 30, WHITE);
        let mut b = Surface::new(30, 30, WHITE);
        a.stroke_rect(Point::new(5.0, 5.0), Point::new(25.0, 20.0), 2.0, BLACK);
        b.stroke_rect(Point::new(25.0, 20.0), Point::new(5.0, 5.0), 2.0, BLACK);

        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(a.pixel(5, 12), Some(BLACK), "left edge");
        assert_eq!(a.pixel(15, 12), Some(WHITE), "interior stays empty");
    }

    #[test]
    fn test_circle_outline() {
        let mut surface = Surface::new(40, 40, WHITE);
        surface.stroke_circle(Point::new(20.0, 20.0), 10.0, 2.0, BLACK);

        assert_eq!(surface.pixel(29, 19), Some(BLACK));
        assert_eq!(surface.pixel(19, 10), Some(BLACK));
        assert_eq!(surface.pixel(20, 20), Some(WHITE), "centre stays empty");
    }

    #[test]
    fn test_painting_outside_bounds_is_clipped() {
        let mut surface = Surface::new(10, 10, WHITE);
        surface.stroke_line(Point::new(-50.0, -50.0), Point::new(-40.0, -40.0), 5.0, BLACK);
        surface.stroke_circle(Point::new(100.0, 100.0), 5.0, 3.0, BLACK);
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_resize_preserves_origin_and_fills_background() {
        let mut surface = Surface::new(10, 10, WHITE);
        surface.stroke_line(Point::new(0.0, 0.5), Point::new(10.0, 0.5), 1.0, BLACK);

        surface.resize(20, 5);

        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 5);
        assert_eq!(surface.pixel(9, 0), Some(BLACK));
        assert_eq!(surface.pixel(15, 0), Some(WHITE));
    }

    #[test]
    fn test_restore_smaller_snapshot_clears_rest() {
        let mut surface = Surface::new(10, 10, WHITE);
        surface.fill(BLACK);
        let small = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));

        surface.restore(&small);

        assert_eq!(surface.pixel(1, 1), Some(Rgba([1, 2, 3, 255])));
        assert_eq!(surface.pixel(5, 5), Some(WHITE));
    }
}
