use rand::random_range;

use crate::vec2f::Vec2f;

/// Smallest width and height handed out by the random layout.
const MIN_RANDOM_SIZE: i32 = 200;

/// An RGBA color used to fill a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A simulated window on the canvas.
///
/// The origin fields remember where the window was created and how big it
/// was. The contract pass mutates the current position and size; the restore
/// pass walks both back to the origin values.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    origin_x: i32,      // Position the window restores to.
    origin_y: i32,      // Position the window restores to.
    origin_width: i32,  // Size the window restores to.
    origin_height: i32, // Size the window restores to.

    pub position: Vec2f, // Current top-left corner, fractional.
    pub width: i32,      // Current width in pixels.
    pub height: i32,     // Current height in pixels.
    pub color: Rgba,     // Fill color.
}

impl Window {
    /// Creates a window whose origin and current geometry start out equal.
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Rgba) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            origin_width: width,
            origin_height: height,
            position: Vec2f(x as f32, y as f32),
            width,
            height,
            color,
        }
    }

    /// Position the window was created at.
    #[inline]
    pub fn original_position(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    /// Size the window was created with.
    #[inline]
    pub fn original_size(&self) -> (i32, i32) {
        (self.origin_width, self.origin_height)
    }

    /// Center point of the current geometry.
    pub fn center(&self) -> Vec2f {
        self.position + Vec2f(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Checks whether any corner of this window's margin-expanded bounds
    /// lies within `other`'s margin-expanded bounds, edges inclusive.
    ///
    /// Only corners are sampled, so an edge crossing `other` without
    /// placing a corner inside goes undetected, and the check is not
    /// symmetric. Callers test both orders. A negative margin shrinks the
    /// tested region instead of growing it.
    pub fn overlaps(&self, other: &Window, margin: i32) -> bool {
        let (x1, y1, x2, y2) = self.expanded(margin);
        let (ox1, oy1, ox2, oy2) = other.expanded(margin);

        inside(x1, y1, ox1, oy1, ox2, oy2)
            || inside(x2, y1, ox1, oy1, ox2, oy2)
            || inside(x1, y2, ox1, oy1, ox2, oy2)
            || inside(x2, y2, ox1, oy1, ox2, oy2)
    }

    /// Margin-expanded bounds as (min x, min y, max x, max y). The
    /// fractional position is truncated toward zero first.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn expanded(&self, margin: i32) -> (i32, i32, i32, i32) {
        let x = self.position.0 as i32;
        let y = self.position.1 as i32;

        (
            x - margin,
            y - margin,
            x + self.width + margin,
            y + self.height + margin,
        )
    }
}

/// Checks if a point is within the rectangle spanned by the corners
/// (x1, y1) and (x2, y2), edges inclusive.
#[inline]
fn inside(x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
    let within_x = x >= x1 && x <= x2;
    let within_y = y >= y1 && y <= y2;
    within_x && within_y
}

/// Generates `count` randomly placed and colored windows, each at least
/// 200 pixels per side and fitting on the canvas from its origin.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn random_layout(count: usize, canvas_width: i32, canvas_height: i32) -> Vec<Window> {
    (0..count)
        .map(|_| {
            let x = random_int(canvas_width - MIN_RANDOM_SIZE);
            let y = random_int(canvas_height - MIN_RANDOM_SIZE);
            let width = MIN_RANDOM_SIZE + random_int(canvas_width - x - MIN_RANDOM_SIZE);
            let height = MIN_RANDOM_SIZE + random_int(canvas_height - y - MIN_RANDOM_SIZE);
            let color = Rgba::rgb(
                random_int(255) as u8,
                random_int(255) as u8,
                random_int(255) as u8,
            );

            Window::new(x, y, width, height, color)
        })
        .collect()
}

/// Random value in `[0, max)`, or 0 when the range is empty.
fn random_int(max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }

    random_range(0..max)
}
