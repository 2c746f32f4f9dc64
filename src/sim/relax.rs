use crate::sim::window::Window;
use crate::vec2f::Vec2f;

/// Distance under which a restored axis is considered home.
const RESTORE_EPSILON: f32 = 0.1;

/// Applies the relaxation passes to a window collection.
pub struct Relaxer {
    margin: i32,        // Margin applied to every pairwise overlap test.
    floor: i32,         // Smallest width/height a contracting window keeps.
    canvas_width: i32,  // Canvas extent windows are clamped to.
    canvas_height: i32, // Canvas extent windows are clamped to.
}

impl Relaxer {
    /// Creates a relaxer for the given margin, size floor and canvas extent.
    pub fn new(margin: i32, floor: i32, canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            margin,
            floor,
            canvas_width,
            canvas_height,
        }
    }

    /// Runs one contraction pass. Every window overlapping a neighbor
    /// shrinks by one pixel per axis, down to the floor, and receives one
    /// unit of force away from each overlapping neighbor's center; the
    /// summed force is applied to its position, then the window is clamped
    /// back onto the canvas.
    ///
    /// The pass mutates in place, so windows later in the slice react to
    /// positions already updated earlier in the same pass.
    pub fn contract_step(&self, windows: &mut [Window]) {
        for i in 0..windows.len() {
            let mut overlapping = false;
            let mut force = Vec2f::ZERO;
            let center = windows[i].center();

            for j in 0..windows.len() {
                if i == j {
                    continue;
                }

                let (window, other) = (&windows[i], &windows[j]);
                if window.overlaps(other, self.margin) || other.overlaps(window, self.margin) {
                    overlapping = true;

                    // One unit of repulsion along the line between centers.
                    let toward = center - other.center();
                    let angle = toward.1.atan2(toward.0);
                    force += Vec2f(angle.cos(), angle.sin());
                }
            }

            let window = &mut windows[i];
            if overlapping {
                if window.width > self.floor {
                    window.width -= 1;
                }
                if window.height > self.floor {
                    window.height -= 1;
                }
            }

            window.position += force;
            self.clamp_bounds(window);
        }
    }

    /// Runs one restore pass. Positions walk one unit per axis back toward
    /// their origin, snapping once within a unit, and sizes grow one pixel
    /// per axis until they match the origin again. Settled windows are left
    /// untouched.
    pub fn restore_step(&self, windows: &mut [Window]) {
        for window in windows.iter_mut() {
            let (origin_x, origin_y) = window.original_position();
            window.position.0 = step_toward(window.position.0, origin_x as f32);
            window.position.1 = step_toward(window.position.1, origin_y as f32);

            let (origin_width, origin_height) = window.original_size();
            if window.width < origin_width {
                window.width += 1;
            }
            if window.height < origin_height {
                window.height += 1;
            }
        }
    }

    /// Checks whether any pair of windows overlaps, testing the corner
    /// sample in both orders.
    pub fn any_overlap(&self, windows: &[Window]) -> bool {
        for i in 0..windows.len() {
            for j in i + 1..windows.len() {
                let (a, b) = (&windows[i], &windows[j]);
                if a.overlaps(b, self.margin) || b.overlaps(a, self.margin) {
                    return true;
                }
            }
        }

        false
    }

    /// Moves the window back onto the canvas, position only; the low edges
    /// win when the window is larger than the canvas.
    fn clamp_bounds(&self, window: &mut Window) {
        if window.position.0 < 0.0 {
            window.position.0 = 0.0;
        }
        if window.position.1 < 0.0 {
            window.position.1 = 0.0;
        }

        if window.position.0 + window.width as f32 > self.canvas_width as f32 {
            window.position.0 = (self.canvas_width - window.width) as f32;
        }
        if window.position.1 + window.height as f32 > self.canvas_height as f32 {
            window.position.1 = (self.canvas_height - window.height) as f32;
        }
    }
}

/// Moves `current` one unit toward `target`, snapping to it once the gap is
/// within a single unit. Values already within epsilon are left untouched.
fn step_toward(current: f32, target: f32) -> f32 {
    let gap = (current - target).abs();
    if gap <= RESTORE_EPSILON {
        return current;
    }

    if gap <= 1.0 {
        target
    } else if current > target {
        current - 1.0
    } else {
        current + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::window::Rgba;

    const GRAY: Rgba = Rgba::rgb(128, 128, 128);

    fn relaxer() -> Relaxer {
        Relaxer::new(10, 20, 1000, 1000)
    }

    fn window(x: i32, y: i32, width: i32, height: i32) -> Window {
        Window::new(x, y, width, height, GRAY)
    }

    fn center_distance(a: &Window, b: &Window) -> f32 {
        let d = b.center() - a.center();
        (d.0 * d.0 + d.1 * d.1).sqrt()
    }

    #[test]
    fn non_overlapping_windows_hold_still() {
        let relaxer = relaxer();
        let mut windows = vec![window(0, 0, 50, 50), window(500, 500, 50, 50)];
        let before = windows.clone();

        for _ in 0..10 {
            relaxer.contract_step(&mut windows);
        }

        assert_eq!(windows, before);
    }

    #[test]
    fn contraction_shrinks_to_the_floor_when_boxed_in() {
        // A 50x50 canvas cannot hold two floor-sized windows further apart
        // than the margin, so the pair overlaps forever and both shrink all
        // the way down.
        let relaxer = Relaxer::new(10, 20, 50, 50);
        let mut windows = vec![window(0, 0, 50, 50), window(0, 0, 50, 50)];

        for _ in 0..60 {
            relaxer.contract_step(&mut windows);

            for w in &windows {
                assert!(w.width >= 20 && w.height >= 20);
                assert!(w.position.0 >= 0.0 && w.position.1 >= 0.0);
                assert!(w.position.0 + w.width as f32 <= 50.0);
                assert!(w.position.1 + w.height as f32 <= 50.0);
            }
        }

        for w in &windows {
            assert_eq!((w.width, w.height), (20, 20));
        }

        // Further passes keep pushing but the floor holds.
        for _ in 0..20 {
            relaxer.contract_step(&mut windows);
        }
        assert_eq!((windows[0].width, windows[0].height), (20, 20));
        assert_eq!((windows[1].width, windows[1].height), (20, 20));
    }

    #[test]
    fn contract_pushes_windows_back_onto_the_canvas() {
        let relaxer = relaxer();
        let mut windows = vec![window(950, 500, 100, 100), window(-25, -40, 100, 100)];

        relaxer.contract_step(&mut windows);

        assert_eq!(windows[0].position, Vec2f(900.0, 500.0));
        assert_eq!(windows[1].position, Vec2f(0.0, 0.0));
        // Clamping never touches sizes.
        assert_eq!((windows[0].width, windows[0].height), (100, 100));
        assert_eq!((windows[1].width, windows[1].height), (100, 100));
    }

    #[test]
    fn second_window_reacts_to_the_first_within_one_pass() {
        let relaxer = relaxer();
        let mut windows = vec![window(0, 0, 100, 100), window(0, 0, 100, 100)];

        relaxer.contract_step(&mut windows);

        // The first window sees two identical centers, a zero angle, and
        // moves one unit along +x.
        assert_eq!(windows[0].position, Vec2f(1.0, 0.0));
        assert_eq!((windows[0].width, windows[0].height), (99, 99));

        // The second window reacts to the first's already-applied push: the
        // first's center now sits right of and above its own, so it is
        // forced left (clamped at the wall) and down. A pass working from a
        // snapshot would have moved it along +x instead.
        assert_eq!(windows[1].position.0, 0.0);
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((windows[1].position.1 - expected).abs() < 1e-3);
        assert_eq!((windows[1].width, windows[1].height), (99, 99));
    }

    #[test]
    fn restore_converges_to_the_origin_and_stays() {
        let relaxer = relaxer();
        let mut windows = vec![window(100, 100, 300, 300)];
        windows[0].position = Vec2f(40.5, 160.25);
        windows[0].width = 120;
        windows[0].height = 250;

        for _ in 0..180 {
            relaxer.restore_step(&mut windows);
        }

        assert_eq!(windows[0].position, Vec2f(100.0, 100.0));
        assert_eq!((windows[0].width, windows[0].height), (300, 300));

        // Another pass is a no-op once everything is home.
        let settled = windows.clone();
        relaxer.restore_step(&mut windows);
        assert_eq!(windows, settled);
    }

    #[test]
    fn any_overlap_tests_pairs_in_both_orders() {
        let relaxer = relaxer();
        let big = window(0, 0, 300, 300);
        let inner = window(100, 100, 50, 50);

        // Containment is one-way for the corner sample; either slice order
        // must still report the pair.
        assert!(relaxer.any_overlap(&[big.clone(), inner.clone()]));
        assert!(relaxer.any_overlap(&[inner, big]));

        assert!(!relaxer.any_overlap(&[window(0, 0, 50, 50), window(500, 500, 50, 50)]));
        assert!(!relaxer.any_overlap(&[]));
    }

    #[test]
    fn contract_separates_an_overlapping_pair() {
        let relaxer = relaxer();
        let mut windows = vec![window(100, 100, 300, 300), window(300, 200, 200, 300)];

        assert!(relaxer.any_overlap(&windows));
        let initial_distance = center_distance(&windows[0], &windows[1]);
        let mut last_distance = initial_distance;

        for _ in 0..200 {
            let was_overlapping = relaxer.any_overlap(&windows);
            relaxer.contract_step(&mut windows);

            // While the pair overlaps, every pass drives the centers apart.
            let distance = center_distance(&windows[0], &windows[1]);
            if was_overlapping {
                assert!(distance >= last_distance - 1e-3);
            }
            last_distance = distance;

            for w in &windows {
                assert!(w.position.0 >= 0.0 && w.position.1 >= 0.0);
                assert!(w.position.0 + w.width as f32 <= 1000.0);
                assert!(w.position.1 + w.height as f32 <= 1000.0);
                assert!(w.width >= 20 && w.height >= 20);
            }
        }

        assert!(!relaxer.any_overlap(&windows));
        assert!(last_distance > initial_distance);
        assert!(windows[0].width < 300 && windows[1].width < 200);
    }
}
