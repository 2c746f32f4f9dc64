mod relax;
mod window;

pub use relax::Relaxer;
pub use window::{Rgba, Window, random_layout};

/// Relaxation phase applied on each step tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,        // No pass runs; the layout holds still.
    Contracting, // Overlapping windows shrink and repel until they separate.
    Restoring,   // Windows walk back to their original position and size.
}
