use clap::Parser;

/// An expose effect demo: press `-` to spread overlapping windows apart and
/// `=` to bring them back to where they started.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// Number of randomly placed windows.
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1000)]
    pub canvas_width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1000)]
    pub canvas_height: u32,

    /// Margin around windows in the overlap test; negative values shrink
    /// the tested region.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub margin: i32,

    /// Relaxation passes applied per step tick.
    #[arg(long, default_value_t = 8)]
    pub sub_steps: u32,

    /// Smallest width and height a window contracts down to.
    #[arg(long, default_value_t = 20)]
    pub floor: i32,

    /// Step and render cadence in ticks per second.
    #[arg(long, default_value_t = 30.0)]
    pub tick_rate: f32,

    /// Force SDL's software renderer.
    #[arg(long)]
    pub software: bool,
}
