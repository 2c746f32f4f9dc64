mod input;

use std::time::Duration;

use sdl3::Sdl;
use sdl3::pixels::Color;
use sdl3::rect::Rect;
use sdl3::render::Canvas;
use sdl3::video::Window as SdlWindow;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sim::{Mode, Relaxer, Rgba, Window, random_layout};
use crate::ticker::Ticker;

use input::Input;

/// Core of the demo application.
///
/// Owns the SDL context, the simulated windows and the active relaxation
/// mode. Stepping and rendering both happen on the main loop's thread, on
/// independent schedules.
pub struct AppCore {
    windows: Vec<Window>,      // The simulated windows, mutated between ticks.
    relaxer: Relaxer,          // Relaxation passes configured from the CLI.
    mode: Mode,                // Relaxation phase currently active.
    settled: bool,             // Whether the contracting layout separated.
    sub_steps: u32,            // Passes applied per due step tick.
    tick_rate: f32,            // Step and render cadence in Hz.
    sdl: Sdl,                  // SDL context.
    canvas: Canvas<SdlWindow>, // Canvas to draw on.
}

impl AppCore {
    /// Creates the application core by initializing the SDL context, opening
    /// a window sized to the canvas and generating the starting layout.
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(config: &Config) -> Result<Self> {
        info!("initializing sdl");
        let sdl = sdl3::init().map_err(AppError::Sdl)?;
        let video = sdl.video().map_err(AppError::Sdl)?;

        if config.software {
            sdl3::hint::set(sdl3::hint::names::RENDER_DRIVER, "software");
        }

        // Ensure no VSYNC; the loop schedules its own render cadence.
        sdl3::hint::set(sdl3::hint::names::RENDER_VSYNC, "0");

        info!("creating window");
        let window = video
            .window("expose", config.canvas_width, config.canvas_height)
            .resizable()
            .build()
            .map_err(|why| AppError::Window(why.to_string()))?;

        let canvas = window.into_canvas();

        let canvas_width = config.canvas_width as i32;
        let canvas_height = config.canvas_height as i32;

        Ok(Self {
            windows: random_layout(config.count, canvas_width, canvas_height),
            relaxer: Relaxer::new(config.margin, config.floor, canvas_width, canvas_height),
            mode: Mode::Idle,
            settled: false,
            sub_steps: config.sub_steps,
            tick_rate: config.tick_rate,
            sdl,
            canvas,
        })
    }

    /// Runs the main loop. Handles input events, advances the active
    /// relaxation mode on step ticks and redraws on render ticks, until the
    /// user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut event_pump = self.sdl.event_pump().map_err(AppError::Sdl)?;

        let mut step = Ticker::new(self.tick_rate);
        let mut frame = Ticker::new(self.tick_rate);

        'main_loop: loop {
            for event in input::poll(&mut event_pump) {
                match event {
                    Input::Quit => break 'main_loop,
                    Input::Minimize => {
                        info!("minimize");
                        self.mode = Mode::Contracting;
                        self.settled = false;
                    }
                    Input::Maximize => {
                        info!("maximize");
                        self.mode = Mode::Restoring;
                    }
                }
            }

            if step.is_due() {
                self.advance();
            }

            if frame.is_due() {
                self.render();
            }

            std::thread::sleep(Duration::from_millis(1));
        }

        Ok(())
    }

    /// Applies the active mode's relaxation pass `sub_steps` times.
    fn advance(&mut self) {
        match self.mode {
            Mode::Idle => {}
            Mode::Contracting => {
                for _ in 0..self.sub_steps {
                    self.relaxer.contract_step(&mut self.windows);
                }

                if !self.settled && !self.relaxer.any_overlap(&self.windows) {
                    debug!("layout settled, no overlaps remain");
                    self.settled = true;
                }
            }
            Mode::Restoring => {
                for _ in 0..self.sub_steps {
                    self.relaxer.restore_step(&mut self.windows);
                }
            }
        }
    }

    /// Clears the canvas and draws every window as a filled rectangle.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();

        for window in &self.windows {
            self.canvas.set_draw_color(Color::from(window.color));
            let _ = self.canvas.fill_rect(Rect::new(
                window.position.0 as i32, // x position
                window.position.1 as i32, // y position
                window.width as u32,      // width
                window.height as u32,     // height
            ));
        }

        self.canvas.present();
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Color {
        Color::RGBA(color.r, color.g, color.b, color.a)
    }
}
