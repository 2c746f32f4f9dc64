use sdl3::EventPump;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;

/// Represents the input from the user.
pub(crate) enum Input {
    Quit,     // The user has requested to quit the application.
    Minimize, // Start contracting the layout.
    Maximize, // Start restoring the layout.
}

/// Drains the pending SDL events and maps them to inputs.
///
/// The window close button and Escape both quit; `-` starts the minimize
/// effect and `=` the maximize effect.
pub(crate) fn poll(pump: &mut EventPump) -> Vec<Input> {
    let mut events = Vec::new();

    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                return vec![Input::Quit];
            }

            Event::KeyDown {
                keycode: Some(Keycode::Minus),
                repeat: false,
                ..
            } => events.push(Input::Minimize),

            Event::KeyDown {
                keycode: Some(Keycode::Equals),
                repeat: false,
                ..
            } => events.push(Input::Maximize),

            _ => (),
        }
    }

    events
}
