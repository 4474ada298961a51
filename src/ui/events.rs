use crossterm::event::Event;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(Event),

    /// The boot reveal finished its glitch transition
    BootComplete,

    /// The simulated contact transmission finished
    TransmissionComplete,

    /// Request to quit the application
    Quit,
}

/// Top-level screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Boot,
    Main,
}

/// Which part of the main screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The nav bar, with the hovered label index
    Nav(usize),
    /// The current page
    Page,
}
