/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button press
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse button release event
    Release {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

/// Discriminant used to subscribe listeners to one kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Release,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::Release { .. } => EventKind::Release,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } | Event::Release { target, .. } => target.as_deref(),
        }
    }

    /// Left-button release on `target`, the common case for tests and demos.
    pub fn release(target: impl Into<String>) -> Self {
        Event::Release {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Translate a crossterm mouse event. The caller supplies the hit-tested
    /// target. Returns None for moves, drags and scrolls.
    pub fn from_mouse(event: crossterm::event::MouseEvent, target: Option<String>) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(btn) => Some(Event::Click {
                target,
                x,
                y,
                button: btn.into(),
            }),
            MouseEventKind::Up(btn) => Some(Event::Release {
                target,
                x,
                y,
                button: btn.into(),
            }),
            _ => None,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
