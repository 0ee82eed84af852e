/// Pointer events with element targeting.
///
/// `target` is the id of the deepest element under the pointer, or `None`
/// when the pointer is outside every projected element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// Double click with the primary button
    DoubleClick {
        target: Option<String>,
        x: i32,
        y: i32,
    },
    /// Secondary-button press that would open a context menu
    ContextMenu {
        target: Option<String>,
        x: i32,
        y: i32,
    },
    /// Start of a text selection drag
    SelectStart { target: Option<String> },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. }
            | Self::DoubleClick { target, .. }
            | Self::ContextMenu { target, .. }
            | Self::SelectStart { target } => target.as_deref(),
        }
    }

    /// Left click on `target` at the origin.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Left click that lands outside every element.
    pub fn click_outside() -> Self {
        Self::Click {
            target: None,
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    pub fn double_click(target: impl Into<String>) -> Self {
        Self::DoubleClick {
            target: Some(target.into()),
            x: 0,
            y: 0,
        }
    }

    pub fn context_menu(target: impl Into<String>, x: i32, y: i32) -> Self {
        Self::ContextMenu {
            target: Some(target.into()),
            x,
            y,
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

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The event did not concern this handler.
    #[default]
    Ignored,
    /// The event was consumed.
    Handled,
    /// The event was consumed and the host's default behavior
    /// (native context menu, text selection) must be suppressed.
    PreventDefault,
}

impl EventResult {
    pub fn is_ignored(self) -> bool {
        self == Self::Ignored
    }
}
