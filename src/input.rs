// Discrete input events, already in device coordinates.
// The window layer produces these; scenes consume them one at a time.

use crate::types::Point;

/// The keys any demo reacts to. Letters are case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `+` or `=`
    Plus,
    Minus,
    LeftBracket,
    RightBracket,
    Up,
    Down,
    Left,
    Right,
    C,
    R,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Left button went down at this pixel.
    Click(Point),
    /// Pointer moved while the left button is held.
    Drag(Point),
    Key(Key),
}

/// What a scene wants after handling one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Redraw,
    Quit,
}
