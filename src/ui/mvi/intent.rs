/// Marker for things a reducer can react to: key presses already mapped to
/// screen actions, and fetch completions delivered back from the runtime.
pub trait Intent: Send + 'static {}
