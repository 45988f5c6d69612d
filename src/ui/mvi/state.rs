/// Everything a screen needs to render, apart from data owned by services.
///
/// `Default` is the screen's initial state and lets the dispatcher move the
/// value out with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
