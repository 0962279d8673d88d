/// Marker trait for component state.
///
/// States are plain values: cloned to derive the next state, compared to
/// detect changes, and complete enough to render from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
