/// Marker trait for intent objects.
///
/// Intents are either user actions (a key moving the dropdown highlight)
/// or system events (a lookup result arriving from the worker).
pub trait Intent: Send + 'static {}
