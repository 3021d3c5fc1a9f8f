//! Component trait

/// Marker trait for components
///
/// Components are plain data records. Each implementing type is its own
/// component kind, so the store never has to inspect a value at runtime to
/// learn what it is.
pub trait Component: 'static {}
