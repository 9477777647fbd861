/// Fixed-size bitset of pattern ids
pub mod bitset;
/// Attempt state machine, retry policy and entry points
pub mod executor;
/// Support-counting constraint propagation
pub mod propagation;
/// Rendering of collapsed waves
pub mod render;
/// Minimum-entropy observation and weighted pattern sampling
pub mod selection;
/// Per-attempt search state
pub mod wave;
