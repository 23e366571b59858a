//! Controller error types

/// Errors raised while building or driving a UI
///
/// Lookups that can legitimately miss (focus search, unknown id at render
/// time) return `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// Widget arena is at capacity
    WidgetsFull,
    /// Scene list is at capacity
    ScenesFull,
    /// Scene already holds its maximum number of widgets
    SceneFull,
    /// Scene already has its maximum number of parents
    ParentsFull,
    /// Widget id does not exist (or is not part of the scene)
    UnknownWidget,
    /// Scene id does not exist
    UnknownScene,
}
