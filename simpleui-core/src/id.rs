//! Widget, scene and action handles
//!
//! Ids are arena indices handed out by `Ui` in insertion order, so the same
//! build sequence always yields the same ids.

/// Handle to a widget stored in a `Ui`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(pub(crate) u16);

impl WidgetId {
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a scene stored in a `Ui`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneId(pub(crate) u8);

impl SceneId {
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Application-defined action reported when an app widget is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActionId(pub u16);
