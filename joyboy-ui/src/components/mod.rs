//! Menu components and the primitives they render

pub mod icons;
pub mod menu;
pub mod pressable;

pub use icons::Icon;
pub use menu::{Menu, MenuDivider, MenuItem, MENU_ITEM_ICON_SIZE};
pub use pressable::Pressable;
