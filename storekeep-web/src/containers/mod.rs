//! Page chrome: layout shell, top navbar, and sidebar.

pub mod layout;
pub mod navbar;
pub mod sidebar;
