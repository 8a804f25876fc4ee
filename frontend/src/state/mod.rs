pub mod action_guard;
pub mod actions;
pub mod notifications;
pub mod theme;
