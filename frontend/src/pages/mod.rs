pub mod account;
pub mod admin_attendance;
pub mod attendance;
pub mod leave_requests;
