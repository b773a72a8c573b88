//! Notification module
//!
//! Transient messages shown in the top-right corner, such as refresh results
//! and config warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
