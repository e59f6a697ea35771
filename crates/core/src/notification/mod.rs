//! Back-office notification for new registrations.
//!
//! [`Notification::render`] turns a normalized submission and its attachment
//! links into a titled list of sections, with HTML and plain-text views.
//! [`NotificationSink`] delivers it.

mod error;
mod render;
mod section;
mod sink;

pub use error::NotificationError;
pub use render::Notification;
pub use section::{Field, NOT_PROVIDED, Section, SectionBody, SectionBuilder};
pub use sink::{NotificationRoute, NotificationSink};
