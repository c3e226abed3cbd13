pub mod attachment;
pub mod complaint;
pub mod notification;
pub mod user;

pub use attachment::AttachmentWithOwners;
pub use complaint::{ComplaintChanges, ComplaintDetail, ComplaintDetailRow, ComplaintOwners};
pub use notification::{Notification, NotificationComplaint, NotificationRow};
pub use user::UserAuthRow;
