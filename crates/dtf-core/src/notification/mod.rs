pub(crate) mod notification_host;
pub(crate) mod toast;
pub(crate) mod toaster;

pub use notification_host::NotificationHost;
pub use toast::{Toast, ToastKind};
pub use toaster::Toaster;
