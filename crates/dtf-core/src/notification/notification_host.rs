use crate::notification::{Toast, Toaster};

/// Wraps content and mounts a toast queue next to it.
///
/// Anything holding a [`Toaster`] obtained from the host can push
/// notifications; the owner of the host drains and renders them.
#[derive(Debug)]
pub struct NotificationHost<C> {
    content: C,
    toaster: Toaster,
}

impl<C> NotificationHost<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            toaster: Toaster::new(),
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn toaster(&self) -> Toaster {
        self.toaster.clone()
    }

    pub fn drain_toasts(&self) -> Vec<Toast> {
        self.toaster.drain()
    }

    pub fn into_inner(self) -> C {
        self.content
    }
}
