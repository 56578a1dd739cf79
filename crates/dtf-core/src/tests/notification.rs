use crate::notification::{NotificationHost, ToastKind, Toaster};

use googletest::prelude::*;

#[test]
fn given_host_when_content_accessed_then_wrapped_value_returned() {
    let mut host = NotificationHost::new(vec![1, 2]);

    host.content_mut().push(3);

    assert_eq!(host.content(), &vec![1, 2, 3]);
    assert_that!(host.into_inner(), len(eq(3)));
}

#[test]
fn given_cloned_toaster_when_push_then_host_sees_toast() {
    let host = NotificationHost::new(());
    let toaster = host.toaster();

    toaster.success("Сохранено");
    toaster.warning("Токен не задан");

    let toasts = host.drain_toasts();
    assert_that!(toasts, len(eq(2)));
    assert_that!(toasts[0].kind, eq(ToastKind::Success));
    assert_that!(toasts[1].message.as_str(), eq("Токен не задан"));
}

#[test]
fn given_drained_queue_when_drain_again_then_empty() {
    let toaster = Toaster::new();
    toaster.info("one");

    assert_that!(toaster.pending(), eq(1));
    assert_that!(toaster.drain(), len(eq(1)));
    assert_that!(toaster.drain(), is_empty());
    assert_that!(toaster.pending(), eq(0));
}

#[test]
fn given_toast_when_display_then_kind_prefix() {
    let toaster = Toaster::new();
    toaster.error("boom");

    let toast = toaster.drain().remove(0);

    assert_that!(toast.to_string(), eq("[error] boom"));
}
