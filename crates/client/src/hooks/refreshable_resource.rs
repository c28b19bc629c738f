use std::future::Future;

use dioxus::prelude::*;

/// A boolean flip-flop whose only job is to re-run a resource.
#[derive(Clone, Copy, PartialEq)]
pub struct RefreshFlag(Signal<bool>);

impl RefreshFlag {
    /// Invert the flag, re-running every resource that tracks it.
    pub fn flip(self) {
        let mut flag = self.0;
        let value = !*flag.peek();
        flag.set(value);
    }

    pub fn set(self, value: bool) {
        let mut flag = self.0;
        flag.set(value);
    }

    fn track(self) -> bool {
        *self.0.read()
    }
}

pub fn use_refresh_flag() -> RefreshFlag {
    RefreshFlag(use_signal(|| false))
}

/// A hook that wraps `use_resource` and re-runs it whenever `flag` is written.
///
/// ### Example
///
/// ```rust,ignore
/// let flag = use_refresh_flag();
/// let group = use_refreshable_resource(flag, move || async move { fetch().await });
///
/// rsx! {
///     // Pressing this button will cause the fetch to run again.
///     button { onclick: move |_| flag.flip(), "Refresh data" }
/// }
/// ```
pub fn use_refreshable_resource<T, F>(
    flag: RefreshFlag,
    mut future: impl FnMut() -> F + 'static,
) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    use_resource(move || {
        flag.track();
        future()
    })
}
