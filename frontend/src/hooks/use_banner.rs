use calendar_domain::Banner;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseBannerResult {
    pub banner: Option<Banner>,
    pub show: Callback<Banner>,
    pub dismiss: Callback<()>,
}

/// A single auto-dismissing message banner.
///
/// Showing a new banner replaces the current one; only the timer of the
/// newest banner may hide it.
#[hook]
pub fn use_banner(timeout_ms: u32) -> UseBannerResult {
    let banner = use_state(|| Option::<Banner>::None);
    let generation = use_mut_ref(|| 0u64);

    let show = {
        let banner = banner.clone();
        let generation = generation.clone();

        use_callback(timeout_ms, move |next: Banner, timeout_ms| {
            let shown = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            banner.set(Some(next));

            let banner = banner.clone();
            let generation = generation.clone();
            let timeout_ms = *timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                if *generation.borrow() == shown {
                    banner.set(None);
                }
            });
        })
    };

    let dismiss = {
        let banner = banner.clone();
        use_callback((), move |_: (), _| banner.set(None))
    };

    UseBannerResult {
        banner: (*banner).clone(),
        show,
        dismiss,
    }
}
