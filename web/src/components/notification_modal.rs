use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Confirmation dialog shown after a successful booking submission. Closing
/// it with the primary action returns the customer to the home view; the
/// booking core itself never navigates.
#[component]
pub fn NotificationModal(
    show: RwSignal<bool>,
    title: RwSignal<String>,
    message: RwSignal<String>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let navigate = use_navigate();

    let back_to_index = {
        let navigate = navigate.clone();
        move || {
            on_close();
            navigate("/", Default::default());
        }
    };

    view! {
        {move || {
            if !show.get() {
                return view! {}.into_any();
            }

            let back_to_index = back_to_index.clone();

            view! {
                <div class="notification-modal__overlay" on:click=move |_| on_close()>
                    <div
                        class="notification-modal"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <button
                            class="notification-modal__close"
                            on:click=move |_| on_close()
                        >
                            "✕"
                        </button>
                        <div class="notification-modal__icon">"✓"</div>
                        <h3 class="notification-modal__title">{title.get()}</h3>
                        <p class="notification-modal__message">{message.get()}</p>
                        <button
                            class="notification-modal__confirm"
                            on:click=move |_| back_to_index()
                        >
                            "太棒了！"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
