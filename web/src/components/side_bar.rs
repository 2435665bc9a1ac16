use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct NavItem {
    label: &'static str,
    path: &'static str,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "作品展示",
        path: "/",
    },
    NavItem {
        label: "美甲師",
        path: "/artists",
    },
    NavItem {
        label: "預約服務",
        path: "/booking",
    },
];

/// App-wide navigation: a fixed sidebar on desktop, a hamburger-toggled
/// drawer on mobile.
#[component]
pub fn SideBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let mobile_open = RwSignal::new(false);

    view! {
        <button
            class="side-bar__mobile-toggle"
            aria-label="開啟選單"
            on:click=move |_| mobile_open.set(!mobile_open.get())
        >
            {move || if mobile_open.get() { "✕" } else { "☰" }}
        </button>

        {move || {
            if mobile_open.get() {
                view! {
                    <div
                        class="side-bar__overlay"
                        on:click=move |_| mobile_open.set(false)
                    ></div>
                }.into_any()
            } else {
                view! {}.into_any()
            }
        }}

        <aside class=move || {
            if mobile_open.get() { "side-bar side-bar--open" } else { "side-bar" }
        }>
            <div class="side-bar__brand">
                <div class="side-bar__brand-icon">"💅"</div>
                <div class="side-bar__brand-text">
                    <h1>"NailStudio"</h1>
                    <p>"精品美甲平台"</p>
                </div>
            </div>

            <div class="side-bar__login">
                <A href="/login" attr:class="side-bar__login-btn">
                    "登入"
                </A>
            </div>

            <nav class="side-bar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        let is_active = move || pathname.get() == path;

                        view! {
                            <A
                                href=path
                                attr:class=move || {
                                    if is_active() {
                                        "side-bar__nav-item side-bar__nav-item--active"
                                    } else {
                                        "side-bar__nav-item"
                                    }
                                }
                            >
                                {item.label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="side-bar__footer">
                <p>"© 2024 NailStudio"</p>
            </div>
        </aside>
    }
}
