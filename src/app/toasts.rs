use leptos::prelude::*;

use super::driver::Driver;

#[component]
pub fn Toasts() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let state = driver.state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || state.with(|p| p.notifications().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <button
                            class=format!(
                                "text-left px-4 py-3 rounded-lg bg-gray-800 border-l-4 shadow-lg animate-bounce {}",
                                n.kind.class(),
                            )
                            title="Dismiss"
                            on:click=move |_| {
                                driver.dispatch(|p| p.dismiss(id));
                            }
                        >
                            {n.message}
                        </button>
                    }
                }
            />
        </div>
    }
}
