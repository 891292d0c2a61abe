use leptos::prelude::*;

use super::driver::Driver;
use crate::game::Portfolio;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let state = driver.state();
    let progress = move || state.with(|p| p.loading().progress());

    view! {
        <div class="h-screen bg-gray-900 flex flex-col items-center justify-center text-white px-4">
            <div class="text-4xl mb-8 animate-pulse font-bold text-cyan-400">"LOADING..."</div>
            <div class="w-full max-w-md h-4 mb-8 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-cyan-500 transition-all duration-200"
                    style:width=move || format!("{}%", progress())
                />
            </div>
            <button
                on:click=move |_| {
                    driver.dispatch(Portfolio::start);
                }
                class="px-8 py-4 bg-cyan-500 hover:bg-cyan-600 rounded-lg text-xl font-bold transform hover:scale-105 transition-all animate-bounce"
            >
                "PRESS START"
            </button>
            <div class="mt-4 text-sm text-gray-400">"Use ↑↑↓↓←→←→BA for a surprise"</div>
        </div>
    }
}
