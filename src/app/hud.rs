use leptos::prelude::*;

use super::driver::{AudioControl, Driver};
use crate::content::Profile;
use crate::game::{Portfolio, TABS};

#[component]
pub fn Hud(profile: &'static Profile) -> impl IntoView {
    let driver = expect_context::<Driver>();
    let audio = expect_context::<AudioControl>();
    let state = driver.state();

    view! {
        <nav class="fixed top-0 w-full bg-gray-800 bg-opacity-90 backdrop-blur-sm z-40">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16 gap-4">
                    // five quick taps here unlock the secret level
                    <button
                        class="flex-shrink-0 font-bold text-xl text-cyan-400 select-none"
                        on:click=move |_| {
                            driver.dispatch(Portfolio::tap_hotspot);
                        }
                    >
                        "PLAYER ONE"
                    </button>
                    <div class="hidden md:flex space-x-2">
                        {TABS
                            .iter()
                            .enumerate()
                            .map(|(i, tab)| {
                                let is_active = move || state.with(|p| p.tab_index() == i);
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "flex items-center space-x-2 px-3 py-2 rounded-lg transition-all bg-cyan-500 text-white"
                                            } else {
                                                "flex items-center space-x-2 px-3 py-2 rounded-lg transition-all hover:bg-gray-700 text-gray-300"
                                            }
                                        }
                                        on:click=move |_| {
                                            driver.dispatch(|p| p.select_tab(tab.id));
                                        }
                                    >
                                        <span>{tab.icon}</span>
                                        <span>{format!("LVL {} - {}", i + 1, tab.title)}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <XpBar profile />
                    <div class="flex items-center gap-2">
                        <button
                            class="p-2 rounded-lg hover:bg-gray-700 text-2xl"
                            aria-label="Toggle music"
                            on:click=move |_| {
                                if let Some(cmd) = driver.dispatch(Portfolio::toggle_music) {
                                    audio.run(cmd);
                                }
                            }
                        >
                            {move || if state.with(|p| p.music().is_enabled()) { "🔊" } else { "🔇" }}
                        </button>
                        <button
                            class="p-2 rounded-lg hover:bg-gray-700 text-2xl"
                            aria-label="Open menu"
                            on:click=move |_| {
                                driver.dispatch(Portfolio::toggle_menu);
                            }
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn XpBar(profile: &'static Profile) -> impl IntoView {
    let state = expect_context::<Driver>().state();
    let level = move || state.with(|p| p.experience().level());
    let percent = move || state.with(|p| p.experience().percent());

    view! {
        <div class="flex-1 max-w-xs">
            <div class="flex justify-between text-xs text-gray-400 mb-1">
                <span>{profile.class.clone()}</span>
                <span class="text-yellow-400 font-bold">{move || format!("LVL {}", level())}</span>
            </div>
            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-yellow-400 to-orange-500 transition-all duration-500"
                    style:width=move || format!("{}%", percent())
                />
            </div>
        </div>
    }
}
