use leptos::prelude::*;

use super::driver::Driver;
use crate::game::{radial_position, Portfolio, TABS};

const RADIUS: f64 = 110.0;

/// Circular tab picker. The ring turns so the active tab sits at the top,
/// and each icon counter-rotates to stay upright.
#[component]
pub fn RadialMenu() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let state = driver.state();
    let rotation = move || state.with(Portfolio::rotation);

    view! {
        <Show when=move || state.with(Portfolio::is_menu_open)>
            <div
                class="fixed inset-0 z-50 bg-black bg-opacity-60 flex items-center justify-center"
                on:click=move |_| {
                    driver.dispatch(Portfolio::close_menu);
                }
            >
                <div
                    class="relative w-72 h-72 rounded-full border-4 border-cyan-500 bg-gray-800 transition-transform duration-500"
                    style:transform=move || format!("rotate({}deg)", rotation())
                >
                    {TABS
                        .iter()
                        .enumerate()
                        .map(|(i, tab)| {
                            let (x, y) = radial_position(i, TABS.len(), RADIUS);
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|p| p.tab_index() == i) {
                                            "absolute w-14 h-14 -ml-7 -mt-7 rounded-full flex items-center justify-center text-2xl bg-cyan-500 shadow-lg"
                                        } else {
                                            "absolute w-14 h-14 -ml-7 -mt-7 rounded-full flex items-center justify-center text-2xl bg-gray-700 hover:bg-gray-600"
                                        }
                                    }
                                    style:left=format!("calc(50% + {x:.1}px)")
                                    style:top=format!("calc(50% + {y:.1}px)")
                                    style:transform=move || format!("rotate({}deg)", -rotation())
                                    title=tab.title
                                    on:click=move |_| {
                                        driver
                                            .dispatch(|p| {
                                                p.select_tab(tab.id);
                                                p.close_menu();
                                            });
                                    }
                                >
                                    {tab.icon}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div
                        class="absolute inset-0 flex items-center justify-center pointer-events-none"
                        style:transform=move || format!("rotate({}deg)", -rotation())
                    >
                        <span class="text-sm font-bold text-cyan-300">
                            {move || state.with(|p| p.current_tab().title)}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
