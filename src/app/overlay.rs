use leptos::prelude::*;

use super::driver::Driver;
use crate::game::{Portfolio, MAX_PHASE};

const PARTICLES: usize = 20;

#[component]
pub fn SecretLevel() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let state = driver.state();
    let phase = move || state.with(|p| p.egg().phase());
    let intensity = move || f64::from(phase()) / f64::from(MAX_PHASE);

    view! {
        <Show when=move || state.with(|p| p.egg().is_active())>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center pointer-events-none"
                style:background-color=move || format!("rgba(0, 0, 0, {:.2})", 0.25 + 0.5 * intensity())
            >
                <div
                    class="pointer-events-auto bg-gray-800 p-8 rounded-2xl max-w-md text-center border-4 border-yellow-400 transition-transform duration-300"
                    style:transform=move || format!("scale({:.2})", 0.8 + 0.2 * intensity())
                    style:box-shadow=move || {
                        format!("0 0 {}px rgba(250, 204, 21, 0.8)", u32::from(phase()) * 12)
                    }
                >
                    <h3 class="text-2xl font-bold mb-4">"🎮 Secret Level Unlocked!"</h3>
                    <p class="mb-4">
                        "You've discovered the hidden easter egg! Here's a special achievement."
                    </p>
                    <div class="flex justify-center gap-1 text-2xl mb-6">
                        {move || "⭐".repeat(usize::from(phase()))}
                    </div>
                    <button
                        class="w-full py-2 bg-cyan-500 hover:bg-cyan-600 rounded-lg font-bold"
                        on:click=move |_| {
                            driver.dispatch(Portfolio::close_egg);
                        }
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Ambient floating dots. Placement is derived from the index so server and
/// client render the same markup.
#[component]
pub fn Particles() -> impl IntoView {
    let state = expect_context::<Driver>().state();
    let opacity = move || {
        if state.with(|p| p.egg().is_active()) {
            "opacity-60"
        } else {
            "opacity-20"
        }
    };

    view! {
        <div class="fixed inset-0 pointer-events-none">
            {(0..PARTICLES)
                .map(|i| {
                    let left = (i as f64 * 61.8) % 100.0;
                    let top = (i as f64 * 38.2 + 17.0) % 100.0;
                    let delay = (i % 7) as f64 * 0.3;
                    view! {
                        <div
                            class=move || {
                                format!("absolute w-2 h-2 bg-cyan-500 rounded-full animate-pulse {}", opacity())
                            }
                            style:left=format!("{left:.1}%")
                            style:top=format!("{top:.1}%")
                            style:animation-delay=format!("{delay:.1}s")
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
