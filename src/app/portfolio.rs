use leptos::{either::Either, ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::driver::{AudioControl, Driver};
use super::hud::Hud;
use super::loading::LoadingScreen;
use super::overlay::{Particles, SecretLevel};
use super::radial_menu::RadialMenu;
use super::sections::TabContent;
use super::toasts::Toasts;
use crate::content::{self, ContentError, Profile};
use crate::game::{Point, Portfolio};

#[component]
pub fn GamePortfolio() -> impl IntoView {
    match content::profile() {
        Ok(profile) => Either::Left(view! { <Game profile /> }),
        Err(err) => Either::Right(view! { <ContentUnavailable err /> }),
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Save File Corrupted" />
        <main class="h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-3xl font-bold text-red-500">"SAVE FILE CORRUPTED"</h1>
            <pre class="text-sm text-gray-400 whitespace-pre-wrap">{err.to_string()}</pre>
        </main>
    }
}

#[component]
fn Game(profile: &'static Profile) -> impl IntoView {
    let driver = Driver::new(Portfolio::new(profile.tuning));
    let audio = AudioControl::new(NodeRef::<html::Audio>::new(), driver);
    provide_context(driver);
    provide_context(audio);
    let state = driver.state();

    // timers only ever run in the browser
    Effect::watch(|| (), move |_, _, _| driver.mount(), true);
    on_cleanup(move || driver.teardown());

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let key = ev.key();
        driver.dispatch(|p| p.key_down(&key));
    });
    let _ = use_event_listener(use_window(), ev::click, move |_| {
        if let Some(cmd) = driver.dispatch(Portfolio::page_clicked).flatten() {
            audio.run(cmd);
        }
    });

    view! {
        <Title text=profile.name.clone() />
        <audio node_ref=audio.node() src=profile.music.clone() preload="auto" />
        <Show
            when=move || state.with(|p| p.loading().is_active())
            fallback=move || view! { <World profile /> }
        >
            <LoadingScreen />
        </Show>
    }
}

#[component]
fn World(profile: &'static Profile) -> impl IntoView {
    let driver = expect_context::<Driver>();

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let at = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            driver.dispatch(|p| p.touch_start(at));
        }
    };
    let on_touch_end = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            let at = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            driver.dispatch(|p| p.touch_end(at));
        }
    };

    view! {
        <div
            class="min-h-screen bg-gray-900 text-white overflow-x-hidden"
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            <Hud profile />
            <RadialMenu />
            <main class="pt-24 px-4 pb-16">
                <div class="max-w-7xl mx-auto">
                    <Hero profile />
                    <TabContent profile />
                </div>
            </main>
            <footer class="text-center text-xs text-gray-500 pb-6">
                "Last saved " {env!("BUILD_TIME")}
            </footer>
            <Toasts />
            <SecretLevel />
            <Particles />
        </div>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="relative h-72 overflow-hidden rounded-2xl mb-8">
            <div class="absolute inset-0 bg-gradient-to-r from-purple-900 to-cyan-900 opacity-75" />
            <div class="relative h-full flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-4 animate-pulse">
                        "Welcome Player"
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-300">{profile.headline.clone()}</p>
                </div>
            </div>
        </div>
    }
}
