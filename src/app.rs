mod driver;
mod hud;
mod loading;
mod overlay;
mod portfolio;
mod radial_menu;
mod sections;
mod toasts;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use portfolio::GamePortfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/game-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Player One - {title}") />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=GamePortfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Game Over" />
        <main class="h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-5xl font-bold text-red-500">"GAME OVER"</h1>
            <p class="text-gray-400">"This level does not exist."</p>
            <A href="/" attr:class="px-6 py-3 bg-cyan-500 hover:bg-cyan-600 rounded-lg font-bold">
                "CONTINUE?"
            </A>
        </main>
    }
}
