use leptos::{either::EitherOf6, prelude::*};

use super::driver::Driver;
use crate::content::Profile;
use crate::game::{SwipeDirection, TabKind};

#[component]
pub fn TabContent(profile: &'static Profile) -> impl IntoView {
    let state = expect_context::<Driver>().state();
    let tab = move || state.with(|p| p.current_tab());
    let enter_class = move || {
        let slide = match state.with(|p| p.swipe_hint()) {
            Some(SwipeDirection::Left) => "translate-x-4 opacity-80",
            Some(SwipeDirection::Right) => "-translate-x-4 opacity-80",
            Some(SwipeDirection::Up) => "-translate-y-2 opacity-90",
            Some(SwipeDirection::Down) => "translate-y-2 opacity-90",
            None => "translate-x-0 opacity-100",
        };
        format!("mb-16 p-6 bg-gray-800 rounded-2xl transform transition-all duration-300 {slide}")
    };

    view! {
        <section id=move || tab().id class=enter_class>
            <h2 class="text-3xl font-bold mb-6 flex items-center space-x-3">
                <span>{move || tab().icon}</span>
                <span>{move || tab().title}</span>
                <span class="text-sm text-cyan-400">
                    {move || format!("LVL {}", state.with(|p| p.tab_index()) + 1)}
                </span>
            </h2>
            {move || match tab().kind {
                TabKind::Overview => EitherOf6::A(view! { <Overview profile /> }),
                TabKind::Skills => EitherOf6::B(view! { <Skills profile /> }),
                TabKind::Projects => EitherOf6::C(view! { <Projects profile /> }),
                TabKind::Experience => EitherOf6::D(view! { <Quests profile /> }),
                TabKind::Certifications => EitherOf6::E(view! { <Certifications profile /> }),
                TabKind::Contact => EitherOf6::F(view! { <Contact profile /> }),
            }}
        </section>
    }
}

#[component]
fn Overview(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-8 items-center md:items-start">
            <img
                src=profile.avatar.clone()
                alt=profile.name.clone()
                class="w-40 h-40 rounded-full border-4 border-cyan-500 object-cover"
            />
            <div class="flex-1">
                <h3 class="text-2xl font-bold">{profile.name.clone()}</h3>
                <p class="text-cyan-400 mb-4">{profile.class.clone()}</p>
                {profile
                    .bio
                    .iter()
                    .map(|p| view! { <p class="text-base mb-3 leading-relaxed text-gray-300">{p.clone()}</p> })
                    .collect_view()}
            </div>
        </div>
        <h3 class="text-xl font-bold mt-8 mb-4">"🏆 Achievements Unlocked"</h3>
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {profile
                .achievements
                .iter()
                .map(|a| {
                    view! {
                        <div class="p-4 bg-gray-700 rounded-lg border-l-4 border-yellow-400">
                            <div class="text-2xl">{a.icon.clone()}</div>
                            <div class="font-bold">{a.title.clone()}</div>
                            <div class="text-sm text-gray-400">{a.description.clone()}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Skills(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            {profile
                .skill_categories()
                .into_iter()
                .map(|category| {
                    view! {
                        <div>
                            <h3 class="font-bold text-lg mb-3 text-cyan-400">{category.to_string()}</h3>
                            {profile
                                .skills
                                .iter()
                                .filter(|s| s.category == category)
                                .map(|s| {
                                    view! {
                                        <div class="mb-3">
                                            <div class="flex justify-between text-sm">
                                                <span>{s.name.clone()}</span>
                                                <span class="text-gray-400">{s.level}</span>
                                            </div>
                                            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-green-500"
                                                    style:width=format!("{}%", s.level.min(100))
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Projects(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {profile
                .projects
                .iter()
                .map(|project| {
                    view! {
                        <div class="p-5 bg-gray-700 rounded-xl hover:scale-[1.02] transition-all">
                            <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                            <p class="text-gray-300 mb-3">{project.description.clone()}</p>
                            <div class="flex flex-wrap gap-2 mb-3">
                                {project
                                    .tech
                                    .iter()
                                    .map(|t| {
                                        view! {
                                            <span class="px-2 py-1 text-xs rounded bg-gray-800 text-cyan-300">
                                                {t.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            {project
                                .url
                                .clone()
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-cyan-400 hover:text-cyan-300"
                                        >
                                            "▶ Play"
                                        </a>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Work history, styled as a quest log.
#[component]
fn Quests(profile: &'static Profile) -> impl IntoView {
    view! {
        <ol class="relative border-l-2 border-cyan-700 ml-3">
            {profile
                .experience
                .iter()
                .map(|job| {
                    view! {
                        <li class="mb-8 ml-6">
                            <span class="absolute -left-2 w-4 h-4 rounded-full bg-cyan-500" />
                            <h3 class="text-lg font-bold">
                                {job.role.clone()} <span class="text-cyan-400">" @ " {job.company.clone()}</span>
                            </h3>
                            <p class="text-sm text-gray-400 mb-2">{job.period.clone()}</p>
                            <ul class="list-disc ml-5 text-gray-300 space-y-1">
                                {job.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
                            </ul>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn Certifications(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {profile
                .certifications
                .iter()
                .map(|cert| {
                    view! {
                        <div class="p-4 bg-gray-700 rounded-lg text-center">
                            <div class="text-3xl mb-2">"🏅"</div>
                            <div class="font-bold">{cert.name.clone()}</div>
                            <div class="text-sm text-gray-400">
                                {format!("{} · {}", cert.issuer, cert.year)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Contact(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="text-center">
            <p class="text-lg mb-6 text-gray-300">"Ready for co-op? Pick a channel:"</p>
            <div class="flex flex-wrap justify-center gap-4">
                {profile
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-6 py-3 rounded-md font-medium bg-cyan-500/20 hover:bg-cyan-500/30 text-cyan-300 border border-cyan-500/30"
                            >
                                {link.label.clone()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
