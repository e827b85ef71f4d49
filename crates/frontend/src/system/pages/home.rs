use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

struct Pillar {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "location",
        title: "Landowners",
        text: "List your land and meet vetted developers ready to build.",
    },
    Pillar {
        icon: "user",
        title: "Developers & Investors",
        text: "Find plots and partners that match your budget and timeline.",
    },
    Pillar {
        icon: "approved",
        title: "Mandates",
        text: "Represent clients and close joint-venture deals with confidence.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Build Together. Grow Together."</h1>
            <p>"The marketplace for real-estate joint ventures between landowners, developers and investors."</p>
            <div class="hero__actions">
                <A href="/submit-request" attr:class="button button--primary">
                    "Submit a Request" {icon("arrow-right")}
                </A>
                <A href="/browse-requests" attr:class="button button--ghost">"Browse Requests"</A>
            </div>
        </section>

        <section class="pillars">
            {PILLARS
                .iter()
                .map(|p| view! {
                    <div class="pillar card">
                        <span class="pillar__icon">{icon(p.icon)}</span>
                        <h3>{p.title}</h3>
                        <p>{p.text}</p>
                    </div>
                })
                .collect_view()}
        </section>

        <section class="cta">
            <h2>"Have a question?"</h2>
            <A href="/contact" attr:class="button button--primary">"Contact Us"</A>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to home"</A>
        </section>
    }
}
