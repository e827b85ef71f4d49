//! Admin navigation

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 2] = [
    MenuItem {
        href: "/admin",
        label: "Dashboard",
        icon: "dashboard",
    },
    MenuItem {
        href: "/admin/requests",
        label: "Requests",
        icon: "requests",
    },
];

fn is_active(current: &str, href: &str) -> bool {
    current.trim_end_matches('/') == href
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="app-sidebar__content">
            {MENU
                .iter()
                .map(|item| {
                    let href = item.href;
                    view! {
                        <A
                            href=href
                            attr:class=move || {
                                if is_active(&location.pathname.get(), href) {
                                    "app-sidebar__item app-sidebar__item--active"
                                } else {
                                    "app-sidebar__item"
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
            <A href="/" attr:class="app-sidebar__item app-sidebar__item--back">
                <span>"Back to site"</span>
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_ignores_trailing_slash() {
        assert!(is_active("/admin/", "/admin"));
        assert!(is_active("/admin/requests", "/admin/requests"));
        assert!(!is_active("/admin/requests", "/admin"));
    }
}
