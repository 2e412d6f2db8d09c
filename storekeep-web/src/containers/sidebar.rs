use crate::routes::AdminRoute;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: AdminRoute,
}

/// A sidebar navigation entry.
struct NavItem {
    route: AdminRoute,
    label: &'static str,
    icon: IconId,
}

fn nav_items() -> [NavItem; 7] {
    [
        NavItem {
            route: AdminRoute::Dashboard,
            label: "Dashboard",
            icon: IconId::HeroiconsOutlineHome,
        },
        NavItem {
            route: AdminRoute::Products,
            label: "Products",
            icon: IconId::HeroiconsOutlineCube,
        },
        NavItem {
            route: AdminRoute::Categories,
            label: "Categories",
            icon: IconId::HeroiconsOutlineTag,
        },
        NavItem {
            route: AdminRoute::Orders,
            label: "Orders",
            icon: IconId::HeroiconsOutlineShoppingCart,
        },
        NavItem {
            route: AdminRoute::Users,
            label: "Users",
            icon: IconId::HeroiconsOutlineUsers,
        },
        NavItem {
            route: AdminRoute::Reviews,
            label: "Reviews",
            icon: IconId::HeroiconsOutlineStar,
        },
        NavItem {
            route: AdminRoute::Settings,
            label: "Settings",
            icon: IconId::HeroiconsOutlineCog6Tooth,
        },
    ]
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="w-56 min-h-screen bg-base-200">
            <ul class="menu p-4 gap-1">
                { for nav_items().into_iter().map(|item| {
                    let active = item.route == props.current_route;
                    html! {
                        <li>
                            <Link<AdminRoute>
                                to={item.route}
                                classes={classes!(active.then_some("active"))}
                            >
                                <Icon icon_id={item.icon} class="w-5 h-5" />
                                { item.label }
                            </Link<AdminRoute>>
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}
