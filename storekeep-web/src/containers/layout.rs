use crate::containers::navbar::Navbar;
use crate::containers::sidebar::Sidebar;
use crate::routes::AdminRoute;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: AdminRoute,
}

/// The authenticated shell: navbar on top, sidebar on the left, page in the
/// remaining space. Only rendered behind the route guard.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "light")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <div class="flex">
                <Sidebar current_route={props.current_route.clone()} />
                <main class="flex-grow p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
