use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::models::app_state::SessionState;
use crate::pages::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The admin dashboard routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AdminRoute {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/products")]
    Products,
    #[at("/products/new")]
    ProductNew,
    #[at("/products/:id/edit")]
    ProductEdit { id: i64 },
    #[at("/categories")]
    Categories,
    #[at("/categories/new")]
    CategoryNew,
    #[at("/orders")]
    Orders,
    #[at("/orders/:id")]
    OrderDetail { id: i64 },
    #[at("/users")]
    Users,
    #[at("/reviews")]
    Reviews,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl AdminRoute {
    /// Whether the route is reachable without a session.
    fn is_public(&self) -> bool {
        matches!(self, AdminRoute::Login | AdminRoute::Register)
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: AdminRoute,
}

/// Route guard: every navigation passes through here before a page renders.
///
/// While the session is restoring nothing is decided yet, so a loading view
/// is shown instead of either redirecting or rendering the target. Once
/// settled, protected routes without a session redirect to the login page,
/// and the public pages invert — an authenticated admin visiting them is
/// sent to the dashboard.
#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_selector(|state: &SessionState| (state.is_loading, state.is_authenticated()));
    let (is_loading, is_authenticated) = *session;

    if is_loading {
        return html! { <Loading /> };
    }

    if props.route.is_public() {
        if is_authenticated {
            return html! { <Redirect<AdminRoute> to={AdminRoute::Dashboard} /> };
        }
        return match props.route {
            AdminRoute::Register => html! { <RegisterPage /> },
            _ => html! { <LoginPage /> },
        };
    }

    if !is_authenticated {
        return html! { <Redirect<AdminRoute> to={AdminRoute::Login} /> };
    }

    let page = match props.route.clone() {
        AdminRoute::Dashboard => html! { <DashboardPage /> },
        AdminRoute::Products => html! { <ProductsPage /> },
        AdminRoute::ProductNew => html! { <ProductFormPage product_id={None::<i64>} /> },
        AdminRoute::ProductEdit { id } => html! { <ProductFormPage product_id={Some(id)} /> },
        AdminRoute::Categories => html! { <CategoriesPage /> },
        AdminRoute::CategoryNew => html! { <CategoryFormPage /> },
        AdminRoute::Orders => html! { <OrdersPage /> },
        AdminRoute::OrderDetail { id } => html! { <OrderDetailPage order_id={id} /> },
        AdminRoute::Users => html! { <UsersPage /> },
        AdminRoute::Reviews => html! { <ReviewsPage /> },
        AdminRoute::Settings => html! { <SettingsPage /> },
        AdminRoute::NotFound => html! { <NotFoundPage /> },
        AdminRoute::Login | AdminRoute::Register => unreachable!("public routes handled above"),
    };

    html! {
        <Layout current_route={props.route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function for the dashboard routes.
pub fn switch(route: AdminRoute) -> Html {
    web_sys::console::log_1(&format!("Switching to route: {route:?}").into());
    html! { <RouteView {route} /> }
}
