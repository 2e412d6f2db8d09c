mod categories;
mod category_form;
mod dashboard;
mod login;
mod not_found;
mod order_detail;
mod orders;
mod product_form;
mod products;
mod register;
mod reviews;
mod settings;
mod users;

pub use categories::CategoriesPage;
pub use category_form::CategoryFormPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use order_detail::OrderDetailPage;
pub use orders::OrdersPage;
pub use product_form::ProductFormPage;
pub use products::ProductsPage;
pub use register::RegisterPage;
pub use reviews::ReviewsPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
