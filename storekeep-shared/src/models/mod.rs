//! Data models exchanged with the storefront backend.

pub mod category;
pub mod errors;
pub mod order;
pub mod product;
pub mod review;
pub mod stats;
pub mod upload;
pub mod user;

pub use category::{Category, CategoryPayload};
pub use errors::ErrorBody;
pub use order::{ORDER_STATUSES, Order, OrderItem, OrderStatusUpdate};
pub use product::{Product, ProductImage, ProductPayload};
pub use review::{Review, ReviewProduct, ReviewUser};
pub use stats::DashboardStats;
pub use upload::UploadResponse;
pub use user::{RegisterRequest, TokenResponse, User, UserUpdate};
