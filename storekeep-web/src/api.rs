//! HTTP client for the storefront backend.
//!
//! Single point of contact with the REST API: no view code constructs
//! requests directly. Requests are attempted exactly once — no retries;
//! failures surface immediately to the caller, who is a human with a
//! retry button.

use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    Category, CategoryPayload, DashboardStats, Order, OrderStatusUpdate, Product, ProductPayload,
    RegisterRequest, Review, TokenResponse, UploadResponse, User, UserUpdate,
};
use std::rc::Rc;

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::storage::{BrowserStorage, TokenStorage};
use crate::upload::{FileUploader, UploadFile, validate_upload};

thread_local! {
    static SHARED_CLIENT: OnceCell<StorekeepClient> = OnceCell::new();
}

/// Optional query parameters accepted by the list endpoints.
///
/// `search` applies to products, `status` to orders; unset fields are
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Number of records to skip.
    pub skip: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Product search term.
    pub search: Option<String>,
    /// Order status filter.
    pub status: Option<String>,
}

impl ListQuery {
    /// Query filtering products by a search term.
    pub fn searching(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            ..Self::default()
        }
    }

    /// Query filtering orders by lifecycle status.
    pub fn with_status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

/// Decode a completed exchange into a typed payload.
///
/// 2xx with a JSON body yields the payload; 2xx with anything else is a
/// contract violation (`Decode`); non-2xx is normalized through the
/// backend's `detail` field.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// API client for the Storekeep backend.
#[derive(Clone)]
pub struct StorekeepClient {
    base_url: String,
    client: Client,
    storage: Rc<dyn TokenStorage>,
}

impl std::fmt::Debug for StorekeepClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorekeepClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl StorekeepClient {
    /// Create a new API client over the provided token slot.
    pub fn new(base_url: &str, storage: Rc<dyn TokenStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            storage,
        }
    }

    /// The process-wide client, bound to browser storage.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                Self::new(
                    FrontendConfig::new().api_base_url(),
                    Rc::new(BrowserStorage),
                )
            })
            .clone()
        })
    }

    /// The token slot this client reads from.
    pub fn storage(&self) -> Rc<dyn TokenStorage> {
        Rc::clone(&self.storage)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request. When `auth` is set, the bearer token is read from
    /// the storage slot at call time; an empty slot attaches no header.
    pub(crate) fn request(&self, method: Method, path: &str, auth: bool) -> RequestBuilder {
        let builder = self.client.request(method, self.api_url(path));
        if auth {
            match self.storage.get() {
                Some(token) => builder.bearer_auth(token),
                None => builder,
            }
        } else {
            builder
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_body(status, &body)
    }

    /// As [`Self::execute`], for endpoints whose success body is irrelevant.
    async fn execute_no_content(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Err(ApiError::from_response(status, &body))
    }

    // ---- auth ----

    /// Exchange credentials for a bearer token.
    ///
    /// The token endpoint is form-url-encoded with `username`/`password`
    /// fields — backend contract, not a client choice.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let builder = self
            .request(Method::POST, "auth/token", false)
            .form(&[("username", username), ("password", password)]);
        self.execute(builder).await
    }

    /// Fetch the profile belonging to the stored token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.execute(self.request(Method::GET, "auth/me", true)).await
    }

    /// Fetch a profile with an explicit token, before it is persisted.
    pub async fn current_user_with(&self, token: &str) -> Result<User, ApiError> {
        let builder = self.request(Method::GET, "auth/me", false).bearer_auth(token);
        self.execute(builder).await
    }

    /// Register a regular account.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.execute(self.request(Method::POST, "auth/register", false).json(data))
            .await
    }

    /// Register an administrator account. Does not establish a session.
    pub async fn register_admin(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.execute(
            self.request(Method::POST, "auth/register-admin", false)
                .json(data),
        )
        .await
    }

    // ---- dashboard ----

    /// Aggregates for the dashboard landing page.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.execute(self.request(Method::GET, "admin/stats", true)).await
    }

    // ---- products ----

    /// List products, optionally filtered by a search term.
    pub async fn list_products(&self, query: &ListQuery) -> Result<Vec<Product>, ApiError> {
        let builder = self
            .request(Method::GET, "products/", true)
            .query(&query.to_pairs());
        self.execute(builder).await
    }

    /// Fetch one product.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.execute(self.request(Method::GET, &format!("products/{id}"), true))
            .await
    }

    /// Create a product.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.execute(self.request(Method::POST, "products/", true).json(payload))
            .await
    }

    /// Replace a product.
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        self.execute(
            self.request(Method::PUT, &format!("products/{id}"), true)
                .json(payload),
        )
        .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.execute_no_content(self.request(Method::DELETE, &format!("products/{id}"), true))
            .await
    }

    // ---- categories ----

    /// List all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.execute(self.request(Method::GET, "categories/", true)).await
    }

    /// Create a category.
    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.execute(self.request(Method::POST, "categories/", true).json(payload))
            .await
    }

    /// Replace a category.
    pub async fn update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> Result<Category, ApiError> {
        self.execute(
            self.request(Method::PUT, &format!("categories/{id}"), true)
                .json(payload),
        )
        .await
    }

    /// Delete a category.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.execute_no_content(self.request(Method::DELETE, &format!("categories/{id}"), true))
            .await
    }

    // ---- orders ----

    /// List all orders, optionally filtered by status.
    pub async fn list_orders(&self, query: &ListQuery) -> Result<Vec<Order>, ApiError> {
        let builder = self
            .request(Method::GET, "orders/admin/all", true)
            .query(&query.to_pairs());
        self.execute(builder).await
    }

    /// Fetch one order.
    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        self.execute(self.request(Method::GET, &format!("orders/{id}"), true))
            .await
    }

    /// Move an order to a new lifecycle status.
    pub async fn update_order_status(&self, id: i64, status: &str) -> Result<Order, ApiError> {
        let payload = OrderStatusUpdate {
            status: status.to_string(),
        };
        self.execute(
            self.request(Method::PUT, &format!("orders/{id}/status"), true)
                .json(&payload),
        )
        .await
    }

    // ---- users ----

    /// List user accounts.
    pub async fn list_users(&self, query: &ListQuery) -> Result<Vec<User>, ApiError> {
        let builder = self
            .request(Method::GET, "users/", true)
            .query(&query.to_pairs());
        self.execute(builder).await
    }

    /// Fetch one user.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.execute(self.request(Method::GET, &format!("users/{id}"), true))
            .await
    }

    /// Partially update a user account.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.execute(
            self.request(Method::PUT, &format!("users/{id}"), true)
                .json(update),
        )
        .await
    }

    // ---- reviews ----

    /// List product reviews.
    pub async fn list_reviews(&self, query: &ListQuery) -> Result<Vec<Review>, ApiError> {
        let builder = self
            .request(Method::GET, "reviews/", true)
            .query(&query.to_pairs());
        self.execute(builder).await
    }

    /// Delete a review.
    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        self.execute_no_content(self.request(Method::DELETE, &format!("reviews/{id}"), true))
            .await
    }

    // ---- uploads ----

    /// Upload one file to the media endpoint.
    ///
    /// Rejects client-side before any network traffic when the file is over
    /// the size limit or is not an image.
    pub async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        validate_upload(file)?;
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|err| ApiError::Validation(format!("unsupported media type: {err}")))?;
        let form = Form::new().part("file", part);
        self.execute(self.request(Method::POST, "upload", true).multipart(form))
            .await
    }
}

/// The authentication surface the session manager depends on.
///
/// Implemented by [`StorekeepClient`]; stubbed in session tests.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;
    /// Fetch the profile belonging to the stored token.
    async fn current_user(&self) -> Result<User, ApiError>;
    /// Fetch a profile with an explicit, not-yet-persisted token.
    async fn current_user_with(&self, token: &str) -> Result<User, ApiError>;
    /// Register an administrator account.
    async fn register_admin(&self, data: &RegisterRequest) -> Result<User, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for StorekeepClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        StorekeepClient::login(self, username, password).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        StorekeepClient::current_user(self).await
    }

    async fn current_user_with(&self, token: &str) -> Result<User, ApiError> {
        StorekeepClient::current_user_with(self, token).await
    }

    async fn register_admin(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        StorekeepClient::register_admin(self, data).await
    }
}

#[async_trait(?Send)]
impl FileUploader for StorekeepClient {
    async fn upload_file(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        StorekeepClient::upload_file(self, file).await
    }
}
