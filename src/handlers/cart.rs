use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::cart_service::CartService;
use crate::domain::cart::{Cart, CartItem};
use crate::domain::errors::DomainError;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub products_quantity: i64,
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuantityResponse {
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalPriceResponse {
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveResponse {
    pub removed: bool,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product: ProductResponse {
                name: item.product.name,
                price: item.product.price.to_string(),
            },
            quantity: item.quantity,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let products_quantity = cart.products_quantity();
        let total_price = cart.total_price().to_string();
        Self {
            id: cart.id.to_string(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            products_quantity,
            total_price,
        }
    }
}

/// Run a blocking store operation on actix's blocking thread pool.
async fn blocking<T, F>(service: web::Data<CartService>, op: F) -> Result<T, AppError>
where
    F: FnOnce(&CartService) -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || op(service.get_ref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cart")
            .route("", web::get().to(get_cart))
            .route("", web::delete().to(clear_cart))
            .route("/items", web::get().to(get_items))
            .route("/items", web::post().to(add_to_cart))
            .route("/items/{name}", web::delete().to(delete_item))
            .route("/quantity", web::get().to(get_quantity))
            .route("/total", web::get().to(get_total_price)),
    );
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /cart/items
///
/// Looks the product up by name and adds one unit of it to the cart. The
/// response only reports success once the cart has actually been written.
#[utoipa::path(
    post,
    path = "/cart/items",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added to cart", body = SuccessResponse),
        (status = 400, description = "Catalog record is not a valid product"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    service: web::Data<CartService>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    let product_name = body.into_inner().product_name;
    log::info!("Adding product '{}' to cart", product_name);

    blocking(service, move |s| s.add_product_by_name(&product_name)).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

/// GET /cart
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Current cart with aggregates", body = CartResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_cart(service: web::Data<CartService>) -> Result<HttpResponse, AppError> {
    let cart = blocking(service, |s| s.get_cart()).await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(cart)))
}

/// GET /cart/items
#[utoipa::path(
    get,
    path = "/cart/items",
    responses(
        (status = 200, description = "Items in the cart", body = [CartItemResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_items(service: web::Data<CartService>) -> Result<HttpResponse, AppError> {
    let items = blocking(service, |s| s.get_items()).await?;
    let items: Vec<CartItemResponse> = items.into_iter().map(CartItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /cart/quantity
#[utoipa::path(
    get,
    path = "/cart/quantity",
    responses(
        (status = 200, description = "Total number of units in the cart", body = QuantityResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_quantity(service: web::Data<CartService>) -> Result<HttpResponse, AppError> {
    let quantity = blocking(service, |s| s.get_products_quantity()).await?;
    Ok(HttpResponse::Ok().json(QuantityResponse { quantity }))
}

/// GET /cart/total
#[utoipa::path(
    get,
    path = "/cart/total",
    responses(
        (status = 200, description = "Sum of price times quantity", body = TotalPriceResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_total_price(service: web::Data<CartService>) -> Result<HttpResponse, AppError> {
    let total = blocking(service, |s| s.get_total_price()).await?;
    Ok(HttpResponse::Ok().json(TotalPriceResponse {
        total_price: total.to_string(),
    }))
}

/// DELETE /cart/items/{name}
///
/// Removes the product's line from the cart. Removing a product that is not
/// in the cart succeeds with `removed: false`.
#[utoipa::path(
    delete,
    path = "/cart/items/{name}",
    params(
        ("name" = String, Path, description = "Product name"),
    ),
    responses(
        (status = 200, description = "Removal outcome", body = RemoveResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn delete_item(
    service: web::Data<CartService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let removed = blocking(service, move |s| s.delete_product_by_name(&name)).await?;
    Ok(HttpResponse::Ok().json(RemoveResponse { removed }))
}

/// DELETE /cart
#[utoipa::path(
    delete,
    path = "/cart",
    responses(
        (status = 204, description = "Cart cleared"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn clear_cart(service: web::Data<CartService>) -> Result<HttpResponse, AppError> {
    blocking(service, |s| s.clear_cart()).await?;
    Ok(HttpResponse::NoContent().finish())
}
