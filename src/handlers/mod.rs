pub mod cart;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cart::add_to_cart,
        cart::get_cart,
        cart::get_items,
        cart::get_quantity,
        cart::get_total_price,
        cart::delete_item,
        cart::clear_cart,
    ),
    components(schemas(
        cart::AddToCartRequest,
        cart::SuccessResponse,
        cart::ProductResponse,
        cart::CartItemResponse,
        cart::CartResponse,
        cart::QuantityResponse,
        cart::TotalPriceResponse,
        cart::RemoveResponse,
    )),
    tags((name = "cart", description = "Shopping cart"))
)]
pub struct ApiDoc;
