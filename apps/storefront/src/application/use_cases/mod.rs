//! Application Use Cases
//!
//! Each use case runs one storefront workflow against its ports.

mod get_price_in_currency;
mod get_shipping_info;
mod login;
mod render_page;
mod sign_up;
mod submit_order;

pub use get_price_in_currency::{GetPriceInCurrencyUseCase, PricingError};
pub use get_shipping_info::GetShippingInfoUseCase;
pub use login::{LOGIN_SUBJECT, LoginUseCase};
pub use render_page::{HOME_PAGE_PATH, RenderPageUseCase};
pub use sign_up::{SignUpUseCase, WELCOME_SUBJECT};
pub use submit_order::SubmitOrderUseCase;
