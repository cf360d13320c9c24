//! Pages
//!
//! Top-level page components for each route.

pub mod account;
pub mod dashboard;
pub mod followers;
pub mod legal;
pub mod login;
pub mod messages;
pub mod order_details;
pub mod orders;
pub mod product_form;
pub mod products;
pub mod promotions;
pub mod signup;
pub mod track_order;

pub use account::Account;
pub use dashboard::Dashboard;
pub use followers::Followers;
pub use legal::{Legal, LegalPage};
pub use login::Login;
pub use messages::Messages;
pub use order_details::OrderDetails;
pub use orders::Orders;
pub use product_form::{AddProduct, EditProduct};
pub use products::Products;
pub use promotions::{PromotionDetails, Promotions};
pub use signup::Signup;
pub use track_order::TrackOrder;
