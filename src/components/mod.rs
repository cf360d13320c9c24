//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod debt_overlay;
pub mod loading;
pub mod nav;
pub mod notice_banner;
pub mod stat_card;
pub mod toast;

pub use debt_overlay::DebtOverlay;
pub use loading::Loading;
pub use nav::Nav;
pub use notice_banner::NoticeBanner;
pub use stat_card::StatCard;
pub use toast::Toast;
