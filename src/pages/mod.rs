//! Page modules for route-level screens.
//!
//! Each screen owns its local fetch/error/loading state and talks to the
//! remote API directly; shared auth state arrives via context.

pub mod ad_details;
pub mod home;
pub mod login;
pub mod my_ads;
pub mod new_ad;
pub mod profile;
pub mod register;
pub mod search;
pub mod user_profile;
