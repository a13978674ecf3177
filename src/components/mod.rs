//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`Header`] - Static navigation chrome
//! - [`country_list`] - Country grid with the creation form toggle
//! - [`country_detail`] - Single-country view
//! - [`add_country_form`] - Creation form with cache patching
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod add_country_form;
pub mod country_detail;
pub mod country_list;
pub mod header;
pub mod icons;
pub mod router;

pub use header::Header;
pub use router::AppRouter;
