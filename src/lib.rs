//! Monthly carbon footprint estimation.
//!
//! [`calculator::compute_footprint`] turns a [`profile::LifestyleProfile`]
//! into a per-category [`types::Breakdown`].
//! [`suggestions::generate_suggestions`] ranks the categories and picks
//! advice for the two largest. [`comparison::compare_to_averages`] compares
//! the result with the reference averages.

pub mod calculator;
pub mod comparison;
pub mod config;
pub mod error;
pub mod factors;
pub mod output;
pub mod profile;
pub mod suggestions;
pub mod types;

pub use calculator::compute_footprint;
pub use error::FootprintError;
pub use profile::LifestyleProfile;
pub use suggestions::generate_suggestions;
pub use types::{Breakdown, Category};
