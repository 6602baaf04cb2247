//! Distance unit conversions for cosmological results.
//!
//! This crate provides:
//! - Physical constants for the megaparsec, astronomical unit, light-year
//!   and light-second, all expressed in kilometers
//! - Total scalar conversions between those units
//! - Human-readable formatting for very large kilometer values

pub mod constants;
pub mod convert;
pub mod format;

pub use constants::{
    C_KM_PER_S, KM_PER_AU, KM_PER_GLY, KM_PER_LS, KM_PER_LY, KM_PER_MPC, LY_PER_GLY,
};
pub use convert::{
    UnitBreakdown, km_to_au, km_to_ls, km_to_ly, km_to_mpc, ly_to_km, mpc_to_gly, mpc_to_km,
};
pub use format::{format_large_number, format_scientific};
