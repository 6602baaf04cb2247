//! Scalar distance conversions.
//!
//! Every conversion is total: exact zero maps to `0.0` without performing
//! the division, and non-finite inputs pass through IEEE arithmetic.

use crate::constants::{KM_PER_AU, KM_PER_GLY, KM_PER_LS, KM_PER_LY, KM_PER_MPC};

/// Megaparsecs to kilometers.
pub fn mpc_to_km(mpc: f64) -> f64 {
    mpc * KM_PER_MPC
}

/// Kilometers to megaparsecs.
pub fn km_to_mpc(km: f64) -> f64 {
    if km == 0.0 {
        return 0.0;
    }
    km / KM_PER_MPC
}

/// Kilometers to astronomical units.
pub fn km_to_au(km: f64) -> f64 {
    if km == 0.0 {
        return 0.0;
    }
    km / KM_PER_AU
}

/// Kilometers to light-years.
pub fn km_to_ly(km: f64) -> f64 {
    if km == 0.0 {
        return 0.0;
    }
    km / KM_PER_LY
}

/// Light-years to kilometers.
pub fn ly_to_km(ly: f64) -> f64 {
    ly * KM_PER_LY
}

/// Kilometers to light-seconds.
pub fn km_to_ls(km: f64) -> f64 {
    if km == 0.0 {
        return 0.0;
    }
    km / KM_PER_LS
}

/// Megaparsecs to giga-light-years, via kilometers.
pub fn mpc_to_gly(mpc: f64) -> f64 {
    if mpc == 0.0 {
        return 0.0;
    }
    mpc_to_km(mpc) / KM_PER_GLY
}

/// One distance expressed in every supported unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitBreakdown {
    pub mpc: f64,
    pub gly: f64,
    pub km: f64,
    pub ly: f64,
    pub au: f64,
    pub light_seconds: f64,
}

impl UnitBreakdown {
    /// Expand a distance given in megaparsecs.
    pub fn from_mpc(mpc: f64) -> Self {
        let km = mpc_to_km(mpc);
        Self {
            mpc,
            gly: mpc_to_gly(mpc),
            km,
            ly: km_to_ly(km),
            au: km_to_au(km),
            light_seconds: km_to_ls(km),
        }
    }
}
