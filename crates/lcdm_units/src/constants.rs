//! Length and velocity constants, all in kilometers (or km/s).

/// Speed of light in vacuum, km/s (exact, SI definition).
pub const C_KM_PER_S: f64 = 299_792.458;

/// Kilometers per megaparsec (IAU 2015 parsec).
pub const KM_PER_MPC: f64 = 3.085_677_581_491_367e19;

/// Kilometers per astronomical unit (IAU 2012, exact).
pub const KM_PER_AU: f64 = 1.495_978_707e8;

/// Kilometers per Julian light-year.
pub const KM_PER_LY: f64 = 9.460_730_472_580_8e12;

/// Kilometers per light-second. Numerically equal to [`C_KM_PER_S`].
pub const KM_PER_LS: f64 = C_KM_PER_S;

/// Light-years per giga-light-year.
pub const LY_PER_GLY: f64 = 1e9;

/// Kilometers per giga-light-year.
pub const KM_PER_GLY: f64 = KM_PER_LY * LY_PER_GLY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_second_is_speed_of_light() {
        assert_eq!(KM_PER_LS, C_KM_PER_S);
    }

    #[test]
    fn light_year_is_julian_year_of_light() {
        // 365.25 days * 86400 s * c
        let expected = 365.25 * 86_400.0 * C_KM_PER_S;
        assert!((KM_PER_LY - expected).abs() / expected < 1e-15);
    }

    #[test]
    fn megaparsec_is_about_3_26_million_ly() {
        let ly = KM_PER_MPC / KM_PER_LY;
        assert!((ly - 3.2616e6).abs() < 1e3, "1 Mpc = {ly} ly");
    }
}
