use serde::{Deserialize, Serialize};

/// Molar volume of an ideal gas at STP, in cm³/mol
pub const MOLAR_VOLUME_STP: f64 = 0.022_413_969_54e6;
/// Avogadro constant, in 1/mol
pub const AVOGADRO: f64 = 6.022_140_76e23;
/// Cross-sectional area of an adsorbed nitrogen molecule, in m²
pub const NITROGEN_CROSS_SECTION: f64 = 0.162e-18;

/// The probe gas whose molecules cover the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Adsorbate {
    /// Area occupied by one adsorbed molecule, in m²
    pub cross_section: f64,
}

impl Default for Adsorbate {
    fn default() -> Self {
        Self::nitrogen()
    }
}

impl Adsorbate {
    #[must_use]
    pub const fn nitrogen() -> Self {
        Self {
            cross_section: NITROGEN_CROSS_SECTION,
        }
    }

    /// Specific surface area (m²/g) covered by a monolayer of `n_mono` (cm³ STP/g).
    ///
    /// A non-finite `n_mono` gives a non-finite area.
    #[must_use]
    pub fn surface_area(&self, n_mono: f64) -> f64 {
        n_mono / MOLAR_VOLUME_STP * self.cross_section * AVOGADRO
    }
}

/// Specific surface area of a nitrogen monolayer of `n_mono`. See [`Adsorbate::surface_area`].
#[must_use]
pub fn surface_area(n_mono: f64) -> f64 {
    Adsorbate::nitrogen().surface_area(n_mono)
}

#[cfg(test)]
mod tests {
    use super::{surface_area, Adsorbate};

    #[test]
    fn unit_monolayer_of_nitrogen() {
        let expected = 1.0 / 22_413.969_54 * 0.162e-18 * 6.022_140_76e23;

        approx::assert_relative_eq!(surface_area(1.0), expected, max_relative = 1e-12);
        approx::assert_relative_eq!(surface_area(1.0), 4.3526, max_relative = 1e-4);
    }

    #[test]
    fn area_scales_with_cross_section() {
        let doubled = Adsorbate {
            cross_section: 2.0 * 0.162e-18,
        };
        approx::assert_relative_eq!(
            doubled.surface_area(3.0),
            2.0 * surface_area(3.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_finite_capacity_propagates() {
        assert!(surface_area(f64::INFINITY).is_infinite());
        assert!(surface_area(f64::NAN).is_nan());
    }
}
