//! Radial kernel families for RBF interpolation

pub mod gaussian;
pub mod inverse_multiquadric;
pub mod inverse_quadric;
pub mod multiquadric;
pub mod thin_plate_spline;
pub mod traits;

pub use self::gaussian::Gaussian;
pub use self::inverse_multiquadric::InverseMultiquadric;
pub use self::inverse_quadric::InverseQuadric;
pub use self::multiquadric::Multiquadric;
pub use self::thin_plate_spline::ThinPlateSpline;
pub use self::traits::RadialKernel;

use std::fmt;

/// Closed enumeration of the supported radial kernel families
///
/// The integer tags are stable and used verbatim in persisted model streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RBFType {
    ThinPlateSpline,
    Multiquadric,
    InverseQuadric,
    InverseMultiquadric,
    Gaussian,
}

impl RBFType {
    /// Stable persistence tag for this family
    pub fn tag(&self) -> u32 {
        match self {
            RBFType::ThinPlateSpline => 1,
            RBFType::Multiquadric => 2,
            RBFType::InverseQuadric => 3,
            RBFType::InverseMultiquadric => 4,
            RBFType::Gaussian => 5,
        }
    }

    /// Map a persistence tag back to a kernel family
    ///
    /// Unrecognized tags fall back to `ThinPlateSpline`. This mirrors the
    /// factory's documented default rather than raising an error.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            2 => RBFType::Multiquadric,
            3 => RBFType::InverseQuadric,
            4 => RBFType::InverseMultiquadric,
            5 => RBFType::Gaussian,
            _ => RBFType::ThinPlateSpline,
        }
    }

    /// Construct the kernel implementation for this family
    pub fn build(&self) -> Box<dyn RadialKernel> {
        match self {
            RBFType::ThinPlateSpline => Box::new(ThinPlateSpline::new()),
            RBFType::Multiquadric => Box::new(Multiquadric::new()),
            RBFType::InverseQuadric => Box::new(InverseQuadric::new()),
            RBFType::InverseMultiquadric => Box::new(InverseMultiquadric::new()),
            RBFType::Gaussian => Box::new(Gaussian::new()),
        }
    }
}

impl Default for RBFType {
    fn default() -> Self {
        RBFType::ThinPlateSpline
    }
}

impl fmt::Display for RBFType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RBFType::ThinPlateSpline => "Thin plate spline",
            RBFType::Multiquadric => "Multiquadric",
            RBFType::InverseQuadric => "Inverse quadric",
            RBFType::InverseMultiquadric => "Inverse multiquadric",
            RBFType::Gaussian => "Gaussian",
        };
        write!(f, "{name}")
    }
}

/// All supported kernel families, in tag order
pub const ALL_KERNEL_TYPES: [RBFType; 5] = [
    RBFType::ThinPlateSpline,
    RBFType::Multiquadric,
    RBFType::InverseQuadric,
    RBFType::InverseMultiquadric,
    RBFType::Gaussian,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for ty in ALL_KERNEL_TYPES {
            assert_eq!(RBFType::from_tag(ty.tag()), ty);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_thin_plate_spline() {
        assert_eq!(RBFType::from_tag(0), RBFType::ThinPlateSpline);
        assert_eq!(RBFType::from_tag(99), RBFType::ThinPlateSpline);
    }

    #[test]
    fn test_factory_builds_matching_kernel() {
        // Each family is identified by its value at r = 2
        let expect = [
            (RBFType::ThinPlateSpline, 4.0 * 2.0_f64.ln()),
            (RBFType::Multiquadric, 5.0_f64.sqrt()),
            (RBFType::InverseQuadric, 0.2),
            (RBFType::InverseMultiquadric, 1.0 / 5.0_f64.sqrt()),
            (RBFType::Gaussian, (-4.0_f64).exp()),
        ];
        for (ty, v) in expect {
            assert!((ty.build().value(2.0) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(RBFType::Gaussian.to_string(), "Gaussian");
        assert_eq!(RBFType::ThinPlateSpline.to_string(), "Thin plate spline");
    }
}
