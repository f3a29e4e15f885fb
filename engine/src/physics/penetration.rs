//! Terminal ballistics: armour penetration and ricochet math
//!
//! Pure formulas shared by the shell resolver. No state, no geometry
//! queries; everything here is scalar math over a strike that has already
//! been located.
//!
//! # Model
//!
//! A shell's ability to defeat armour is a single scalar,
//! `penetration_capability`, grown by speed and mass and shrunk by
//! calibre. A plate resists with its `effective_depth`: areal density
//! divided by the sine of the incidence angle, so oblique hits meet more
//! metal. At grazing incidence the slant formula would blow up; below the
//! `GRAZING_THRESHOLD` the plate instead presents its full length of
//! material. The constants are a fixed game convention, not SI ballistics.
//!
//! # Example
//!
//! ```
//! use broadside_engine::physics::penetration::{effective_depth, penetration_capability};
//!
//! let pen = penetration_capability(4000.0, 3000.0, 1.0, 0.5);
//! let depth = effective_depth(10.0, 1.0, 1.0, std::f64::consts::FRAC_PI_2, 0.0);
//! assert!(pen > depth, "a 4 km/s heavy shell defeats 1 unit of plate");
//! ```

/// Divisor in the penetration formula; sets the overall scale so that
/// template shells defeat roughly their own calibre of plate.
pub const PENETRATION_DIVISOR: f64 = 7.6e4;

/// Below this |sin(incidence)| the slant-depth formula is abandoned for
/// the full-length fallback instead of dividing by near-zero.
pub const GRAZING_THRESHOLD: f64 = 1e-3;

/// Speed retained after a deflection.
pub const DEFLECTION_SPEED_FACTOR: f64 = 0.5;

/// Fraction of dt by which a deflected shell is nudged along its new
/// velocity before the ricochet segment is re-resolved, so it does not
/// immediately re-strike the surface it just left.
pub const RESTRIKE_NUDGE: f64 = 0.001;

/// Penetration capability of a shell.
///
/// # Arguments
/// * `speed` - Current speed (scene units per second)
/// * `mass` - Shell mass
/// * `coefficient` - Armour-piercing quality factor k
/// * `diameter` - Shell calibre
///
/// # Returns
/// speed * sqrt(mass) * k / 7.6e4 / sqrt(diameter)
#[inline]
pub fn penetration_capability(speed: f64, mass: f64, coefficient: f64, diameter: f64) -> f64 {
    speed * mass.sqrt() * coefficient / PENETRATION_DIVISOR / diameter.sqrt()
}

/// Effective armour depth presented to a strike.
///
/// # Arguments
/// * `length` - Plate length (grazing fallback material)
/// * `thickness` - Plate thickness
/// * `density` - Plate density
/// * `face_angle` - Absolute orientation of the struck face
/// * `travel_angle` - Absolute travel direction of the shell
///
/// # Returns
/// thickness * density / |sin(face - travel)| while the incidence is
/// above `GRAZING_THRESHOLD`; length * density otherwise.
pub fn effective_depth(
    length: f64,
    thickness: f64,
    density: f64,
    face_angle: f64,
    travel_angle: f64,
) -> f64 {
    let incidence = (face_angle - travel_angle).sin().abs();
    if incidence > GRAZING_THRESHOLD {
        thickness * density / incidence
    } else {
        length * density
    }
}

/// Direction of a ray mirrored about a face line.
///
/// Reflecting direction `travel_angle` about the line with orientation
/// `face_angle` keeps the component parallel to the face and reverses the
/// normal component; in angle form that is simply 2*face - travel, valid
/// for strikes from either side of the plate.
#[inline]
pub fn mirror_direction(face_angle: f64, travel_angle: f64) -> f64 {
    2.0 * face_angle - travel_angle
}

/// Speed multiplier after punching through a plate: the shell keeps the
/// fraction of capability left over once the plate's depth is spent.
///
/// Only meaningful when `pen > depth` (the caller's penetration branch).
#[inline]
pub fn bleed_factor(pen: f64, depth: f64) -> f64 {
    (pen - depth) / pen
}
