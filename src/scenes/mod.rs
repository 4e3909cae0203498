//! Built-in demonstration scenes.
//!
//! Two fields ship with the tool:
//!
//! - the cubic family `z = x^3 - y*x`, where y plays the role of the family
//!   parameter and the ridge locus tracks the fold of the cubic
//! - a quantum-relativity toy surface: a Gaussian envelope whose width couples
//!   to `1/y`, scaled by a `1 + 1/y^2` divergence toward small y
//!
//! Default windows and thresholds follow the shipped demo configurations.

use crate::domain::SurfaceConfig;

/// Guard against division blowup toward `y -> 0` in the relativity scene.
const REL_EPS: f64 = 1e-9;

/// Guided slice targets for the quantum-relativity scene.
pub const RELATIVITY_SLICE_YS: [f64; 2] = [1.0, 5.0];

/// `z = x^3 - y*x` (y is the family parameter).
pub fn cubic_family(x: f64, y: f64) -> f64 {
    x * x * x - y * x
}

/// Default sampling window and thresholds for the cubic family.
pub fn cubic_config() -> SurfaceConfig {
    SurfaceConfig {
        x_range: (-2.0, 2.0),
        y_range: (-2.0, 2.0),
        nx: 200,
        ny: 200,
        ridge_tol: 5e-3,
        fault_quantile: 0.98,
    }
}

/// Quantum-relativity toy surface.
///
/// `z = exp(-(|x| / (1 + 1/y))^2) * (1 + 1/y^2)` with y floored at `REL_EPS`.
/// Values blow up toward small y but stay finite, so near-singular rows flow
/// through the analytics without special-casing.
pub fn quantum_relativity(x: f64, y: f64) -> f64 {
    let y = y.max(REL_EPS);
    let width = 1.0 + 1.0 / y;
    let u = x.abs() / width;
    (-(u * u)).exp() * (1.0 + 1.0 / (y * y))
}

/// Default sampling window and thresholds for the quantum-relativity scene.
pub fn relativity_config() -> SurfaceConfig {
    SurfaceConfig {
        x_range: (-3.0, 3.0),
        y_range: (1.0, 10.0),
        nx: 200,
        ny: 200,
        ridge_tol: 1e-2,
        fault_quantile: 0.97,
    }
}
