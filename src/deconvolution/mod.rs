//! Recovery of in vivo absorption from plasma concentration data
//!
//! Two methods with different prerequisites:
//!
//! | Method | Requires | Limits |
//! |--------|----------|--------|
//! | [`wagner_nelson`] | Elimination rate constant only | One-compartment kinetics |
//! | [`numerical_deconvolution`] | Known unit impulse response | Noise-sensitive, uniform grid |

mod numerical;
mod wagner_nelson;

pub use numerical::{numerical_deconvolution, NumericalDeconvolution};
pub use wagner_nelson::{wagner_nelson, DeconvolutionResult};
