#![warn(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(docsrs, warn(rustdoc::missing_doc_code_examples))]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod errors;
pub mod geometry;
pub mod mohr;
pub mod rosette;
pub mod solver;
pub mod strain;

pub use errors::{ReadingError, SolveError};
pub use geometry::{plot_point, PlotPoint, Segment, ViewBounds};
pub use mohr::{
    analyze, plot_primitives, MohrPlotPrimitives, PrincipalStrainResult, ISOTROPIC_TOLERANCE,
};
pub use rosette::{observation, RosetteObservation, RosetteReading};
pub use solver::{coefficient_matrix, solve};
pub use strain::StrainState;
