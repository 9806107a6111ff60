//! Dimensionality reduction and plotting.

pub mod pca;
pub mod scatter;
pub use pca::{Pca, PcaConfig, PcaResult};
pub use scatter::{viridis, ScatterPlot};
