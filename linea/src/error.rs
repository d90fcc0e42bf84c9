//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A free-form element asked for a measured extent, but neither it nor
    /// any of its descendants carries a bounds provider.
    #[error(
        "no bounds provider found in '{element}' (element {index}) or its children; \
         disable measured extents and set a configured element extent instead"
    )]
    MeasurementUnavailable { element: String, index: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
