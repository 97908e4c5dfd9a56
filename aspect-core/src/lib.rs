pub mod derive;
pub mod layout;
pub mod linker;
pub mod model;
pub mod preview;
pub mod ratio;

pub use derive::{Derived, Deriver, Memo};
pub use layout::{
    LayoutCell, LayoutConfig, LayoutConfigError, LayoutRow, MAX_LAYOUT_COUNT, build_layout_table,
};
pub use linker::parse_digits;
pub use model::dimensions::Dimensions;
pub use model::state::{DimensionState, Field};
pub use preview::{DEFAULT_PREVIEW_MAX, PreviewSize, preview_for, preview_size};
pub use ratio::{PLACEHOLDER, display_ratio, gcd, reduce};
