pub mod sort;

pub use sort::{
    handle_sort_colors, ColorEntry, LabEntry, RgbEntry, SkippedEntry, SortColorsForm,
    SortColorsResponse, __path_handle_sort_colors,
};
