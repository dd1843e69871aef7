// Reusable UI widgets

pub mod search_box;
pub mod toast;

pub use search_box::{SearchBox, SearchBoxExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
