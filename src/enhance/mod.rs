pub mod enhancer;
pub mod search;
pub mod sort;
pub mod view;

pub use enhancer::{AttachOutcome, EnhanceOptions, Enhancer};
pub use sort::{SortDirection, SortIndicator, SortState};
pub use view::TableView;
