pub mod generators;
pub mod labelled;
pub mod traits;
pub mod validate;

pub use labelled::LabelledGraph;
pub use traits::Graph;
