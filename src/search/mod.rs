pub mod catalog;
pub mod filter;
pub mod suggestions;
pub mod traits;
pub mod types;

pub use catalog::MockCatalog;
pub use filter::{filter, matches};
pub use suggestions::{suggest, Suggestion};
pub use traits::PropertySource;
pub use types::{Choice, FilterSpec};
