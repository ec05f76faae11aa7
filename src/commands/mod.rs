mod categories;
mod extract;

pub use categories::run_categories;
pub use extract::run_extract;
