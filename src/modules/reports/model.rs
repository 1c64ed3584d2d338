pub use gradebook_models::reports::*;
