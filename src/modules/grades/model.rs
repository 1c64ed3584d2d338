pub use gradebook_models::grades::*;
