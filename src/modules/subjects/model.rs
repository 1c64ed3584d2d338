pub use gradebook_models::subjects::*;
