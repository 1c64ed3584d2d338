pub use gradebook_models::users::{ChangePasswordDto, User};
