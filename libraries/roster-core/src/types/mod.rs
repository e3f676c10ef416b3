mod ids;
mod user;

pub use ids::IdentificationNumber;
pub use user::{NewUser, RecordState, User, UserChanges};
