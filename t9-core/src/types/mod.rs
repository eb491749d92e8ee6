pub mod key;
pub mod mode;

pub use key::{HelperKey, Key, KeyId, Timestamp};
pub use mode::InputMode;
