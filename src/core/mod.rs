pub mod format;
pub mod pad;

pub use crate::domain::model::Timestamp;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
