pub mod attendance;
pub mod event;
pub mod report;
pub mod tag;
pub mod value;
