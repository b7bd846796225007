pub mod add;
pub mod log;
pub mod observable;
pub mod projection;
pub mod store;
