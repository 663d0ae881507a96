pub mod cabinet;

pub use cabinet::Cabinet;
