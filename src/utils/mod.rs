pub mod human_bytes;
pub mod tools;

pub use self::human_bytes::HumanBytes;
pub use self::tools::show_rust_core_dependencies;
