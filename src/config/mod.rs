pub mod settings;

pub use settings::{Settings, DEFAULT_READ_BUFFER_SIZE};
