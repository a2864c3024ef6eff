mod audio;
mod convert;
mod error;
mod health;
mod voices;

pub use audio::audio_handler;
pub use convert::{ConvertResponse, convert_handler, secure_filename, upload_filename};
pub use error::ErrorResponse;
pub use health::health_handler;
pub use voices::voices_handler;
