pub mod genre;
pub mod lyrics;
pub mod recorder;
pub mod upload;

pub use genre::GenreSection;
pub use lyrics::{TextKind, TextSection};
pub use recorder::RecorderSection;
pub use upload::UploadSection;
