pub mod chorus;
pub mod script;
pub mod voice;

pub use chorus::{Chorus, Speaker};
pub use voice::{StdoutVoice, Transcript};
