pub mod blockword;
pub mod dom;
pub mod draft;
pub mod encoding;
pub mod error;
pub mod fields;
pub mod level;
pub mod policy;
mod serialize;
pub mod tailor;
mod text;

pub use blockword::BlockWordFilter;
pub use draft::{DesignDraft, DraftOperation, TailorReport};
pub use error::{Error, Result};
pub use fields::Tailorable;
pub use level::TailorLevel;
pub use tailor::{Tailor, TailorOptions, TailorOutput};
