pub mod draft;
pub mod edit_mode;

pub use draft::EntryDraft;
pub use edit_mode::EditMode;
