pub mod film_mode;
pub mod makernote;
pub mod saturation;
pub mod tags;

pub use film_mode::simulation_from_film_mode;
pub use makernote::{collect_tags, FujifilmMakerNote, MakerNoteTag, TagWalker};
pub use saturation::simulation_from_saturation;
