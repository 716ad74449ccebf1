pub mod admission;
pub mod errors;
pub mod generate_field;
pub mod marshal_bitmap;
pub mod race;
