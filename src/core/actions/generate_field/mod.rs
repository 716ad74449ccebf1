pub mod generate_field;
pub mod generate_field_rayon;
pub mod ports;
pub mod residue_walk;
