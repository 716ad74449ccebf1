pub mod field_generator;
