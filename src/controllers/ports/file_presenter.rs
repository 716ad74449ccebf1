use std::path::Path;

use crate::core::data::field::Field;

pub trait FilePresenterPort {
    fn present(&self, field: &Field, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
