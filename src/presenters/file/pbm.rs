use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::field::Field;

/// Packs one row MSB first, padding the last byte with zeros. In PBM a set
/// bit is black, so members of the set come out black.
fn pack_row(row: &[bool]) -> Vec<u8> {
    row.chunks(8)
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &member)| member)
                .fold(0u8, |byte, (bit, _)| byte | (0x80 >> bit))
        })
        .collect()
}

pub fn write_pbm(field: &Field, writer: &mut impl Write) -> std::io::Result<()> {
    // PBM header: P4 means binary bitmap, then width and height
    writeln!(writer, "P4")?;
    writeln!(writer, "{} {}", field.width(), field.height())?;

    for row in field.rows() {
        writer.write_all(&pack_row(row))?;
    }

    writer.flush()
}

pub struct PbmFilePresenter {}

impl FilePresenterPort for PbmFilePresenter {
    fn present(&self, field: &Field, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_pbm(field, &mut file)
    }
}

impl Default for PbmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PbmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_is_msb_first_and_padded() {
        let row = [true, false, false, false, false, false, false, true, true, true];

        assert_eq!(pack_row(&row), vec![0b1000_0001, 0b1100_0000]);
    }

    #[test]
    fn test_write_pbm_pads_each_row() {
        let field = Field::from_cells(3, 2, vec![true, false, true, false, true, false]).unwrap();
        let mut out = Vec::new();

        write_pbm(&field, &mut out).unwrap();

        let mut expected = b"P4\n3 2\n".to_vec();
        expected.extend_from_slice(&[0b1010_0000, 0b0100_0000]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_presenter_writes_file() {
        let field = Field::from_cells(9, 1, vec![true; 9]).unwrap();
        let path = std::env::temp_dir().join(format!("fractal_gate_pbm_{}.pbm", std::process::id()));

        PbmFilePresenter::new().present(&field, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, b"P4\n9 1\n\xff\x80".to_vec());
    }
}
