use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(raster, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm(raster: &Raster, writer: &mut impl Write) -> std::io::Result<()> {
    // P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "255")?;
    writer.write_all(raster.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_header_precedes_rgb_bytes() {
        let mut raster = Raster::new(2, 1);
        raster.set_pixel(1, 0, Colour::new(1, 2, 3)).unwrap();
        let mut out = Vec::new();

        write_ppm(&raster, &mut out).unwrap();

        assert_eq!(out, b"P6\n2 1\n255\n\x00\x00\x00\x01\x02\x03".to_vec());
    }

    #[test]
    fn test_present_writes_file() {
        let raster = Raster::new(3, 2);
        let path = std::env::temp_dir().join(format!("mandelbrot_ppm_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&raster, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
