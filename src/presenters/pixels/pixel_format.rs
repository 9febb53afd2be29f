//! Conversion from the renderer's RGB raster to the RGBA frame a GPU surface expects.

use crate::core::data::raster::Raster;

/// Copies every raster pixel into `dst`, setting alpha to 255.
///
/// # Panics
/// Panics if `dst` is not exactly four bytes per raster pixel.
pub fn copy_raster_into_rgba(raster: &Raster, dst: &mut [u8]) {
    let expected_dst_len = raster.width() as usize * raster.height() as usize * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "frame length {} does not match expected {} for {}x{}",
        dst.len(),
        expected_dst_len,
        raster.width(),
        raster.height()
    );

    for (src_pixel, dst_pixel) in raster.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_copy_known_values() {
        let mut raster = Raster::new(2, 2);
        raster.set_pixel(0, 0, Colour::new(255, 0, 0)).unwrap();
        raster.set_pixel(1, 0, Colour::new(0, 255, 0)).unwrap();
        raster.set_pixel(0, 1, Colour::new(0, 0, 255)).unwrap();
        raster.set_pixel(1, 1, Colour::new(255, 255, 255)).unwrap();
        let mut dst = vec![0; 16];

        copy_raster_into_rgba(&raster, &mut dst);

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_alpha_is_opaque_for_black() {
        let raster = Raster::new(3, 1);
        let mut dst = vec![7; 12];

        copy_raster_into_rgba(&raster, &mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_mismatched_frame_panics() {
        let raster = Raster::new(2, 2);
        let mut dst = vec![0; 12];

        copy_raster_into_rgba(&raster, &mut dst);
    }
}
