use std::path::Path;

use image::ExtendedColorType;

use crate::error::Error;
use crate::Result;

use super::{OutputImage, RasterImage};

pub fn read_image(path: &Path) -> Result<RasterImage> {
    let decoded = image::open(path)
        .map_err(|e| Error::UnableToDecodeImage(path.display().to_string(), e))?;
    let channels = decoded.color().channel_count();
    if channels < 3 {
        return Err(Error::InsufficientColorChannels(channels));
    }
    if channels == 3 {
        let buffer = decoded.into_rgb8();
        let (width, height) = (buffer.width(), buffer.height());
        RasterImage::new(width, height, 3, buffer.into_raw())
    } else {
        let buffer = decoded.into_rgba8();
        let (width, height) = (buffer.width(), buffer.height());
        RasterImage::new(width, height, 4, buffer.into_raw())
    }
}

pub fn write_image(output: &OutputImage, path: &Path) -> Result<()> {
    let color_type = match output.channels {
        1 => ExtendedColorType::L8,
        _ => ExtendedColorType::Rgb8,
    };
    image::save_buffer(path, &output.data, output.width, output.height, color_type)
        .map_err(|e| Error::UnableToEncodeImage(path.display().to_string(), e))?;
    Ok(())
}
