use std::fmt::Display;

use image::ImageError;

#[derive(Debug)]
pub enum Error {
    UnableToDecodeImage(String, ImageError),
    InsufficientColorChannels(u8),
    MismatchedBufferSize(usize, usize),
    UnableToCreateOutputDirectory(String, std::io::Error),
    UnableToEncodeImage(String, ImageError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::InsufficientColorChannels(channels) => {
                write!(
                    f,
                    "Image has {} color channels, but at least 3 are required",
                    channels
                )
            }
            Self::MismatchedBufferSize(expected, actual) => {
                write!(
                    f,
                    "Pixel buffer holds {} bytes, but the image dimensions require {}",
                    actual, expected
                )
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(f, "Unable to create output directory '{}': {}", path, error)
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to write image '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
