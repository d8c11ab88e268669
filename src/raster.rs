use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::color::{
    GrayscaleColorFormat, HSIColorFormat, HSLColorFormat, HSVColorFormat, LabColorFormat,
    RGBColorFormat, XYZColorFormat, YCbCrColorFormat,
};
use crate::error::Error;

pub mod converter;
pub mod png;

pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> crate::Result<Self> {
        if channels < 3 {
            return Err(Error::InsufficientColorChannels(channels));
        }
        let expected_length = width as usize * height as usize * channels as usize;
        if data.len() != expected_length {
            return Err(Error::MismatchedBufferSize(expected_length, data.len()));
        }
        Ok(RasterImage {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel(&self, x: u32, y: u32) -> RGBColorFormat {
        let index = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        RGBColorFormat::new(self.data[index], self.data[index + 1], self.data[index + 2])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRepresentation {
    Grayscale,
    Hsv,
    Hsl,
    YCbCr,
    Xyz,
    Lab,
    Hsi,
}

impl ColorRepresentation {
    pub fn output_channels(&self) -> u8 {
        match self {
            Self::Grayscale => 1,
            _ => 3,
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
            Self::YCbCr => "ycbcr",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Hsi => "hsi",
        }
    }

    pub fn append_quantized(&self, rgb: &RGBColorFormat, buffer: &mut Vec<u8>) {
        match self {
            Self::Grayscale => buffer.push(GrayscaleColorFormat::from(rgb).luma),
            Self::Hsv => buffer.extend_from_slice(&HSVColorFormat::from(rgb).quantized()),
            Self::Hsl => buffer.extend_from_slice(&HSLColorFormat::from(rgb).quantized()),
            Self::YCbCr => buffer.extend_from_slice(&YCbCrColorFormat::from(rgb).quantized()),
            Self::Xyz => buffer.extend_from_slice(&XYZColorFormat::from(rgb).quantized()),
            Self::Lab => buffer.extend_from_slice(&LabColorFormat::from(rgb).quantized()),
            Self::Hsi => buffer.extend_from_slice(&HSIColorFormat::from(rgb).quantized()),
        }
    }
}

impl ValueEnum for ColorRepresentation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Grayscale,
            Self::Hsv,
            Self::Hsl,
            Self::YCbCr,
            Self::Xyz,
            Self::Lab,
            Self::Hsi,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.file_stem()))
    }
}

pub struct OutputImage {
    representation: ColorRepresentation,
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl OutputImage {
    pub fn representation(&self) -> ColorRepresentation {
        self.representation
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
