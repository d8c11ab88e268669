use std::f32::consts::PI;

const D65_REFERENCE_WHITE: [f32; 3] = [0.95047, 1.0, 1.08883];

#[derive(Clone, Copy)]
pub struct RGBColorFormat {
    red: u8,
    green: u8,
    blue: u8,
}

impl RGBColorFormat {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColorFormat { red, green, blue }
    }

    fn normalized(&self) -> (f32, f32, f32) {
        (
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        )
    }
}

pub struct GrayscaleColorFormat {
    pub luma: u8,
}

impl From<&RGBColorFormat> for GrayscaleColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let luma = 0.299_f64 * rgb.red as f64
            + 0.587_f64 * rgb.green as f64
            + 0.114_f64 * rgb.blue as f64;
        GrayscaleColorFormat { luma: luma as u8 }
    }
}

pub struct HSVColorFormat {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl From<&RGBColorFormat> for HSVColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let (red, green, blue) = rgb.normalized();
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        if delta == 0.0 {
            return HSVColorFormat {
                hue: 0.0,
                saturation: 0.0,
                value: max,
            };
        }
        HSVColorFormat {
            hue: hue_from_deltas(red, green, blue, max, delta),
            saturation: delta / max,
            value: max,
        }
    }
}

impl HSVColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            quantize_hue(self.hue),
            quantize_unit(self.saturation),
            quantize_unit(self.value),
        ]
    }
}

pub struct HSLColorFormat {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl From<&RGBColorFormat> for HSLColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let (red, green, blue) = rgb.normalized();
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let lightness = (max + min) / 2.0;
        if delta == 0.0 {
            return HSLColorFormat {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        HSLColorFormat {
            hue: hue_from_deltas(red, green, blue, max, delta),
            saturation,
            lightness,
        }
    }
}

impl HSLColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            quantize_hue(self.hue),
            quantize_unit(self.saturation),
            quantize_unit(self.lightness),
        ]
    }
}

pub struct YCbCrColorFormat {
    pub luma: f32,
    pub chroma_blue: f32,
    pub chroma_red: f32,
}

impl From<&RGBColorFormat> for YCbCrColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let red = rgb.red as f32;
        let green = rgb.green as f32;
        let blue = rgb.blue as f32;
        YCbCrColorFormat {
            luma: 0.299 * red + 0.587 * green + 0.114 * blue,
            chroma_blue: 128.0 - 0.168736 * red - 0.331264 * green + 0.5 * blue,
            chroma_red: 128.0 + 0.5 * red - 0.418688 * green - 0.081312 * blue,
        }
    }
}

impl YCbCrColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            self.luma as u8,
            self.chroma_blue as u8,
            self.chroma_red as u8,
        ]
    }
}

pub struct XYZColorFormat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<&RGBColorFormat> for XYZColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let (red, green, blue) = rgb.normalized();
        let red = srgb_inverse_gamma(red);
        let green = srgb_inverse_gamma(green);
        let blue = srgb_inverse_gamma(blue);
        XYZColorFormat {
            x: red * 0.4124 + green * 0.3576 + blue * 0.1805,
            y: red * 0.2126 + green * 0.7152 + blue * 0.0722,
            z: red * 0.0193 + green * 0.1192 + blue * 0.9505,
        }
    }
}

impl XYZColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            quantize_unit(self.x),
            quantize_unit(self.y),
            quantize_unit(self.z),
        ]
    }
}

pub struct LabColorFormat {
    pub lightness: f32,
    pub a: f32,
    pub b: f32,
}

impl From<&XYZColorFormat> for LabColorFormat {
    fn from(xyz: &XYZColorFormat) -> Self {
        let fx = lab_compound(xyz.x / D65_REFERENCE_WHITE[0]);
        let fy = lab_compound(xyz.y / D65_REFERENCE_WHITE[1]);
        let fz = lab_compound(xyz.z / D65_REFERENCE_WHITE[2]);
        LabColorFormat {
            lightness: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<&RGBColorFormat> for LabColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        LabColorFormat::from(&XYZColorFormat::from(rgb))
    }
}

impl LabColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            (self.lightness / 100.0 * 255.0) as u8,
            ((self.a + 128.0) / 255.0 * 255.0) as u8,
            ((self.b + 128.0) / 255.0 * 255.0) as u8,
        ]
    }
}

pub struct HSIColorFormat {
    pub hue: f32,
    pub saturation: f32,
    pub intensity: f32,
}

impl From<&RGBColorFormat> for HSIColorFormat {
    fn from(rgb: &RGBColorFormat) -> Self {
        let (red, green, blue) = rgb.normalized();
        let intensity = (red + green + blue) / 3.0;
        let min = red.min(green).min(blue);
        let saturation = if intensity == 0.0 {
            0.0
        } else {
            1.0 - min / intensity
        };
        let hue = if saturation == 0.0 {
            0.0
        } else {
            hue_from_chromatic_angle(red, green, blue)
        };
        HSIColorFormat {
            hue,
            saturation,
            intensity,
        }
    }
}

impl HSIColorFormat {
    pub fn quantized(&self) -> [u8; 3] {
        [
            quantize_hue(self.hue),
            quantize_unit(self.saturation),
            quantize_unit(self.intensity),
        ]
    }
}

fn hue_from_deltas(red: f32, green: f32, blue: f32, max: f32, delta: f32) -> f32 {
    let hue = if max == red {
        60.0 * ((green - blue) / delta)
    } else if max == green {
        60.0 * (((blue - red) / delta) + 2.0)
    } else {
        60.0 * (((red - green) / delta) + 4.0)
    };
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

fn hue_from_chromatic_angle(red: f32, green: f32, blue: f32) -> f32 {
    let numerator = ((red - green) + (red - blue)) / 2.0;
    let denominator = ((red - green) * (red - green) + (red - blue) * (green - blue)).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    // Rounding can push the ratio just outside acos's domain.
    let theta = (numerator / denominator).clamp(-1.0, 1.0).acos();
    let radians = if blue > green { 2.0 * PI - theta } else { theta };
    radians.to_degrees()
}

fn srgb_inverse_gamma(value: f32) -> f32 {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

fn lab_compound(value: f32) -> f32 {
    if value > 0.008856 {
        value.cbrt()
    } else {
        7.787 * value + 16.0 / 116.0
    }
}

fn quantize_hue(hue: f32) -> u8 {
    (hue / 360.0 * 255.0) as u8
}

fn quantize_unit(value: f32) -> u8 {
    (value * 255.0) as u8
}
