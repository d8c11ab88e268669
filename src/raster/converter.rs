use std::sync::mpsc;
use std::sync::Arc;

use threadpool::ThreadPool;

use super::{ColorRepresentation, OutputImage, RasterImage};

pub struct ImageConverter<'a> {
    image: Arc<RasterImage>,
    threadpool: &'a ThreadPool,
}

impl<'a> ImageConverter<'a> {
    pub fn new(image: Arc<RasterImage>, threadpool: &'a ThreadPool) -> Self {
        ImageConverter { image, threadpool }
    }

    pub fn convert(&self, representations: &[ColorRepresentation]) -> Vec<OutputImage> {
        let (sender, receiver) = mpsc::channel();
        for (index, &representation) in representations.iter().enumerate() {
            let image = Arc::clone(&self.image);
            let sender = sender.clone();
            self.threadpool.execute(move || {
                let output = render_representation(&image, representation);
                // The receiver outlives every worker.
                let _ = sender.send((index, output));
            });
        }
        drop(sender);
        let mut outputs: Vec<(usize, OutputImage)> = receiver.iter().collect();
        outputs.sort_by_key(|(index, _)| *index);
        outputs.into_iter().map(|(_, output)| output).collect()
    }
}

fn render_representation(
    image: &RasterImage,
    representation: ColorRepresentation,
) -> OutputImage {
    let width = image.width();
    let height = image.height();
    let channels = representation.output_channels();
    let mut data =
        Vec::with_capacity(width as usize * height as usize * channels as usize);
    for y in 0..height {
        for x in 0..width {
            representation.append_quantized(&image.pixel(x, y), &mut data);
        }
    }
    log::debug!(
        "rendered {} representation ({}x{}, {} channels)",
        representation.file_stem(),
        width,
        height,
        channels
    );
    OutputImage {
        representation,
        width,
        height,
        channels,
        data,
    }
}
