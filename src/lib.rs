use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use threadpool::ThreadPool;

pub use cli::CLIParser;
use error::Error;
use raster::converter::ImageConverter;
use raster::png::{read_image, write_image};
use raster::ColorRepresentation;

mod cli;
pub mod color;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_directory: PathBuf,
    representations: Vec<ColorRepresentation>,
    number_of_threads: usize,
    prefix_output_names: bool,
}

impl Arguments {
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

fn create_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::UnableToCreateOutputDirectory(path.display().to_string(), e))
}

fn output_file_path(arguments: &Arguments, representation: ColorRepresentation) -> PathBuf {
    let file_name = if arguments.prefix_output_names {
        let input_stem = arguments
            .input_file
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("image");
        format!("{}_{}.png", input_stem, representation.file_stem())
    } else {
        format!("{}.png", representation.file_stem())
    };
    arguments.output_directory.join(file_name)
}

pub fn convert_image(arguments: &Arguments) -> Result<()> {
    let image = read_image(&arguments.input_file)?;
    log::info!(
        "loaded '{}' ({}x{}, {} channels)",
        arguments.input_file.display(),
        image.width(),
        image.height(),
        image.channels()
    );
    create_output_directory(&arguments.output_directory)?;
    let threadpool = ThreadPool::new(arguments.number_of_threads);
    let converter = ImageConverter::new(Arc::new(image), &threadpool);
    let outputs = converter.convert(&arguments.representations);
    for output in &outputs {
        let path = output_file_path(arguments, output.representation());
        write_image(output, &path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
