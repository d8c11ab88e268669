use crate::raster::ColorRepresentation;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_representations_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_prefix_output_names_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_representations_argument(command: Command) -> Command {
        command.arg(Self::create_representations_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_prefix_output_names_argument(command: Command) -> Command {
        command.arg(Self::create_prefix_output_names_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIR> "Directory the converted images are written to")
            .default_value("output")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_representations_argument() -> Arg {
        arg!(representations: -r --representations <REPRESENTATION> "Color representations to produce")
            .num_args(1..)
            .default_values(["grayscale", "hsv", "hsl", "ycbcr", "xyz", "lab", "hsi"])
            .value_parser(value_parser!(ColorRepresentation))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_prefix_output_names_argument() -> Arg {
        arg!(prefix_output_names: -p --prefix_output_names "Prefix output file names with the input file stem")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            representations: Self::extract_representations_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            prefix_output_names: Self::extract_prefix_output_names_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset")
            .clone()
    }

    fn extract_representations_argument(matches: &ArgMatches) -> Vec<ColorRepresentation> {
        matches
            .get_many::<ColorRepresentation>("representations")
            .expect("Representations must be provided, but were unset")
            .copied()
            .collect()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_prefix_output_names_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("prefix_output_names")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, ColorRepresentation};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.png";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_output_directory_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_directory_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--output_directory",
            "converted",
        ]);
        let output_directory = CLIParser::extract_output_directory_argument(&matches);
        assert_eq!(output_directory.file_name().unwrap(), "converted");
    }

    #[test]
    fn parse_representations_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_representations_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--representations",
            "hsv",
            "lab",
        ]);
        let representations = CLIParser::extract_representations_argument(&matches);
        assert_eq!(
            representations,
            vec![ColorRepresentation::Hsv, ColorRepresentation::Lab]
        );
    }

    #[test]
    fn parse_representations_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_representations_argument(command);
        let result = command.try_get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--representations",
            "cmyk",
        ]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for representations not detected");
        }
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.png";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path, "-t", "8"]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_directory.file_name().unwrap(),
            "output",
            "output directory does not match"
        );
        assert_eq!(
            arguments.representations.len(),
            7,
            "all representations should be selected by default"
        );
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
        assert!(
            !arguments.prefix_output_names,
            "prefix_output_names should default to false"
        );
    }
}
