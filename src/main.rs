use std::env::args_os;
use std::process::ExitCode;

use colorspace_converter::{convert_image, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match convert_image(&arguments) {
        Ok(_) => {
            println!("Images saved to {}", arguments.output_directory().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
