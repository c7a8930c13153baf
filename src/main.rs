use clap::{Arg, ArgAction, Command as ClapCommand};
use std::process;
use log::error;

// Import from your library
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};
use exifkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version("0.1")
        .about("Analyze JPEG/Exif file structure")
        .arg(
            Arg::new("input")
                .help("Input JPEG file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("segments")
                .short('s')
                .long("segments")
                .help("List marker segments without decoding payloads")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "exifkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("exifkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ExifkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
