use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("quadpak")
        .about("Compress PPM images into 2x2 block codewords and back")
        .arg(Arg::new("compress")
            .short('c')
            .help("Compress a PPM image, this is the default")
            .action(ArgAction::SetTrue)
            .overrides_with("decompress"))
        .arg(Arg::new("decompress")
            .short('d')
            .help("Decompress a compressed image back to PPM")
            .action(ArgAction::SetTrue)
            .overrides_with("compress"))
        .arg(Arg::new("file")
            .help("Input file to read data from, standard input when absent")
            .action(ArgAction::Set))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
