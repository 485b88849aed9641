use std::path::PathBuf;

use clap::Parser;
use xsd_dto_generator::generator::Generator;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "The source file or URL")]
    pub input: String,

    #[arg(short, long, help = "The file to write; standard output if omitted")]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Generator::default())]
    pub generator: Generator,

    #[arg(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    #[arg(
        long,
        default_value = "ArrayOf",
        help = "Name prefix marking a referenced type as a list of the remainder"
    )]
    pub array_prefix: String,

    #[arg(long, help = "Don't treat ArrayOf* type names as lists")]
    pub no_array_heuristic: bool,

    #[arg(long, help = "Print the normalized schema model as JSON instead of declarations")]
    pub dump_model: bool,
}
