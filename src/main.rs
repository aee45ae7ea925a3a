//! debber's main application entry point.
//! Parses the command line and dispatches to the `new` or `create` command.

use debber::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::create_debian_dir,
    renderer::MiniJinjaRenderer,
    template::write_descriptor_template,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Executes the selected command.
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New => {
            log::info!("Generating {}", args.name.display());
            write_descriptor_template(&args.name)?;
        }
        Command::Create { output_dir } => {
            log::info!("Creating the debian/ directory from {}", args.name.display());
            let engine = MiniJinjaRenderer::new();
            let debian_dir = create_debian_dir(&engine, &args.name, &output_dir)?;
            println!("Generated {}", debian_dir.display());
        }
    }
    Ok(())
}
