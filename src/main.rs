//! genfile's main application entry point.
//! Parses the command line, runs the generation and maps failures to exit codes.

use genfile::{
    cli::{get_args, render_help, Args, Invocation},
    constants::EXIT_USAGE,
    error::Result,
    logger::init_logger,
    processor::generate,
};

/// Main application entry point.
fn main() {
    let args = match get_args() {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{}", render_help());
            std::process::exit(EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };

    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        println!("{}", err);
        std::process::exit(err.exit_code());
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the variable file
/// 2. Loads the template file or directory
/// 3. Renders every template into the output directory
fn run(args: &Args) -> Result<()> {
    let generated = generate(&args.varfile, &args.input, &args.output)?;
    println!("Generated {} file(s) in '{}'.", generated.len(), args.output.display());
    Ok(())
}
