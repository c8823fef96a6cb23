//!
//! The gas chart binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => era_compiler_common::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            era_compiler_common::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let legacy = gas_chart::compute_aggregates(&gas_chart::Implementation::Legacy.measurements())?;
    let optimized =
        gas_chart::compute_aggregates(&gas_chart::Implementation::Optimized.measurements())?;
    if !arguments.quiet {
        print!("{}", gas_chart::Summary::new(&legacy, &optimized));
    }

    let labels = gas_chart::Scenario::ALL.map(|scenario| scenario.label());
    let chart = gas_chart::render(legacy, optimized, labels);

    let paths = gas_chart::save(&chart, arguments.output_path.as_path())?;
    if !arguments.quiet {
        for path in paths.iter() {
            println!("       {} {path:?}", "Saved".bright_green().bold());
        }
    }

    if !arguments.no_display {
        if let Some(path) = paths.first() {
            gas_chart::display(path.as_path())?;
        }
    }

    Ok(())
}
