//! # Bendlab CLI
//!
//! Interactive console for measuring Young's modulus of a thin rod from
//! bending-test readings. Sequences the prompt loops, runs the calculation
//! for the chosen bending mode, prints the full report, and optionally
//! writes the abbreviated report next to the current working directory.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use bendlab_core::calculations::bending::{calculate, BendingInput};
use bendlab_core::errors::BendResult;
use bendlab_core::report::{self, Comparison};

mod prompts;

use prompts::Prompter;

const BANNER_WIDTH: usize = 80;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match run(&mut prompter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> BendResult<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    prompter.say(&banner)?;
    prompter.say("YOUNG'S MODULUS MEASUREMENT SYSTEM")?;
    prompter.say("For Thin Sheet-Like Rod Materials")?;
    prompter.say(&banner)?;

    let material = prompter.select_material()?;
    let geometry = prompter.collect_geometry()?;
    let mode = prompter.select_bending_mode()?;
    let (readings, _weight_increment) = prompter.collect_readings()?;

    let input = BendingInput {
        geometry,
        mode,
        readings,
    };
    let result = calculate(&input)?;
    let comparison = Comparison::new(result.average_gpa, material.youngs_modulus_gpa);

    prompter.say(&report::render_summary(material, &input, &result, &comparison))?;

    if prompter.confirm_save()? {
        let filename = report::report_filename(material, input.mode);
        let contents = report::render_file_report(material, &input, &result);
        report::save_report(Path::new(&filename), &contents)?;
        prompter.say(&format!("\nResults saved to {filename}"))?;
    }

    prompter.say("\nThank you for using the Young's Modulus Measurement System!")?;
    prompter.say(&banner)?;
    Ok(())
}
