//! # Interactive Prompts
//!
//! Line-based collection of the experiment inputs. Every prompt follows the
//! same contract: malformed or out-of-domain input prints a corrective
//! message and asks again, forever. Bad operator input is an expected
//! branch, not an error; the only error these methods return is
//! [`BendError::Console`] when the input stream itself closes.
//!
//! Two retry shapes are deliberate and must stay distinct:
//! - geometry re-asks the whole length/breadth/thickness triplet when any
//!   field fails,
//! - a bad deflection re-asks only that one reading.

use std::io::{BufRead, Write};

use bendlab_core::errors::{BendError, BendResult};
use bendlab_core::loads::{BendingMode, Reading};
use bendlab_core::materials::{self, MaterialEntry};
use bendlab_core::specimen::RodGeometry;

const SECTION_WIDTH: usize = 60;
const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const INVALID_VALUE: &str = "Invalid input. Please enter a numerical value.";

/// Console prompt/response loop over any line-oriented reader and writer.
///
/// Generic over the streams so the retry behavior is testable with
/// scripted input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Write one line to the console.
    pub fn say(&mut self, text: &str) -> BendResult<()> {
        writeln!(self.output, "{text}").map_err(console_error)
    }

    fn section(&mut self, title: &str) -> BendResult<()> {
        let rule = "=".repeat(SECTION_WIDTH);
        self.say("")?;
        self.say(&rule)?;
        self.say(title)?;
        self.say(&rule)
    }

    fn ask(&mut self, prompt: &str) -> BendResult<String> {
        write!(self.output, "{prompt}").map_err(console_error)?;
        self.output.flush().map_err(console_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(console_error)?;
        if read == 0 {
            return Err(BendError::console("input stream closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for an integer; `None` means the answer did not parse.
    fn try_ask_i64(&mut self, prompt: &str) -> BendResult<Option<i64>> {
        Ok(self.ask(prompt)?.parse().ok())
    }

    /// Ask for a real; `None` means the answer did not parse.
    fn try_ask_f64(&mut self, prompt: &str) -> BendResult<Option<f64>> {
        Ok(self.ask(prompt)?.parse().ok())
    }

    /// Display the catalog and read a material choice.
    pub fn select_material(&mut self) -> BendResult<&'static MaterialEntry> {
        self.section("AVAILABLE MATERIALS IN DATABASE")?;
        for (i, entry) in materials::catalog().iter().enumerate() {
            self.say(&format!(
                "{}. {:<20} - Young's Modulus: {} GPa",
                i + 1,
                entry.name,
                entry.youngs_modulus_gpa
            ))?;
        }
        self.say(&"=".repeat(SECTION_WIDTH))?;
        self.say("\nEnter the number corresponding to your material:")?;

        loop {
            match self.try_ask_i64("Your choice: ")? {
                Some(choice) => {
                    let entry = usize::try_from(choice)
                        .ok()
                        .and_then(|c| materials::get(c).ok());
                    match entry {
                        Some(entry) => return Ok(entry),
                        None => self.say(&format!(
                            "Please enter a number between 1 and {}",
                            materials::catalog().len()
                        ))?,
                    }
                }
                None => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// Read the rod dimensions.
    ///
    /// Any parse failure or non-positive value rejects the whole triplet
    /// and starts over from the length prompt.
    pub fn collect_geometry(&mut self) -> BendResult<RodGeometry> {
        self.section("ENTER ROD DIMENSIONS")?;

        loop {
            let Some(length) = self.try_ask_f64("Length of rod (in cm): ")? else {
                self.say("Invalid input. Please enter numerical values.")?;
                continue;
            };
            let Some(breadth) = self.try_ask_f64("Breadth of rod (in cm): ")? else {
                self.say("Invalid input. Please enter numerical values.")?;
                continue;
            };
            let Some(thickness) = self.try_ask_f64("Width/Thickness of rod (in cm): ")? else {
                self.say("Invalid input. Please enter numerical values.")?;
                continue;
            };

            if length <= 0.0 || breadth <= 0.0 || thickness <= 0.0 {
                self.say("All dimensions must be positive values. Please try again.")?;
                continue;
            }
            return Ok(RodGeometry::new(length, breadth, thickness));
        }
    }

    /// Read the bending-mode choice.
    pub fn select_bending_mode(&mut self) -> BendResult<BendingMode> {
        self.section("SELECT BENDING TYPE")?;
        for mode in BendingMode::ALL {
            self.say(&format!("{}. {}", mode.mode_number(), mode.display_name()))?;
        }

        loop {
            match self.try_ask_i64("\nYour choice (1 or 2): ")? {
                Some(choice) => {
                    let mode = usize::try_from(choice)
                        .ok()
                        .and_then(|c| BendingMode::from_choice(c).ok());
                    match mode {
                        Some(mode) => return Ok(mode),
                        None => self.say("Please enter 1 or 2")?,
                    }
                }
                None => self.say("Invalid input. Please enter 1 or 2.")?,
            }
        }
    }

    /// Read the reading count, the weight increment, and one deflection per
    /// reading. Weights are derived, never entered. A bad deflection
    /// re-asks only that reading.
    pub fn collect_readings(&mut self) -> BendResult<(Vec<Reading>, f64)> {
        self.section("MEASUREMENT READINGS")?;

        let count = loop {
            match self.try_ask_i64("How many readings do you want to take? ")? {
                Some(n) if n > 0 => break n as usize,
                Some(_) => self.say("Please enter a positive number of readings.")?,
                None => self.say(INVALID_NUMBER)?,
            }
        };

        let weight_increment = loop {
            match self.try_ask_f64("Weight added at each reading (in grams): ")? {
                Some(w) if w > 0.0 => break w,
                Some(_) => self.say("Weight must be positive.")?,
                None => self.say(INVALID_VALUE)?,
            }
        };

        self.say("\nEnter the depression/elevation at each reading (in cm):")?;
        self.say("(Positive for depression/downward, Negative for elevation/upward)")?;

        let mut readings = Vec::with_capacity(count);
        for index in 1..=count {
            let weight_g = weight_increment * index as f64;
            let deflection_cm = loop {
                let prompt = format!("Reading {index} (Weight: {weight_g} g): ");
                match self.try_ask_f64(&prompt)? {
                    Some(value) => break value,
                    None => self.say(INVALID_VALUE)?,
                }
            };
            readings.push(Reading::from_increment(index, weight_increment, deflection_cm));
        }

        Ok((readings, weight_increment))
    }

    /// Read the save decision. Affirmative only on "yes" or "y"
    /// (case-insensitive); any other answer declines without re-asking.
    pub fn confirm_save(&mut self) -> BendResult<bool> {
        let answer = self
            .ask("\nWould you like to save these results to a file? (yes/no): ")?
            .to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}

fn console_error(e: std::io::Error) -> BendError {
    BendError::console(e.to_string())
}
