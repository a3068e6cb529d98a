//! Interactive menu loop.
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so it
//! runs the same against a terminal or in-memory buffers. End of input at
//! any prompt ends the session.

use std::io::{self, BufRead, Write};

use flightdesk_core::error::CoreError;
use flightdesk_core::normalize::NormalizedBatch;
use flightdesk_core::validation::{parse_airport_code, parse_flight_date, parse_flight_id};

use crate::service::FlightLookup;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlightById,
    FlightsByDate,
    DelayedByAirline,
    DelayedByAirport,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::FlightById,
        MenuChoice::FlightsByDate,
        MenuChoice::DelayedByAirline,
        MenuChoice::DelayedByAirport,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::FlightById => 1,
            Self::FlightsByDate => 2,
            Self::DelayedByAirline => 3,
            Self::DelayedByAirport => 4,
            Self::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FlightById => "Show flight by ID",
            Self::FlightsByDate => "Show flights by date",
            Self::DelayedByAirline => "Delayed flights by airline",
            Self::DelayedByAirport => "Delayed flights by origin airport",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu number typed by the operator.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

/// One interactive session bound to a lookup service and an I/O pair.
pub struct Session<'a, R, W> {
    lookup: &'a FlightLookup,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(lookup: &'a FlightLookup, input: R, output: W) -> Self {
        Self {
            lookup,
            input,
            output,
        }
    }

    /// Consume the session and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and dispatch choices until Exit or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        while let Some(choice) = self.choose()? {
            tracing::debug!(choice = choice.label(), "Menu choice");
            let batch = match choice {
                MenuChoice::Exit => break,
                MenuChoice::FlightById => {
                    let Some(id) = self.read_valid("Enter flight ID: ", parse_flight_id)? else {
                        break;
                    };
                    self.lookup.find_by_id(id).await
                }
                MenuChoice::FlightsByDate => {
                    let Some(date) =
                        self.read_valid("Enter date in DD/MM/YYYY format: ", parse_flight_date)?
                    else {
                        break;
                    };
                    self.lookup.find_by_date(date).await
                }
                MenuChoice::DelayedByAirline => {
                    let Some(airline) = self.prompt("Enter airline name: ")? else {
                        break;
                    };
                    self.lookup.find_delayed_by_airline(&airline).await
                }
                MenuChoice::DelayedByAirport => {
                    let Some(code) =
                        self.read_valid("Enter origin airport IATA code: ", parse_airport_code)?
                    else {
                        break;
                    };
                    self.lookup.find_delayed_by_airport(&code).await
                }
            };
            if !self.show_results(batch)? {
                break;
            }
        }
        Ok(())
    }

    fn choose(&mut self) -> io::Result<Option<MenuChoice>> {
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        loop {
            let Some(line) = self.prompt("")? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::from_input(&line) {
                return Ok(Some(choice));
            }
            writeln!(self.output, "Try again...")?;
        }
    }

    /// Print a batch and offer export when it is complete and non-empty.
    /// Returns `false` when input ran out.
    fn show_results(&mut self, batch: NormalizedBatch) -> io::Result<bool> {
        writeln!(self.output, "Got {} results.", batch.rows)?;
        for record in &batch.records {
            writeln!(self.output, "{record}")?;
        }
        if let Some(failure) = &batch.failure {
            writeln!(self.output, "Error showing results: {}", failure.error)?;
            return Ok(true);
        }
        if batch.records.is_empty() {
            return Ok(true);
        }

        let Some(answer) =
            self.prompt("Would you like to export this data to a CSV file? (y/n): ")?
        else {
            return Ok(false);
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(true);
        }
        let Some(name) = self.prompt("Enter filename (e.g., delayed_flights.csv): ")? else {
            return Ok(false);
        };
        match self.lookup.export_to_file(&batch.records, &name) {
            Ok(path) => writeln!(
                self.output,
                "Data successfully exported to {}",
                path.display()
            )?,
            Err(e) => writeln!(self.output, "Error exporting to CSV: {e}")?,
        }
        Ok(true)
    }

    /// Prompt until `parse` accepts the input.
    fn read_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, CoreError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Try again... {e}")?,
            }
        }
    }

    /// Write `text`, then read one line without its terminator.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(
                MenuChoice::from_input(&choice.number().to_string()),
                Some(choice)
            );
        }
    }

    #[test]
    fn menu_rejects_unknown_input() {
        assert_eq!(MenuChoice::from_input("0"), None);
        assert_eq!(MenuChoice::from_input("6"), None);
        assert_eq!(MenuChoice::from_input("exit"), None);
        assert_eq!(MenuChoice::from_input(" 5 "), Some(MenuChoice::Exit));
    }
}
