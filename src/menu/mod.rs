//! Interactive read-dispatch-render loop.
//!
//! `Menu` borrows a `Catalog`, owns the RNG used for random picks and art,
//! and runs against any `BufRead`/`Write` pair. The loop has two states:
//! it keeps running until an exit command or end of input.

pub mod render;

use crate::art;
use crate::catalog::Catalog;
use anyhow::{Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// A recognized menu command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    FindByName,
    Random,
    Exit,
}

impl MenuCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCommand::List => "list",
            MenuCommand::FindByName => "find",
            MenuCommand::Random => "random",
            MenuCommand::Exit => "exit",
        }
    }
}

impl TryFrom<&str> for MenuCommand {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "1" | "list" | "ls" => Ok(MenuCommand::List),
            "2" | "find" | "name" | "search" => Ok(MenuCommand::FindByName),
            "3" | "random" | "rand" => Ok(MenuCommand::Random),
            "4" | "exit" | "quit" | "q" => Ok(MenuCommand::Exit),
            other => bail!("Unknown menu option: {other}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    ExitCommand,
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOutcome {
    pub reason: ExitReason,
    /// Recognized commands dispatched, including the final exit.
    pub commands_handled: usize,
    pub rejected_inputs: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOptions {
    pub show_art: bool,
    pub reveal_pause: Duration,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            show_art: true,
            reveal_pause: Duration::ZERO,
        }
    }
}

pub struct Menu<'c, R> {
    catalog: &'c Catalog,
    rng: R,
    options: MenuOptions,
    state: MenuState,
}

impl<'c, R: Rng> Menu<'c, R> {
    pub fn new(catalog: &'c Catalog, rng: R, options: MenuOptions) -> Self {
        Self {
            catalog,
            rng,
            options,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run until an exit command or end of input.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<MenuOutcome>
    where
        I: BufRead,
        O: Write,
    {
        if self.options.show_art {
            write!(output, "{}", art::random_banner(&mut self.rng))?;
        }

        let mut commands_handled = 0;
        let mut rejected_inputs = 0;
        let mut reason = ExitReason::ExitCommand;

        while self.state == MenuState::Running {
            if self.options.show_art {
                writeln!(output, "{}", art::menu_decoration())?;
            }
            render::write_menu(output)?;
            let Some(line) = read_line(input)? else {
                writeln!(output)?;
                writeln!(output, "Goodbye!")?;
                self.state = MenuState::Terminated;
                reason = ExitReason::EndOfInput;
                break;
            };
            writeln!(output)?;

            match MenuCommand::try_from(line.as_str()) {
                Ok(command) => {
                    debug!(command = command.as_str(), "dispatching");
                    commands_handled += 1;
                    self.dispatch(command, input, output)?;
                }
                Err(err) => {
                    debug!(input = %line.trim(), "{err}");
                    rejected_inputs += 1;
                    writeln!(output, "Invalid option. Please try again.")?;
                }
            }
        }

        info!(?reason, commands_handled, rejected_inputs, "menu terminated");
        Ok(MenuOutcome {
            reason,
            commands_handled,
            rejected_inputs,
        })
    }

    /// Execute one command. `Exit` moves the menu to `Terminated`.
    pub fn dispatch<I, O>(
        &mut self,
        command: MenuCommand,
        input: &mut I,
        output: &mut O,
    ) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        match command {
            MenuCommand::List => {
                self.decorate(output)?;
                render::write_species_table(output, self.catalog.list_all())?;
            }
            MenuCommand::FindByName => {
                write!(output, "Enter monkey name: ")?;
                output.flush()?;
                let name = read_line(input)?.unwrap_or_default();
                if name.trim().is_empty() {
                    debug!("empty name rejected");
                    writeln!(output, "Please enter a monkey name.")?;
                    return Ok(());
                }
                self.decorate(output)?;
                match self.catalog.find_by_name(&name) {
                    Some(species) => render::write_species_details(output, species)?,
                    None => render::write_not_found(output, &name, self.catalog.names())?,
                }
            }
            MenuCommand::Random => {
                let catalog = self.catalog;
                let species = catalog.pick_random(&mut self.rng)?;
                if !self.options.reveal_pause.is_zero() {
                    writeln!(output, "Picking a monkey...")?;
                    output.flush()?;
                    thread::sleep(self.options.reveal_pause);
                }
                self.decorate(output)?;
                render::write_species_details(output, species)?;
                writeln!(
                    output,
                    "Random monkey accessed {} times.",
                    catalog.random_access_count()
                )?;
            }
            MenuCommand::Exit => {
                writeln!(output, "Goodbye!")?;
                self.state = MenuState::Terminated;
            }
        }
        Ok(())
    }

    fn decorate<O: Write>(&mut self, output: &mut O) -> Result<()> {
        if self.options.show_art {
            write!(output, "{}", art::random_monkey_face(&mut self.rng))?;
            writeln!(output, "{}", art::separator())?;
        }
        Ok(())
    }
}

/// Read one line without its terminator; `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so stray
/// terminal encodings surface as unknown commands or lookup misses.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn plain() -> MenuOptions {
        MenuOptions {
            show_art: false,
            reveal_pause: Duration::ZERO,
        }
    }

    fn session(catalog: &Catalog, script: &str) -> (MenuOutcome, String) {
        let mut menu = Menu::new(catalog, StdRng::seed_from_u64(1), plain());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = menu.run(&mut input, &mut output).unwrap();
        assert_eq!(menu.state(), MenuState::Terminated);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn command_aliases_are_case_and_space_tolerant() {
        assert_eq!(MenuCommand::try_from(" 1 ").unwrap(), MenuCommand::List);
        assert_eq!(MenuCommand::try_from("LIST").unwrap(), MenuCommand::List);
        assert_eq!(MenuCommand::try_from("Find").unwrap(), MenuCommand::FindByName);
        assert_eq!(MenuCommand::try_from("\tRandom\n").unwrap(), MenuCommand::Random);
        assert_eq!(MenuCommand::try_from("4").unwrap(), MenuCommand::Exit);
        assert_eq!(MenuCommand::try_from("EXIT").unwrap(), MenuCommand::Exit);
        assert_eq!(MenuCommand::try_from("quit").unwrap(), MenuCommand::Exit);
        assert!(MenuCommand::try_from("5").is_err());
        assert!(MenuCommand::try_from("").is_err());
    }

    #[test]
    fn exit_command_terminates() {
        let catalog = Catalog::seeded().unwrap();
        let (outcome, text) = session(&catalog, "4\n1\n");
        assert_eq!(outcome.reason, ExitReason::ExitCommand);
        assert_eq!(outcome.commands_handled, 1);
        assert!(text.ends_with("Goodbye!\n"));
        assert!(!text.contains("Baboon"), "list after exit must not run");
    }

    #[test]
    fn end_of_input_terminates() {
        let catalog = Catalog::seeded().unwrap();
        let (outcome, text) = session(&catalog, "1\n");
        assert_eq!(outcome.reason, ExitReason::EndOfInput);
        assert!(text.contains("| 8  | Golden Lion Tamarin"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_input_is_rejected_without_state_change() {
        let catalog = Catalog::seeded().unwrap();
        let (outcome, text) = session(&catalog, "banana\n\n  \n7\nexit\n");
        assert_eq!(outcome.rejected_inputs, 4);
        assert_eq!(outcome.commands_handled, 1);
        assert_eq!(text.matches("Invalid option. Please try again.").count(), 4);
        assert_eq!(catalog.random_access_count(), 0);
    }

    #[test]
    fn find_hit_renders_details() {
        let catalog = Catalog::seeded().unwrap();
        let (_, text) = session(&catalog, "2\n  japanese MACAQUE \nq\n");
        assert!(text.contains("Name: Japanese Macaque"));
        assert!(text.contains("Population: 50,000"));
        assert!(text.contains("Coordinates: 36.0, 138.0"));
        assert!(text.contains("Image: https://example.com/macaque.jpg"));
    }

    #[test]
    fn find_miss_lists_every_name() {
        let catalog = Catalog::seeded().unwrap();
        let (_, text) = session(&catalog, "2\nGorilla\n4\n");
        assert!(text.contains("Monkey 'Gorilla' not found."));
        for name in catalog.names() {
            assert!(text.contains(&format!("  - {name}\n")), "missing {name}");
        }
    }

    #[test]
    fn find_with_empty_name_is_rejected_inline() {
        let catalog = Catalog::seeded().unwrap();
        let (outcome, text) = session(&catalog, "2\n   \n4\n");
        assert!(text.contains("Please enter a monkey name."));
        assert!(!text.contains("not found"));
        assert_eq!(outcome.reason, ExitReason::ExitCommand);
    }

    #[test]
    fn random_reports_running_count() {
        let catalog = Catalog::seeded().unwrap();
        let (outcome, text) = session(&catalog, "3\nrandom\nRAND\n4\n");
        assert_eq!(outcome.commands_handled, 4);
        assert_eq!(catalog.random_access_count(), 3);
        assert!(text.contains("Random monkey accessed 1 times."));
        assert!(text.contains("Random monkey accessed 2 times."));
        assert!(text.contains("Random monkey accessed 3 times."));
    }

    #[test]
    fn art_is_printed_when_enabled() {
        let catalog = Catalog::seeded().unwrap();
        let mut menu = Menu::new(&catalog, StdRng::seed_from_u64(5), MenuOptions::default());
        let mut input = Cursor::new(b"1\n4\n".to_vec());
        let mut output = Vec::new();
        menu.run(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(&art::separator()));
        assert!(text.contains("MONKEY"));
    }

    #[test]
    fn non_utf8_input_does_not_end_the_session() {
        let catalog = Catalog::seeded().unwrap();
        let mut menu = Menu::new(&catalog, StdRng::seed_from_u64(1), plain());
        let mut input = Cursor::new(b"caf\xe9\n1\n2\nbab\xf6on\n4\n".to_vec());
        let mut output = Vec::new();
        let outcome = menu.run(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(outcome.reason, ExitReason::ExitCommand);
        assert_eq!(outcome.rejected_inputs, 1);
        assert_eq!(outcome.commands_handled, 3);
        assert!(text.contains("Invalid option. Please try again."));
        assert!(text.contains("| 1  | Baboon"));
        assert!(text.contains("not found."));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn reveal_pause_announces_before_details() {
        let catalog = Catalog::seeded().unwrap();
        let options = MenuOptions {
            show_art: false,
            reveal_pause: Duration::from_millis(1),
        };
        let mut menu = Menu::new(&catalog, StdRng::seed_from_u64(9), options);
        let mut input = Cursor::new(b"3\n4\n".to_vec());
        let mut output = Vec::new();
        menu.run(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let announce = text.find("Picking a monkey...").expect("pause announced");
        let details = text.find("Name: ").expect("details rendered");
        assert!(announce < details);
        assert_eq!(catalog.random_access_count(), 1);
        assert!(text.contains("Random monkey accessed 1 times."));
    }

    #[test]
    fn no_pause_skips_announcement() {
        let catalog = Catalog::seeded().unwrap();
        let (_, text) = session(&catalog, "3\n4\n");
        assert!(!text.contains("Picking a monkey..."));
        assert_eq!(catalog.random_access_count(), 1);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let catalog = Catalog::seeded().unwrap();
        let (_, text) = session(&catalog, "2\r\nbaboon\r\n4\r\n");
        assert!(text.contains("Name: Baboon"));
        assert!(text.contains("Population: 200,000"));
    }
}
