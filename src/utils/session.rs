use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use crate::config::RowDefaults;
use crate::models::{CourseRow, Field, PreviousTerm, Summary};
use crate::utils::gpa::{clamp_credits, parse_or_default};
use crate::utils::scale::clamp_gpa;
use crate::utils::report::{explanation, render_report, render_scale, summarize};
use crate::utils::table::GradeTable;

const HELP: &str = "Commands:
  add                      add a course with the default credits and grade
  rm <index>               remove a course (also: remove)
  name <index> <text>      rename a course
  credits <index> <value>  set the credits of a course
  grade <index> <symbol>   set the letter grade of a course
  prev <gpa> <credits>     enter a previous GPA to compute a cumulative GPA
  clear-prev               forget the previous GPA
  show | recalc            print the courses and results again
  grades                   list the grade scale
  help                     show this message
  quit | exit              leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Remove(Option<usize>),
    Update(Option<usize>, Field, String),
    Previous(f64, f64),
    ClearPrevious,
    Show,
    Recalculate,
    Grades,
    Help,
    Quit,
    Empty,
}

// Turns one input line into a command, or a short hint when it cannot be understood.
pub struct CommandParser {
    line: Regex,
    indexed: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            line: Regex::new(r"^\s*(?P<verb>[A-Za-z-]+)(?:\s+(?P<args>.*?))?\s*$").context("Failed to build command pattern")?,
            indexed: Regex::new(r"^(?P<index>-?\d+)(?:\s+(?P<rest>.*))?$").context("Failed to build argument pattern")?,
        })
    }

    pub fn parse(&self, input: &str) -> std::result::Result<Command, String> {
        if input.trim().is_empty() {
            return Ok(Command::Empty);
        }
        let caps = self.line.captures(input).ok_or_else(|| format!("Unknown command {:?}, type `help`", input.trim()))?;
        let verb = caps["verb"].to_lowercase();
        let args = caps.name("args").map_or("", |m| m.as_str());

        match verb.as_str() {
            "add" => Ok(Command::Add),
            "rm" | "remove" => {
                let (index, _) = self.split_index(args).ok_or("Usage: rm <index>")?;
                Ok(Command::Remove(index))
            }
            "name" => {
                let (index, rest) = self.split_index(args).ok_or("Usage: name <index> <text>")?;
                Ok(Command::Update(index, Field::Name, rest.to_string()))
            }
            "credits" => {
                let (index, rest) = self.split_index(args).ok_or("Usage: credits <index> <value>")?;
                Ok(Command::Update(index, Field::Credits, rest.to_string()))
            }
            "grade" => {
                let (index, rest) = self.split_index(args).ok_or("Usage: grade <index> <symbol>")?;
                Ok(Command::Update(index, Field::Grade, rest.trim().to_string()))
            }
            "prev" => {
                let mut parts = args.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(gpa), Some(credits), None) => Ok(Command::Previous(
                        clamp_gpa(parse_or_default(gpa, 0.0)),
                        clamp_credits(parse_or_default(credits, 0.0)),
                    )),
                    _ => Err("Usage: prev <gpa> <credits>".to_string()),
                }
            }
            "clear-prev" => Ok(Command::ClearPrevious),
            "show" => Ok(Command::Show),
            "recalc" => Ok(Command::Recalculate),
            "grades" => Ok(Command::Grades),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command {:?}, type `help`", other)),
        }
    }

    // Splits "<index> <rest>". Negative or oversized indexes map to `None` and
    // later act as a no-op, like any other out of range position.
    fn split_index<'a>(&self, args: &'a str) -> Option<(Option<usize>, &'a str)> {
        let caps = self.indexed.captures(args)?;
        let index = caps["index"].parse::<i64>().ok().and_then(|i| usize::try_from(i).ok());
        let rest = caps.name("rest").map_or("", |m| m.as_str());
        Some((index, rest))
    }
}

/// Text to show after a command and whether the session should end.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: false }
    }
}

/// One interactive form: the course table plus the optional previous-term inputs.
pub struct Session {
    table: GradeTable,
    previous: PreviousTerm,
    defaults: RowDefaults,
    recalc_count: u64,
    parser: CommandParser,
}

impl Session {
    // Starts with a single example course.
    pub fn new(defaults: RowDefaults) -> Result<Self> {
        Self::with_rows(vec![CourseRow::new("Intro to CS", 3.0, "A")], defaults)
    }

    pub fn with_rows(rows: Vec<CourseRow>, defaults: RowDefaults) -> Result<Self> {
        Ok(Self {
            table: GradeTable::with_rows(rows),
            previous: PreviousTerm::default(),
            defaults,
            recalc_count: 0,
            parser: CommandParser::new()?,
        })
    }

    pub fn table(&self) -> &GradeTable {
        &self.table
    }

    pub fn previous(&self) -> &PreviousTerm {
        &self.previous
    }

    pub fn set_previous(&mut self, previous: PreviousTerm) {
        self.previous = previous;
    }

    pub fn recalc_count(&self) -> u64 {
        self.recalc_count
    }

    pub fn summary(&self) -> Summary {
        summarize(self.table.rows(), &self.previous)
    }

    pub fn report(&self) -> String {
        render_report(self.table.rows(), &self.previous)
    }

    // Applies one line of user input. Malformed input never changes the table.
    pub fn execute(&mut self, input: &str) -> Reply {
        let command = match self.parser.parse(input) {
            Ok(command) => command,
            Err(hint) => return Reply::show(hint),
        };
        debug!("Executing {:?}", command);

        match command {
            Command::Empty => Reply::show(""),
            Command::Add => {
                self.table.append(self.defaults.credits, &self.defaults.grade);
                Reply::show(self.report())
            }
            Command::Remove(index) => {
                if let Some(index) = index {
                    self.table.remove_at(index);
                }
                Reply::show(self.report())
            }
            Command::Update(index, field, value) => {
                if let Some(index) = index {
                    self.table.update(index, field, &value);
                }
                Reply::show(self.report())
            }
            Command::Previous(gpa, credits) => {
                self.previous = PreviousTerm { gpa, credits };
                Reply::show(self.report())
            }
            Command::ClearPrevious => {
                self.previous = PreviousTerm::default();
                Reply::show(self.report())
            }
            Command::Show => Reply::show(self.report()),
            Command::Recalculate => {
                self.recalc_count += 1;
                Reply::show(self.report())
            }
            Command::Grades => Reply::show(render_scale()),
            Command::Help => Reply::show(format!("{}\n\n{}", HELP, explanation())),
            Command::Quit => Reply { text: String::new(), quit: true },
        }
    }

    // Reads commands until `quit` or end of input, printing the report after each one.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Session started with {} course(s)", self.table.len());
        writeln!(output, "GPA Calculator (4.0 scale), type `help` for commands\n\n{}", self.report())
            .context("Failed to write to output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let reply = self.execute(&line);
            if reply.quit {
                break;
            }
            if !reply.text.is_empty() {
                writeln!(output, "{}", reply.text).context("Failed to write to output")?;
            }
            output.flush().context("Failed to flush output")?;
        }

        info!("Session ended with {} course(s)", self.table.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CommandParser {
        CommandParser::new().unwrap()
    }

    #[test]
    fn parses_basic_commands() {
        let p = parser();
        assert_eq!(p.parse("add"), Ok(Command::Add));
        assert_eq!(p.parse("  RM 2 "), Ok(Command::Remove(Some(2))));
        assert_eq!(p.parse("remove 0"), Ok(Command::Remove(Some(0))));
        assert_eq!(p.parse("exit"), Ok(Command::Quit));
        assert_eq!(p.parse(""), Ok(Command::Empty));
    }

    #[test]
    fn negative_index_parses_as_out_of_range() {
        assert_eq!(parser().parse("rm -1"), Ok(Command::Remove(None)));
    }

    #[test]
    fn name_keeps_inner_spaces() {
        assert_eq!(
            parser().parse("name 1 Linear Algebra II"),
            Ok(Command::Update(Some(1), Field::Name, "Linear Algebra II".to_string()))
        );
        assert_eq!(parser().parse("name 1"), Ok(Command::Update(Some(1), Field::Name, String::new())));
    }

    #[test]
    fn prev_is_coerced() {
        assert_eq!(parser().parse("prev 3.2 30"), Ok(Command::Previous(3.2, 30.0)));
        assert_eq!(parser().parse("prev x -4"), Ok(Command::Previous(0.0, 0.0)));
        assert!(parser().parse("prev 3.2").is_err());
    }

    #[test]
    fn prev_gpa_is_capped_at_four() {
        assert_eq!(parser().parse("prev 5.5 12"), Ok(Command::Previous(4.0, 12.0)));
        assert_eq!(parser().parse("prev 4 12"), Ok(Command::Previous(4.0, 12.0)));
    }

    #[test]
    fn malformed_commands_are_hints() {
        let p = parser();
        assert!(p.parse("rm").is_err());
        assert!(p.parse("rm two").is_err());
        assert!(p.parse("fly away").is_err());
        assert!(p.parse("42").is_err());
    }

    #[test]
    fn recalc_counts_presses() {
        let mut session = Session::new(RowDefaults::default()).unwrap();
        session.execute("recalc");
        session.execute("recalc");
        assert_eq!(session.recalc_count(), 2);
    }
}
