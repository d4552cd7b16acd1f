use std::io;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use crate::config::Config;
use crate::models::PreviousTerm;
use crate::utils::courses::load_courses;
use crate::utils::gpa::clamp_credits;
use crate::utils::scale::clamp_gpa;
use crate::utils::report::{render_report, summarize};
use crate::utils::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "gpa-calc",
    version,
    about = "Enter courses with credits and letter grades, get a GPA on the 4.0 scale."
)]
pub struct Cli {
    /// JSON file with an array of {name, credits, grade} objects; prints one report and exits
    #[arg(long)]
    pub courses: Option<PathBuf>,

    /// Print the results as JSON (with --courses)
    #[arg(long, requires = "courses")]
    pub json: bool,

    /// Previously recorded GPA, used for the cumulative GPA
    #[arg(long)]
    pub prev_gpa: Option<f64>,

    /// Credits covered by the previous GPA
    #[arg(long)]
    pub prev_credits: Option<f64>,

    /// Credits given to newly added courses [env: GPA_DEFAULT_CREDITS]
    #[arg(long)]
    pub default_credits: Option<f64>,

    /// Letter grade given to newly added courses [env: GPA_DEFAULT_GRADE]
    #[arg(long)]
    pub default_grade: Option<String>,
}

impl Cli {
    pub fn run(self, mut config: Config) -> Result<()> {
        if let Some(credits) = self.default_credits {
            config.defaults.credits = clamp_credits(credits);
        }
        if let Some(grade) = &self.default_grade {
            config.defaults.grade = grade.trim().to_string();
        }
        let previous = self.previous();

        match &self.courses {
            Some(path) => self.run_batch(path, &previous),
            None => {
                let mut session = Session::new(config.defaults)?;
                session.set_previous(previous);
                let stdin = io::stdin();
                session.run(stdin.lock(), io::stdout())
            }
        }
    }

    // Unset values count as "not entered", same as zero in the form.
    fn previous(&self) -> PreviousTerm {
        PreviousTerm {
            gpa: clamp_gpa(self.prev_gpa.unwrap_or(0.0)),
            credits: clamp_credits(self.prev_credits.unwrap_or(0.0)),
        }
    }

    fn run_batch(&self, path: &Path, previous: &PreviousTerm) -> Result<()> {
        let rows = load_courses(path)?;
        if self.json {
            let summary = summarize(&rows, previous);
            let json = serde_json::to_string_pretty(&summary).context("Failed to serialize results")?;
            println!("{}", json);
        } else {
            println!("{}", render_report(&rows, previous));
        }
        info!("Report for {} printed", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch_flags() {
        let cli = Cli::try_parse_from([
            "gpa-calc", "--courses", "term.json", "--json", "--prev-gpa", "3.2", "--prev-credits", "30",
        ])
        .unwrap();
        assert_eq!(cli.courses, Some(PathBuf::from("term.json")));
        assert!(cli.json);
        assert_eq!(cli.previous(), PreviousTerm { gpa: 3.2, credits: 30.0 });
    }

    #[test]
    fn json_needs_a_course_file() {
        assert!(Cli::try_parse_from(["gpa-calc", "--json"]).is_err());
    }

    #[test]
    fn negative_previous_values_are_clamped() {
        let cli = Cli::try_parse_from(["gpa-calc", "--prev-gpa=-1", "--prev-credits=-5"]).unwrap();
        assert_eq!(cli.previous(), PreviousTerm::default());
    }

    #[test]
    fn previous_gpa_above_scale_is_capped() {
        let cli = Cli::try_parse_from(["gpa-calc", "--prev-gpa", "4.5", "--prev-credits", "30"]).unwrap();
        assert_eq!(cli.previous(), PreviousTerm { gpa: 4.0, credits: 30.0 });
    }
}
