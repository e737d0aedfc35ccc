//! Interactive console session.
//!
//! Generic over its reader and writer so scripted input can drive it in
//! tests exactly as a terminal would.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::adapters::presenter::render_report;
use crate::application::{EstimateLifeExpectancyCommand, EstimateLifeExpectancyHandler};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::longevity::{
    AlcoholLevel, BirthMoment, BmiCategory, DietQuality, EstimationError, EstimationResult,
    ExerciseIntensity, FamilyLongevity, Gender, HealthProfile, SmokingIntensity,
};

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before all questions were answered")]
    InputClosed,

    #[error(transparent)]
    Estimation(#[from] EstimationError),
}

/// Parses a numeric answer and checks its range.
pub fn parse_field(raw: &str, field: &str, min: i32, max: i32) -> Result<i32, ValidationError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "expected a whole number"))?;
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(value)
}

/// Parses a yes/no answer.
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    default_country: String,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, default_country: impl Into<String>) -> Self {
        Self {
            input,
            output,
            default_country: default_country.into(),
        }
    }

    /// Runs the full questionnaire, prints the report and returns the result.
    pub fn run(
        &mut self,
        handler: &EstimateLifeExpectancyHandler,
    ) -> Result<EstimationResult, ConsoleError> {
        writeln!(self.output, "Life Expectancy Calculator")?;
        writeln!(self.output)?;

        let birth = self.ask_birth_moment(&handler.now())?;
        let profile = self.ask_profile()?;

        let result = handler.handle(EstimateLifeExpectancyCommand { birth, profile })?;

        writeln!(self.output)?;
        write!(self.output, "{}", render_report(&result))?;
        self.output.flush()?;
        Ok(result)
    }

    /// Asks for year, month, day and hour until they form a valid date
    /// no later than `now`.
    pub fn ask_birth_moment(&mut self, now: &Timestamp) -> Result<BirthMoment, ConsoleError> {
        loop {
            let year = self.ask_number("year", "What year were you born: ", 1, 9999)?;
            let month = self.ask_number("month", "What month were you born (1-12): ", 1, 12)?;
            let day = self.ask_number("day", "What day were you born (1-31): ", 1, 31)?;
            let hour = self.ask_number(
                "hour",
                "What hour were you born (0-23, 24-hour format): ",
                0,
                23,
            )?;

            let checked = BirthMoment::new(year, month as u32, day as u32, hour as u32)
                .and_then(|birth| {
                    if birth.as_naive() > now.naive_utc() {
                        Err(EstimationError::BirthInFuture)
                    } else {
                        Ok(birth)
                    }
                });
            match checked {
                Ok(birth) => return Ok(birth),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected birth date");
                    writeln!(self.output, "{}. Please enter the date again.", e)?;
                }
            }
        }
    }

    /// Asks every lifestyle question.
    pub fn ask_profile(&mut self) -> Result<HealthProfile, ConsoleError> {
        let smoking = self.ask_refined::<SmokingIntensity>(
            "Do you smoke? (yes/no): ",
            "How much do you smoke?",
        )?;
        let alcohol = self.ask_choice::<AlcoholLevel>("How much alcohol do you drink?")?;
        let obesity = self.ask_refined::<BmiCategory>(
            "Do you consider yourself obese? (yes/no): ",
            "How severe is it?",
        )?;
        let diabetes = self.ask_yes_no("Do you have diabetes? (yes/no): ")?;
        let hypertension = self.ask_yes_no("Do you have high blood pressure? (yes/no): ")?;
        let heart_disease = self.ask_yes_no("Do you have heart disease? (yes/no): ")?;
        let healthy_diet = self.ask_refined::<DietQuality>(
            "Do you generally maintain a healthy diet? (yes/no): ",
            "How would you rate your diet?",
        )?;
        let regular_exercise = self.ask_refined::<ExerciseIntensity>(
            "Do you engage in regular exercise? (yes/no): ",
            "How intense is your exercise?",
        )?;
        let good_sleep = self.ask_yes_no("Do you usually sleep well? (yes/no): ")?;
        let stress_management = self.ask_yes_no("Do you manage stress well? (yes/no): ")?;
        let social_connections =
            self.ask_yes_no("Do you have strong social connections? (yes/no): ")?;
        let regular_checkups =
            self.ask_yes_no("Do you get regular medical checkups? (yes/no): ")?;
        let family_longevity =
            self.ask_choice::<FamilyLongevity>("How long do people in your family usually live?")?;
        let gender = self.ask_choice::<Gender>("What is your gender?")?;
        let country = self.ask_country()?;

        Ok(HealthProfile {
            smoking,
            alcohol,
            obesity,
            diabetes,
            hypertension,
            heart_disease,
            healthy_diet,
            regular_exercise,
            good_sleep,
            stress_management,
            social_connections,
            regular_checkups,
            family_longevity,
            gender,
            country,
        })
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_number(
        &mut self,
        field: &str,
        prompt: &str,
        min: i32,
        max: i32,
    ) -> Result<i32, ConsoleError> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse_field(&answer, field, min, max) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }

    /// Asks for one level; a blank answer picks the default.
    fn ask_choice<T>(&mut self, question: &str) -> Result<T, ConsoleError>
    where
        T: FromStr<Err = EstimationError> + Default + Display + Copy + 'static,
        T: ListedLevels,
    {
        let options = T::levels()
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let prompt = format!("{} ({}) [{}]: ", question, options, T::default());

        loop {
            let answer = self.read_answer(&prompt)?;
            if answer.is_empty() {
                return Ok(T::default());
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Asks a yes/no question and, on yes, the matching refinement.
    fn ask_refined<T>(
        &mut self,
        flag_prompt: &str,
        question: &str,
    ) -> Result<Option<T>, ConsoleError>
    where
        T: FromStr<Err = EstimationError> + Default + Display + Copy + 'static,
        T: ListedLevels,
    {
        if self.ask_yes_no(flag_prompt)? {
            self.ask_choice::<T>(question).map(Some)
        } else {
            Ok(None)
        }
    }

    fn ask_country(&mut self) -> Result<String, ConsoleError> {
        let prompt = format!("Which country do you live in? [{}]: ", self.default_country);
        let answer = self.read_answer(&prompt)?;
        if answer.is_empty() {
            Ok(self.default_country.clone())
        } else {
            Ok(answer)
        }
    }
}

/// Levels offered for a categorical question.
pub trait ListedLevels: Sized + 'static {
    fn levels() -> &'static [Self];
}

macro_rules! listed_levels {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ListedLevels for $name {
                fn levels() -> &'static [Self] {
                    <$name>::all()
                }
            }
        )+
    };
}

listed_levels!(
    SmokingIntensity,
    AlcoholLevel,
    BmiCategory,
    DietQuality,
    ExerciseIntensity,
    FamilyLongevity,
    Gender,
);
