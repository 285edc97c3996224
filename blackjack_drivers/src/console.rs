//! Console collaborators of the game: prompting, input validation and plain
//! text output over any `BufRead`/`Write` pair.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use blackjack::{Decision, DecisionProvider, Participant, TableDisplay};

/// One answer a prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOption<'a> {
    /// Keyed by its first character, e.g. `yes` is answered by `y` or `yes`.
    Word(&'a str),
    /// Explicit key and the word it stands for, e.g. `("r", "surrender")`.
    Keyed(&'a str, &'a str),
}

impl<'a> From<&'a str> for PromptOption<'a> {
    fn from(word: &'a str) -> Self {
        PromptOption::Word(word)
    }
}

impl<'a> From<(&'a str, &'a str)> for PromptOption<'a> {
    fn from((key, word): (&'a str, &'a str)) -> Self {
        PromptOption::Keyed(key, word)
    }
}

/// Maps each option key to the tokens accepted for it.
pub fn prepare_options(
    options: &[PromptOption],
    case_sensitive: bool,
) -> BTreeMap<String, Vec<String>> {
    let normalize = |text: &str| {
        if case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    };

    let mut prepared = BTreeMap::new();
    for option in options {
        let (key, word) = match *option {
            PromptOption::Word(word) => {
                let key: String = word.chars().take(1).collect();
                (normalize(&key), normalize(word))
            }
            PromptOption::Keyed(key, word) => (normalize(key), normalize(word)),
        };
        let mut accepted = vec![key.clone()];
        if word != key {
            accepted.push(word);
        }
        prepared.insert(key, accepted);
    }
    prepared
}

pub type ValidationRule<T> = Box<dyn Fn(&T) -> bool>;

/// True when no ruleset is given, or when every rule of at least one ruleset
/// holds for `value`.
pub fn validate<T>(value: &T, rulesets: &[Vec<ValidationRule<T>>]) -> bool {
    rulesets.is_empty() || rulesets.iter().any(|rules| rules.iter().all(|rule| rule(value)))
}

pub fn rule_odd() -> ValidationRule<i64> {
    Box::new(|value: &i64| value % 2 != 0)
}

pub fn rule_greater_equal(limit: i64) -> ValidationRule<i64> {
    Box::new(move |value: &i64| *value >= limit)
}

pub fn rule_less_equal(limit: i64) -> ValidationRule<i64> {
    Box::new(move |value: &i64| *value <= limit)
}

/// Frames a message with a line of `decoration` above and below.
pub fn label(message: &str, decoration: char) -> String {
    let frame: String = std::iter::repeat(decoration)
        .take(message.chars().count())
        .collect();
    format!("{}\n{}\n{}", frame, message, frame)
}

fn decision_option(decision: Decision) -> PromptOption<'static> {
    match decision {
        Decision::Hit => PromptOption::Keyed("h", "hit"),
        Decision::Stand => PromptOption::Keyed("s", "stand"),
        Decision::Double => PromptOption::Keyed("d", "double"),
        Decision::Surrender => PromptOption::Keyed("r", "surrender"),
    }
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn print(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    pub fn print_label(&mut self, message: &str, decoration: char) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", label(message, decoration))?;
        writeln!(self.writer)
    }

    /// Reads one trimmed line. End of input is reported as `UnexpectedEof`.
    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until one of the options is answered and returns its key.
    pub fn user_choice(
        &mut self,
        prompt: &str,
        options: &[PromptOption],
        case_sensitive: bool,
    ) -> io::Result<String> {
        let prepared = prepare_options(options, case_sensitive);
        loop {
            let mut answer = self.read_answer(prompt)?;
            if !case_sensitive {
                answer = answer.to_lowercase();
            }
            let chosen = prepared
                .iter()
                .find(|(_, accepted)| accepted.contains(&answer))
                .map(|(key, _)| key.clone());
            if let Some(key) = chosen {
                return Ok(key);
            }
            let expected: Vec<&str> = prepared.values().flatten().map(String::as_str).collect();
            writeln!(
                self.writer,
                "I'm sorry I don't understand. Please answer {}:",
                expected.join("/")
            )?;
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let options = [PromptOption::from("yes"), PromptOption::from("no")];
        Ok(self.user_choice(prompt, &options, false)? == "y")
    }

    /// Asks for a bet between 1 and `max`; an empty answer takes `default`
    /// (capped at `max`).
    pub fn ask_bet(&mut self, default: u32, max: u32) -> io::Result<u32> {
        let default = default.min(max);
        let rulesets = vec![vec![rule_greater_equal(1), rule_less_equal(i64::from(max))]];
        loop {
            let answer = self.read_answer(&format!(
                "How many chips do you bet (1-{}) [{}]? ",
                max, default
            ))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<i64>() {
                Ok(bet) if validate(&bet, &rulesets) => {
                    return Ok(u32::try_from(bet).unwrap_or(max));
                }
                _ => writeln!(
                    self.writer,
                    "I'm sorry I don't understand. Please answer a number between 1 and {}:",
                    max
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> DecisionProvider for Console<R, W> {
    fn choose_decision(&mut self, _: &Participant, options: &[Decision]) -> Decision {
        let prompt_options: Vec<PromptOption> = options.iter().map(|&d| decision_option(d)).collect();
        let words: Vec<&str> = prompt_options
            .iter()
            .map(|option| match *option {
                PromptOption::Word(word) | PromptOption::Keyed(_, word) => word,
            })
            .collect();
        let prompt = format!("What would you like to do? ({}): ", words.join(", "));

        let key = match self.user_choice(&prompt, &prompt_options, false) {
            Ok(key) => key,
            Err(err) => {
                log::warn!("Cannot read a decision ({}), standing", err);
                return Decision::Stand;
            }
        };
        options
            .iter()
            .copied()
            .find(|&decision| prepare_options(&[decision_option(decision)], false).contains_key(&key))
            .unwrap_or(Decision::Stand)
    }
}

impl<R: BufRead, W: Write> TableDisplay for Console<R, W> {
    fn show(&mut self, message: &str) {
        if let Err(err) = self.print(message) {
            log::error!("Cannot write to the console: {}", err);
        }
    }
}
