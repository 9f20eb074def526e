use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every read returns `None` once input is exhausted.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print `message` and return the trimmed reply
    pub fn line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", message).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush output")?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompt with a default value. Returns the default if input is empty.
    pub fn text_with_default(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        let input = self.line(&format!("{} [{}]: ", message, default))?;
        Ok(input.map(|s| if s.is_empty() { default.to_string() } else { s }))
    }

    /// Prompt until the reply parses as a number
    pub fn number(&mut self, message: &str) -> Result<Option<f64>> {
        self.parsed(&format!("{}: ", message), None, parse_number, "must be a number")
    }

    pub fn number_with_default(&mut self, message: &str, default: f64) -> Result<Option<f64>> {
        self.parsed(
            &format!("{} [{}]: ", message, default),
            Some(default),
            parse_number,
            "must be a number",
        )
    }

    /// Prompt until the reply is a recognizable yes/no answer
    pub fn yes_no(&mut self, message: &str) -> Result<Option<bool>> {
        self.parsed(
            &format!("{} (true|false): ", message),
            None,
            parse_bool,
            "must be true or false",
        )
    }

    pub fn yes_no_with_default(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        self.parsed(
            &format!("{} (true|false) [{}]: ", message, default),
            Some(default),
            parse_bool,
            "must be true or false",
        )
    }

    fn parsed<T: Copy>(
        &mut self,
        message: &str,
        default: Option<T>,
        parse: fn(&str) -> Option<T>,
        hint: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(input) = self.line(message)? else {
                return Ok(None);
            };
            if input.is_empty() {
                if let Some(default) = default {
                    return Ok(Some(default));
                }
            }
            match parse(&input) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.writer, "  Invalid: {}. Try again.", hint)
                    .context("Failed to write output")?,
            }
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Some(true),
        "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}
