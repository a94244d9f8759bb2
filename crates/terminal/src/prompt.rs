use std::io::{self, BufRead, Write};

use kiosko_session::Prompter;

/// Prompts answered on a line-oriented input.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        let shown = write!(self.output, "{text} ").and_then(|_| self.output.flush());
        if let Err(err) = shown {
            tracing::warn!(error = %err, "failed to show prompt");
        }
        match self.read_line() {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read prompt answer");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    /// Accepts `s`/`si`/`sí`/`y`/`yes`; anything else (or end of input) is no.
    fn confirm(&mut self, message: &str) -> bool {
        let Some(answer) = self.prompt(&format!("{message} [s/N]")) else {
            return false;
        };
        matches!(
            answer.trim().to_lowercase().as_str(),
            "s" | "si" | "sí" | "y" | "yes"
        )
    }

    fn ask(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        let text = match default {
            Some(default) => format!("{message} [{default}]"),
            None => message.to_string(),
        };
        let answer = self.prompt(&text)?;
        if answer.trim().is_empty() {
            default.map(str::to_string)
        } else {
            Some(answer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn confirm_accepts_spanish_and_english_yes() {
        let mut p = prompter("sí\ny\nno\n");
        assert!(p.confirm("¿Seguro?"));
        assert!(p.confirm("¿Seguro?"));
        assert!(!p.confirm("¿Seguro?"));
        assert!(!p.confirm("¿Seguro?"));
    }

    #[test]
    fn ask_uses_default_on_empty_answer() {
        let mut p = prompter("\nPepe\n");
        assert_eq!(p.ask("¿Género?", Some("f")), Some("f".into()));
        assert_eq!(p.ask("¿Nombre?", None), Some("Pepe".into()));
        assert_eq!(p.ask("¿Nombre?", None), None);
    }

    #[test]
    fn prompt_text_is_written() {
        let mut p = prompter("s\n");
        p.confirm("¿Cerrar sesión?");
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "¿Cerrar sesión? [s/N] ");
    }
}
