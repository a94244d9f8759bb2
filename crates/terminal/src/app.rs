//! Command loop of the terminal storefront.

use std::io::{self, BufRead, Write};

use kiosko_contact::FieldId;
use kiosko_products::{Catalog, ProductEntry};
use kiosko_session::{Response, SessionConfig, SessionController, SessionError, SessionStores};

use crate::command::{Command, HELP};
use crate::prompt::LinePrompter;

pub struct TerminalApp<R, W> {
    session: SessionController,
    catalog: Catalog,
    io: LinePrompter<R, W>,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(stores: SessionStores, config: SessionConfig, input: R, output: W) -> Self {
        Self {
            session: SessionController::start(stores, config),
            catalog: Catalog::default_menu(),
            io: LinePrompter::new(input, output),
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_greeting()?;
        self.show_menu()?;
        self.show_summary(false)?;

        loop {
            write!(self.io.output(), "> ")?;
            self.io.output().flush()?;

            let Some(line) = self.io.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(message) => writeln!(self.io.output(), "{message}")?,
            }
        }
        writeln!(self.io.output(), "¡Hasta pronto!")
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Menu => self.show_menu(),
            Command::Buy(choice) => match self.find_product(&choice) {
                Some(product) => {
                    let result = self.session.buy(&product);
                    self.show_result(result)
                }
                None => writeln!(self.io.output(), "No existe el producto {choice:?}"),
            },
            Command::Set { field, value } => self.set_field(&field, &value),
            Command::Form => self.show_form(),
            Command::Submit => {
                let result = self.session.submit_order();
                self.show_result(result)?;
                self.show_errors()
            }
            Command::Clear => {
                let result = self.session.clear_order(&mut self.io);
                self.show_result(result)
            }
            Command::Login => {
                match self.session.toggle_login(&mut self.io) {
                    Ok(_) => {}
                    Err(err) => self.show_error(&err)?,
                }
                self.show_greeting()
            }
            Command::Summary { html } => self.show_summary(html),
            Command::Help => writeln!(self.io.output(), "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn find_product(&self, choice: &str) -> Option<ProductEntry> {
        let entry = match choice.parse::<usize>() {
            Ok(position) => self.catalog.get(position),
            Err(_) => self.catalog.find(choice),
        };
        entry.cloned()
    }

    fn set_field(&mut self, key: &str, value: &str) -> io::Result<()> {
        if FieldId::from_key(key).is_none() {
            return writeln!(self.io.output(), "Campo desconocido: {key}");
        }
        match self.session.field_input(key, value) {
            Some(message) => writeln!(self.io.output(), "  ✗ {key}: {message}"),
            None => writeln!(self.io.output(), "  ✓ {key}"),
        }
    }

    fn show_result(&mut self, result: Result<Response, SessionError>) -> io::Result<()> {
        match result {
            Ok(response) => {
                if let Some(notice) = response.notice {
                    writeln!(self.io.output(), "[{}]", notice.message())?;
                }
                writeln!(self.io.output(), "{}", response.summary)
            }
            Err(err) => self.show_error(&err),
        }
    }

    fn show_error(&mut self, err: &SessionError) -> io::Result<()> {
        tracing::error!(error = %err, "action failed");
        writeln!(self.io.output(), "Error: {err}")
    }

    fn show_greeting(&mut self) -> io::Result<()> {
        let greeting = self.session.greeting();
        writeln!(
            self.io.output(),
            "{}  (login: {})",
            greeting.message(),
            greeting.action_label()
        )
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.io.output(), "Menú:")?;
        for (i, entry) in self.catalog.entries().iter().enumerate() {
            writeln!(self.io.output(), "  {}. {}: {}", i + 1, entry.name, entry.price_label)?;
        }
        Ok(())
    }

    fn show_form(&mut self) -> io::Result<()> {
        let form = self.session.form().clone();
        for (field, value) in form.iter() {
            let marker = match self.session.errors().get(field) {
                Some(message) => format!("  ✗ {message}"),
                None => String::new(),
            };
            writeln!(self.io.output(), "  {:<10} {value:?}{marker}", field.key())?;
        }
        Ok(())
    }

    fn show_errors(&mut self) -> io::Result<()> {
        let errors = self.session.errors().clone();
        for (field, message) in errors.iter() {
            writeln!(self.io.output(), "  ✗ {}: {message}", field.key())?;
        }
        Ok(())
    }

    fn show_summary(&mut self, html: bool) -> io::Result<()> {
        let summary = if html {
            self.session.summary_html()
        } else {
            self.session.summary()
        };
        writeln!(self.io.output(), "{summary}")
    }
}
