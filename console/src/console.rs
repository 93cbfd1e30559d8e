//! Interactive loop over a `UserListView`.

use std::str::FromStr;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use users_core::{Deletion, Field, Modal, Transport, UserListView};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(usize),
    Delete(usize),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();
        let row = || -> Result<usize, String> {
            let arg = arg.ok_or_else(|| format!("usage: {verb} <row>"))?;
            arg.parse().map_err(|_| format!("not a row number: {arg}"))
        };
        let command = match verb {
            "list" | "ls" => Command::List,
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(row()?),
            "delete" | "rm" => Command::Delete(row()?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(command)
    }
}

pub struct Console<T> {
    view: UserListView<T>,
    editor: DefaultEditor,
}

impl<T: Transport> Console<T> {
    pub fn new(view: UserListView<T>) -> Result<Self> {
        Ok(Self {
            view,
            editor: DefaultEditor::new()?,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("users - type `help` for commands");
        self.view.load();
        self.show_list();

        loop {
            let line = match self.editor.readline("users> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.editor.add_history_entry(line)?;

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(msg) => eprintln!("{msg}"),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::List => {
                self.view.load();
                self.show_list();
            }
            Command::Add => {
                self.view.open_create();
                self.fill_form()?;
            }
            Command::Edit(row) => {
                let Some(id) = self.view.user_at(row).map(|u| u.id.clone()) else {
                    eprintln!("no row {row}");
                    return Ok(());
                };
                self.view.open_edit(&id);
                self.fill_form()?;
            }
            Command::Delete(row) => {
                let Some(id) = self.view.user_at(row).map(|u| u.id.clone()) else {
                    eprintln!("no row {row}");
                    return Ok(());
                };
                let editor = &mut self.editor;
                match self.view.delete(&id, |msg| confirm(editor, msg, false)) {
                    Deletion::Deleted => self.show_list(),
                    Deletion::Failed => self.show_error(),
                    Deletion::Declined => {}
                }
            }
            Command::Help => print_help(),
            Command::Quit => {}
        }
        Ok(())
    }

    /// Prompt for every field of the open modal, then save or cancel.
    ///
    /// A failed save keeps the modal open and offers another attempt.
    fn fill_form(&mut self) -> Result<()> {
        let Some(modal) = self.view.modal() else {
            return Ok(());
        };
        for field in Field::ALL {
            let label = match (modal, field) {
                (Modal::Edit, Field::Password) => "Password (blank keeps current)",
                _ => field.label(),
            };
            let initial = self.view.form().get(field).to_string();
            match self
                .editor
                .readline_with_initial(&format!("{label}: "), (initial.as_str(), ""))
            {
                Ok(line) => self.view.set_field(field, form_value(&line)),
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    self.view.cancel();
                    println!("cancelled");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }

        println!("{}", render::form(modal, self.view.form()));
        loop {
            if !confirm(&mut self.editor, "Save?", true) {
                self.view.cancel();
                println!("cancelled");
                return Ok(());
            }
            if self.view.submit() {
                self.show_list();
                return Ok(());
            }
            self.show_error();
        }
    }

    fn show_list(&self) {
        println!("{}", render::table(self.view.users()));
        self.show_error();
    }

    fn show_error(&self) {
        if let Some(err) = self.view.last_error() {
            eprintln!("error: {err}");
        }
    }
}

/// Strip the line terminator a terminal may leave behind. Spaces are part of
/// the value; a password may legitimately start or end with one.
fn form_value(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Ask a yes/no question. Empty input picks `default`; read errors say no.
fn confirm(editor: &mut DefaultEditor, question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    match editor.readline(&format!("{question} {hint} ")) {
        Ok(answer) => match answer.trim().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        },
        Err(_) => false,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list            - reload and show all users");
    println!("  add             - open the Add New User form");
    println!("  edit <row>      - open the Edit User form for a row");
    println!("  delete <row>    - delete a row after confirmation");
    println!("  help            - show commands");
    println!("  quit            - exit");
}
