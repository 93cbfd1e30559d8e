//! Text rendering of the list view.

use tabled::{Table, Tabled};
use users_core::{Field, Modal, UserForm, User};

pub const NO_DATA: &str = "No data found";

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "DOB")]
    dob: String,
}

/// Render the user table. Rows are numbered from 1; passwords never appear.
pub fn table(users: &[User]) -> String {
    let rows: Vec<Row> = users
        .iter()
        .enumerate()
        .map(|(i, u)| Row {
            number: i + 1,
            name: u.name.clone(),
            email: u.email.clone(),
            dob: u.dob.clone(),
        })
        .collect();
    let empty = rows.is_empty();
    let table = Table::new(rows).to_string();
    if empty {
        format!("{table}\n{NO_DATA}")
    } else {
        table
    }
}

/// Render an open modal with its current field values, password masked.
pub fn form(modal: Modal, form: &UserForm) -> String {
    let mut out = format!("== {} ==", modal.title());
    for field in Field::ALL {
        let value = form.get(field);
        let shown = match field {
            Field::Password => "*".repeat(value.chars().count()),
            _ => value.to_string(),
        };
        out.push_str(&format!("\n{:>14}: {shown}", field.label()));
    }
    out
}
