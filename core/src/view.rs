//! The user list screen as a plain state struct.
//!
//! # Design
//! `UserListView` owns everything the screen needs between user actions: the
//! local list, which modal is open, the form fields and the record being
//! edited. Front ends call one method per user action and re-render from the
//! accessors afterwards.
//!
//! The local list is a non-authoritative mirror of the server. It changes
//! only after the server accepted a mutation. Every API failure is logged and
//! leaves the list exactly as it was; a failed submit also leaves its modal
//! open with the fields intact.

use tracing::{error, info};

use crate::api::UsersApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateUser, UpdateUser, User, UserId};

/// Prompt shown before a record is deleted.
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";

/// Which overlay form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Create,
    Edit,
}

impl Modal {
    pub fn title(self) -> &'static str {
        match self {
            Modal::Create => "Add New User",
            Modal::Edit => "Edit User",
        }
    }
}

/// What became of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The confirmation was declined; nothing was sent.
    Declined,
    Deleted,
    /// The server call failed; see [`UserListView::last_error`].
    Failed,
}

/// A single editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Dob,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Dob, Field::Password];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Dob => "Date of Birth",
            Field::Password => "Password",
        }
    }
}

/// Text currently typed into the open modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub password: String,
}

impl UserForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Dob => &self.dob,
            Field::Password => &self.password,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Dob => self.dob = value,
            Field::Password => self.password = value,
        }
    }
}

pub struct UserListView<T> {
    api: UsersApi<T>,
    users: Vec<User>,
    modal: Option<Modal>,
    form: UserForm,
    editing: Option<User>,
    last_error: Option<String>,
}

impl<T: Transport> UserListView<T> {
    /// Create an empty view. Call [`load`](Self::load) to populate it.
    pub fn new(api: UsersApi<T>) -> Self {
        Self {
            api,
            users: Vec::new(),
            modal: None,
            form: UserForm::default(),
            editing: None,
            last_error: None,
        }
    }

    pub fn api(&self) -> &UsersApi<T> {
        &self.api
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a record by its 1-based position in the rendered table.
    pub fn user_at(&self, number: usize) -> Option<&User> {
        number.checked_sub(1).and_then(|i| self.users.get(i))
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// The record the edit modal was opened for.
    pub fn editing(&self) -> Option<&User> {
        self.editing.as_ref()
    }

    /// Message of the most recent failed API call, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch the full list from the server, replacing the local one.
    pub fn load(&mut self) -> bool {
        match self.api.list_users() {
            Ok(users) => {
                info!(count = users.len(), "loaded users");
                self.users = users;
                self.last_error = None;
                true
            }
            Err(e) => {
                self.fail("list users", e);
                false
            }
        }
    }

    pub fn open_create(&mut self) {
        self.reset_form();
        self.modal = Some(Modal::Create);
    }

    /// Open the edit modal pre-filled from the record with `id`.
    ///
    /// The password field starts blank. Returns `false` when no local record
    /// has that id.
    pub fn open_edit(&mut self, id: &UserId) -> bool {
        let Some(user) = self.users.iter().find(|u| &u.id == id).cloned() else {
            return false;
        };
        self.form = UserForm {
            name: user.name.clone(),
            email: user.email.clone(),
            dob: user.dob.clone(),
            password: String::new(),
        };
        self.editing = Some(user);
        self.modal = Some(Modal::Edit);
        true
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Close whichever modal is open and discard its fields.
    pub fn cancel(&mut self) {
        self.modal = None;
        self.reset_form();
    }

    /// Submit the open modal. Returns `true` when the server accepted it and
    /// the modal closed.
    pub fn submit(&mut self) -> bool {
        match self.modal {
            Some(Modal::Create) => self.submit_create(),
            Some(Modal::Edit) => self.submit_edit(),
            None => false,
        }
    }

    /// Delete the record with `id` once `confirm` agrees.
    ///
    /// `confirm` receives [`CONFIRM_DELETE`]. Declining issues no request
    /// and leaves `last_error` as it was.
    pub fn delete<F>(&mut self, id: &UserId, confirm: F) -> Deletion
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CONFIRM_DELETE) {
            return Deletion::Declined;
        }
        match self.api.delete_user(id) {
            Ok(()) => {
                self.users.retain(|u| &u.id != id);
                self.last_error = None;
                info!(%id, "deleted user");
                Deletion::Deleted
            }
            Err(e) => {
                self.fail("delete user", e);
                Deletion::Failed
            }
        }
    }

    fn submit_create(&mut self) -> bool {
        let input = CreateUser {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            dob: self.form.dob.clone(),
            password: self.form.password.clone(),
        };
        match self.api.create_user(&input) {
            Ok(created) => {
                info!(id = %created.id, "created user");
                self.users.push(created);
                self.close();
                true
            }
            Err(e) => {
                self.fail("create user", e);
                false
            }
        }
    }

    fn submit_edit(&mut self) -> bool {
        let Some(current) = &self.editing else {
            return false;
        };
        let id = current.id.clone();
        // A blank field re-sends whatever password we last saw for the record.
        let password = if self.form.password.is_empty() {
            current.password.clone()
        } else {
            Some(self.form.password.clone())
        };
        let input = UpdateUser {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            dob: self.form.dob.clone(),
            password,
        };
        match self.api.update_user(&id, &input) {
            Ok(()) => {
                if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                    user.apply(&input);
                }
                info!(%id, "updated user");
                self.close();
                true
            }
            Err(e) => {
                self.fail("update user", e);
                false
            }
        }
    }

    fn close(&mut self) {
        self.modal = None;
        self.last_error = None;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = UserForm::default();
        self.editing = None;
    }

    fn fail(&mut self, action: &str, e: ApiError) {
        error!(error = %e, "{action} failed");
        self.last_error = Some(format!("{action} failed: {e}"));
    }
}
