//! [`Contact`] definitions.

/// Contact details a guest leaves for the concierge.
///
/// All fields start empty and are free text: only [`Contact::is_complete()`]
/// imposes any requirement on them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Contact {
    /// First name of the guest.
    pub first_name: String,

    /// Last name of the guest.
    pub last_name: String,

    /// Email of the guest.
    pub email: String,

    /// Phone of the guest.
    pub phone: String,

    /// Dietary requirements, occasions and other wishes.
    pub special_requests: String,
}

impl Contact {
    /// Indicates whether this [`Contact`] is enough to reach the guest:
    /// both the first name and the email are non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Returns the full name of the guest.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim_end()
            .to_owned()
    }

    /// Sets the provided [`Field`] to the provided `value`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Returns a mutable reference to the provided [`Field`].
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::SpecialRequests => &mut self.special_requests,
        }
    }
}

/// Editable field of a [`Contact`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// [`Contact::first_name`].
    FirstName,

    /// [`Contact::last_name`].
    LastName,

    /// [`Contact::email`].
    Email,

    /// [`Contact::phone`].
    Phone,

    /// [`Contact::special_requests`].
    SpecialRequests,
}
