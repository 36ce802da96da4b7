//! Emergency contact directory.
//!
//! DESIGN
//! ======
//! An ordered in-memory list seeded with one permanent campus-police entry,
//! which is also the initial primary. The primary always references an
//! existing entry: deleting the current primary resets it to the default,
//! and the default itself cannot be deleted, so the invariant holds without
//! ad-hoc repair.

use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_CONTACT_NAME: &str = "UCPD Dispatch";
pub const DEFAULT_CONTACT_PHONE: &str = "510-642-3333";

/// A single directory entry.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Permanent entries (the seeded default) cannot be deleted.
    pub permanent: bool,
}

/// Campus hotline shown on the emergency page, with a dialer link.
#[derive(Debug, Clone, Serialize)]
pub struct Hotline {
    pub label: &'static str,
    pub phone: &'static str,
    pub tel_uri: &'static str,
}

/// The three fixed campus hotlines from the emergency page.
#[must_use]
pub fn hotlines() -> Vec<Hotline> {
    vec![
        Hotline { label: "Call 911", phone: "911", tel_uri: "tel:911" },
        Hotline { label: "Call UCPD", phone: "510-642-3333", tel_uri: "tel:5106423333" },
        Hotline { label: "Night Safety Shuttle", phone: "510-643-9255", tel_uri: "tel:5106439255" },
    ]
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// No entry with the given ID exists.
    #[error("contact {0} not found")]
    NotFound(Uuid),

    /// A required form field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The seeded campus-police entry cannot be removed.
    #[error("the default campus contact cannot be deleted")]
    PermanentEntry,
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// Ordered contact directory with a designated primary.
#[derive(Debug)]
pub struct ContactDirectory {
    entries: Vec<Contact>,
    primary_id: Uuid,
    default_id: Uuid,
}

impl ContactDirectory {
    /// A directory with the permanent campus-police entry as sole member and
    /// primary.
    #[must_use]
    pub fn new() -> Self {
        let default = Contact {
            id: Uuid::new_v4(),
            name: DEFAULT_CONTACT_NAME.into(),
            phone: DEFAULT_CONTACT_PHONE.into(),
            permanent: true,
        };
        let default_id = default.id;
        Self { entries: vec![default], primary_id: default_id, default_id }
    }

    #[must_use]
    pub fn entries(&self) -> &[Contact] {
        &self.entries
    }

    #[must_use]
    pub fn primary_id(&self) -> Uuid {
        self.primary_id
    }

    /// The current primary contact. The directory always contains the
    /// permanent default, so this cannot dangle.
    #[must_use]
    pub fn primary(&self) -> &Contact {
        self.entries
            .iter()
            .find(|c| c.id == self.primary_id)
            .unwrap_or(&self.entries[0])
    }

    /// Add a contact. Both fields are trimmed; either being empty rejects
    /// the submission and leaves the directory unchanged.
    pub fn add(&mut self, name: &str, phone: &str) -> Result<&Contact, ContactError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyField { field: "name" });
        }
        if phone.is_empty() {
            return Err(ContactError::EmptyField { field: "phone" });
        }

        self.entries.push(Contact {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            phone: phone.to_owned(),
            permanent: false,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove an entry. Removing the current primary resets the primary to
    /// the default entry.
    pub fn remove(&mut self, id: Uuid) -> Result<(), ContactError> {
        let index = self
            .entries
            .iter()
            .position(|c| c.id == id)
            .ok_or(ContactError::NotFound(id))?;
        if self.entries[index].permanent {
            return Err(ContactError::PermanentEntry);
        }

        self.entries.remove(index);
        if self.primary_id == id {
            self.primary_id = self.default_id;
        }
        Ok(())
    }

    /// Designate an existing entry as the primary contact.
    pub fn set_primary(&mut self, id: Uuid) -> Result<(), ContactError> {
        if !self.entries.iter().any(|c| c.id == id) {
            return Err(ContactError::NotFound(id));
        }
        self.primary_id = id;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "contacts_test.rs"]
mod tests;
