use std::fmt;

/// A single contact, the value stored for each key of a [`ChainTable`](crate::ChainTable).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    /// Creates a new contact.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns the contact's name, which is also its key in the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact's phone number.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub(crate) fn set_number(&mut self, number: String) {
        self.number = number;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Contact::new("Alice", "111").to_string(), "Alice: 111");
        assert_eq!(Contact::new("", "").to_string(), ": ");
    }

    #[test]
    fn update_number() {
        let mut contact = Contact::new("Bob", "222");
        contact.set_number("999".to_owned());
        assert_eq!(contact.name(), "Bob");
        assert_eq!(contact.number(), "999");
    }
}
