//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how plan names become type, member and file names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a plan name into a type name (e.g., "rate_limited" -> "RateLimited")
    pub to_type: fn(&str) -> String,
    /// Transform a plan name into a member name (e.g., "api_key" -> "apiKey")
    pub to_member: fn(&str) -> String,
    /// Transform a plan name into a file name (e.g., "ErrorHandling" -> "error-handling")
    pub to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    /// Transform and make safe for use as a member name.
    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    pub fn file_name(&self, name: &str) -> String {
        (self.to_file)(name)
    }
}
