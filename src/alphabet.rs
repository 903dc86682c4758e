use std::fmt;

const UPPERCASE:     &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE:     &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS:        &[u8; 10] = b"0123456789";
const SYMBOLS:       &[u8; 5]  = b"!#$%&";
const EXTRA_SYMBOLS: &[u8; 4]  = b"()\"'";

/// One of the five fixed character groups. The sets are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    ExtraSymbols,
}

impl Category {
    /// Every category, in the order their characters appear in an alphabet.
    pub const ALL: [Category; 5] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digits,
        Category::Symbols,
        Category::ExtraSymbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            Category::Uppercase    => UPPERCASE,
            Category::Lowercase    => LOWERCASE,
            Category::Digits       => DIGITS,
            Category::Symbols      => SYMBOLS,
            Category::ExtraSymbols => EXTRA_SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Uppercase    => "uppercase latin (A-Z)",
            Category::Lowercase    => "lowercase latin (a-z)",
            Category::Digits       => "digits (0-9)",
            Category::Symbols      => "symbols (! # $ % &)",
            Category::ExtraSymbols => "extra symbols (( ) \" ')",
        }
    }

    /// 1-based position used by the session's toggle commands.
    pub fn from_number(n: usize) -> Option<Category> {
        n.checked_sub(1).and_then(|i| Category::ALL.get(i).copied())
    }
}

/// Which categories contribute to the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub uppercase:     bool,
    pub lowercase:     bool,
    pub digits:        bool,
    pub symbols:       bool,
    pub extra_symbols: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            uppercase:     true,
            lowercase:     true,
            digits:        true,
            symbols:       true,
            extra_symbols: false,
        }
    }
}

impl Selection {
    #[cfg(test)]
    pub fn all() -> Self {
        Selection {
            uppercase:     true,
            lowercase:     true,
            digits:        true,
            symbols:       true,
            extra_symbols: true,
        }
    }

    pub fn none() -> Self {
        Selection {
            uppercase:     false,
            lowercase:     false,
            digits:        false,
            symbols:       false,
            extra_symbols: false,
        }
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Uppercase    => &mut self.uppercase,
            Category::Lowercase    => &mut self.lowercase,
            Category::Digits       => &mut self.digits,
            Category::Symbols      => &mut self.symbols,
            Category::ExtraSymbols => &mut self.extra_symbols,
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Uppercase    => self.uppercase,
            Category::Lowercase    => self.lowercase,
            Category::Digits       => self.digits,
            Category::Symbols      => self.symbols,
            Category::ExtraSymbols => self.extra_symbols,
        }
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        *self.flag_mut(category) = enabled;
    }

    /// Flips a category and returns its new state.
    pub fn toggle(&mut self, category: Category) -> bool {
        let flag = self.flag_mut(category);
        *flag = !*flag;
        *flag
    }

    /// Live size of the alphabet this selection would produce.
    pub fn alphabet_size(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.is_enabled(**c))
            .map(|c| c.chars().len())
            .sum()
    }
}

/// Ordered set of unique characters eligible for a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Concatenates the enabled category sets in the fixed category order.
/// An empty selection gives an empty alphabet; rejecting it is up to the caller.
pub fn build(selection: &Selection) -> Alphabet {
    let chars = Category::ALL
        .iter()
        .filter(|c| selection.is_enabled(**c))
        .flat_map(|c| c.chars().iter())
        .map(|b| *b as char)
        .collect();
    Alphabet { chars }
}
