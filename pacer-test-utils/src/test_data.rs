// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Search-box input captured at one keystroke.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Query {
    pub text: String,
    pub revision: u32,
}

impl Query {
    #[must_use]
    pub fn new(text: impl Into<String>, revision: u32) -> Self {
        Self {
            text: text.into(),
            revision,
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query[text={}, revision={}]", self.text, self.revision)
    }
}

#[must_use]
pub fn query_r() -> Query {
    Query::new("r", 1)
}

#[must_use]
pub fn query_ru() -> Query {
    Query::new("ru", 2)
}

#[must_use]
pub fn query_rus() -> Query {
    Query::new("rus", 3)
}

#[must_use]
pub fn query_rust() -> Query {
    Query::new("rust", 4)
}

/// One query per prefix of `word`, revisions starting at 1.
///
/// ```rust
/// use pacer_test_utils::test_data::{typed, query_r, query_ru};
///
/// assert_eq!(typed("ru"), vec![query_r(), query_ru()]);
/// ```
#[must_use]
pub fn typed(word: &str) -> Vec<Query> {
    word.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .zip(1..)
        .map(|(end, revision)| Query::new(&word[..end], revision))
        .collect()
}
