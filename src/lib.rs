//! Human-readable pattern matching.
//!
//! Patterns mix literal characters with bracketed class tokens of the form
//! `[type:range:length]`. A pattern compiles once into an [`Ast`] and can then
//! be matched against any number of texts.
//!
//! # Pattern syntax
//!
//! | Token             | Meaning                                        |
//! |-------------------|------------------------------------------------|
//! | `c`               | Literal character                              |
//! | `\c`              | Escaped literal (`\[` matches a real bracket)  |
//! | `[str::]`         | One or more letters                            |
//! | `[anum::]`        | One or more letters or digits                  |
//! | `[hex::]`         | One or more hexadecimal digits                 |
//! | `[oct::]`         | One or more octal digits                       |
//! | `[dec::]`         | One or more decimal digits                     |
//! | `[bin::]`         | One or more binary digits                      |
//! | `[x::]`           | One or more arbitrary characters (wildcard)    |
//! | `[str:A-Z:]`      | Custom range                                   |
//! | `[anum:!a-z:]`    | Negated set                                    |
//! | `[str::3]`        | Exactly three characters                       |
//! | `[str::>=2<=4]`   | Between two and four characters                |
//!
//! The range field also accepts `|`-separated alternatives (`S|s`) and
//! backtick-delimited literal strings (`` `black`|`WHITE` ``), which match one
//! of the given strings whole. Length operators `>` and `<` are exclusive, so
//! `>1<5` means between two and four.
//!
//! # Example
//!
//! ```rust
//! use textpat::{find_all, is_match};
//!
//! assert!(is_match("[dec::3]-[dec::3]-[dec::4]", "555-867-5309").unwrap());
//!
//! assert_eq!(
//!     find_all("[dec::]", "abc123def456").unwrap(),
//!     vec!["123", "456"],
//! );
//! ```

mod ast;
mod char_set;
mod lexer;
mod matcher;
mod parser;
mod token;

pub use ast::{Ast, ClassNode, Node};
pub use char_set::CharSet;
pub use lexer::{Lexer, PatternError};
pub use matcher::{Match, Matcher, find, find_all, is_match};
pub use parser::parse;
pub use token::{CharType, ClassKind, ClassToken, LengthConstraint, Token};
