//! Filter-expression tokenizer for query values.
//!
//! Syntax:
//!   item (sep item)*        - items joined by the item separator (default `,`)
//!   field OP value          - OP is any declared operator, no spacing needed
//!
//! Examples with `ops:>=,==,!=,>,<,-like-`:
//!   age>=7,gender==0        - {"age >=": "7", "gender ==": "0"}
//!   Lastname-like-Doe       - {"lastname -like-": "Doe"}
//!
//! Operators are matched by length class (6, 4, 2, then 1 bytes), so `>=`
//! always beats `>` at the same position. Other lengths are never matched.

mod map;
mod ops;
mod tokenizer;

pub use map::{FilterEntry, FilterMap};
pub use ops::{CANDIDATE_LENGTHS, OperatorSet};
pub use tokenizer::{Tokenized, tokenize, tokenize_items};
