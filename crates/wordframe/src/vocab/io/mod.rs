//! # Vocabulary IO
//!
//! Vocabularies are stored one token per line, in id order:
//! ```terminaloutput
//! {BASE64 TOKEN} {ID}
//! ```
//!
//! Base64 keeps tokens containing whitespace intact.

mod base64_vocab;

#[doc(inline)]
pub use base64_vocab::{
    load_vocabulary_path,
    read_vocabulary,
    save_vocabulary_path,
    write_vocabulary,
};
