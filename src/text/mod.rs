mod locate;
mod tokenize;

pub use locate::find_occurrences;
pub use tokenize::tokenize;
