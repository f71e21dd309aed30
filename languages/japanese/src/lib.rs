pub mod dictionary;
pub mod loader;

pub use dictionary::{JapaneseDictionary, LoadError};
pub use loader::DictionaryLoader;
