mod bing;
mod client;
mod google;
mod google_cloud;
mod language;
pub mod mock;
mod skip_list;

pub use client::{Translation, Translator, build_translator, http_client};
pub use language::{LANG_SUPPORT_FILE, LanguageSupport, TYPESETTING_COLUMN};
pub use mock::{MockMode, MockTranslator};
pub use skip_list::{SKIP_LIST_DIR, SkipList};
