use std::path::Path;
use stringcheck_core::LocaleId;

/// Locale of a resource file from its folder name: `values-fr` -> `fr`,
/// `values` -> `en`.
///
/// Everything after the first `-` is the tag (`values-pt-rBR` -> `pt-rBR`).
/// A trailing dash with nothing after it also falls back to `en`.
pub fn locale_for_path(path: &Path) -> LocaleId {
    let folder = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    locale_for_folder(folder)
}

pub fn locale_for_folder(folder: &str) -> LocaleId {
    match folder.split_once('-') {
        Some((_, "")) => {
            tracing::warn!(event = "locale_empty_suffix", folder = folder);
            LocaleId::reference()
        }
        Some((_, suffix)) => LocaleId::new(suffix),
        None => LocaleId::reference(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn folder_suffix_is_the_locale() {
        assert_eq!(locale_for_folder("values-fr").as_str(), "fr");
        assert_eq!(locale_for_folder("values-pt-rBR").as_str(), "pt-rBR");
        assert_eq!(locale_for_folder("values").as_str(), "en");
        assert_eq!(locale_for_folder("values-").as_str(), "en");
        assert_eq!(locale_for_folder("").as_str(), "en");
    }

    #[test]
    fn uses_parent_folder_of_file() {
        let p = PathBuf::from("app").join("res").join("values-ar").join("strings.xml");
        assert_eq!(locale_for_path(&p).as_str(), "ar");
        assert_eq!(locale_for_path(Path::new("strings.xml")).as_str(), "en");
    }
}
