use std::path::Path;

/// Turn a clip's file name into its button label.
///
/// The last extension is stripped, underscores become spaces, the first
/// character is title-cased and the rest lower-cased:
/// `AIR_horn.mp3` -> `Air horn`.
pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    capitalize(&strip_extension(&name).replace('_', " "))
}

/// Drop the last `.ext`. Leading dots belong to the name, so `.mp3` and
/// `..mp3` have no extension.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[..dot],
        _ => name,
    }
}

fn capitalize(s: &str) -> String {
    let Some(first) = s.chars().next() else {
        return String::new();
    };
    // Lower-case the whole word so a trailing sigma sees its context.
    let lower = s.to_lowercase();
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();
    let mut out = title_case(first);
    out.push_str(&lower[skip..]);
    out
}

/// Title case of a single character. Differs from upper case only for
/// digraphs and characters whose upper case is more than one letter.
fn title_case(c: char) -> String {
    let mapped = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}
