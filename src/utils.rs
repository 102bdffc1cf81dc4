// src/utils.rs
use std::path::{Path, PathBuf};

/// Normalize a name fragment (first name, position, ...) for use inside a
/// file name: joining characters become dashes, anything that is not ASCII
/// alphanumeric, a dash or a dot is dropped, and dash runs collapse.
/// The result may be empty.
pub fn sanitize_base_name(name: &str) -> String {
    let mapped: String = name
        .trim()
        .chars()
        .filter_map(|c| match c {
            ' ' | '&' | '_' | '=' | '+' | ':' => Some('-'),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '.' => Some(c),
            _ => None,
        })
        .collect();

    let mut out = String::with_capacity(mapped.len());
    for c in mapped.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Sanitize a server-provided file name so it stays a single path component.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes
pub fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extension of `file_name` including the leading dot, or an empty string.
pub fn dotted_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", sanitize_base_name(ext)))
        .filter(|ext| ext.len() > 1)
        .unwrap_or_default()
}

/// Expand `~/` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_base_name() {
        assert_eq!(sanitize_base_name("Jane"), "Jane");
        assert_eq!(sanitize_base_name("Software Engineer"), "Software-Engineer");
        assert_eq!(sanitize_base_name("R&D / QA"), "R-D-QA");
        assert_eq!(sanitize_base_name("O'Brien"), "OBrien");
        assert_eq!(sanitize_base_name("  Sr. Dev_Ops  "), "Sr.-Dev-Ops");
        assert_eq!(sanitize_base_name("***"), "");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("a/b\\c.pdf"), "a_b_c.pdf");
        assert_eq!(sanitize_file_name("  ..resume.pdf.. "), "resume.pdf");
        assert_eq!(sanitize_file_name("cv\x00final.docx"), "cv_final.docx");
        assert_eq!(sanitize_file_name(&"x".repeat(300)).len(), 255);
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension("resume.pdf"), ".pdf");
        assert_eq!(dotted_extension("Jane Doe CV.final.DOCX"), ".DOCX");
        assert_eq!(dotted_extension("noext"), "");
        assert_eq!(dotted_extension(""), "");
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("/tmp/out")), PathBuf::from("/tmp/out"));
        assert_eq!(expand_tilde(Path::new("out")), PathBuf::from("out"));
    }
}
