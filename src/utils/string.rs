//text inputs that are empty or whitespace-only never reach the database
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

//fandom tag names: lowercase, alphanumeric and hyphens only
pub fn normalize_tag(input: &str) -> Result<String, String> {
    let tag = input.trim().to_lowercase().replace(' ', "-");

    if tag.is_empty() {
        return Err("tag name required".to_string());
    }

    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(
            "tag name may only contain letters, numbers and hyphens".to_string()
        );
    }

    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t"));
        assert!(!is_blank("  hello  "));
    }

    #[test]
    fn tag_normalization() {
        assert_eq!(normalize_tag("K Pop Girl Groups").unwrap(), "k-pop-girl-groups");
        assert_eq!(normalize_tag("  NewJeans  ").unwrap(), "newjeans");
        assert!(normalize_tag("").is_err());
        assert!(normalize_tag("bad!tag").is_err());
    }
}
