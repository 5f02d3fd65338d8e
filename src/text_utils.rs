use unidecode::unidecode;

/// Turns free text into a URL slug: "Homelab Setup: Ábaco!" -> "homelab-setup-abaco".
/// Whitespace runs become a single hyphen; everything that is not a word
/// character or hyphen is dropped.
pub fn slugify(text: &str) -> String {
    let text = unidecode(text.trim()).to_lowercase();

    let mut slug = String::new();
    let mut prev_hyphen = false;
    for c in text.chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' || c == '_' || c.is_ascii_alphanumeric() {
            if c == '-' && prev_hyphen {
                continue;
            }
            slug.push(c);
            prev_hyphen = c == '-';
        }
    }

    slug.trim_matches('-').to_string()
}

/// Humanizes a slug segment: "getting-started" -> "Getting Started".
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
