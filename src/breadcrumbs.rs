use crate::text_utils::slug_to_title;

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` on the last crumb, which is the current page.
    pub href: Option<String>,
}

/// Breadcrumb trail for a URL path. The caller prepends its own "Home"
/// crumb, so the root path yields an empty trail.
pub fn breadcrumbs_from_path(pathname: &str) -> Vec<Breadcrumb> {
    let trimmed = pathname.trim_matches('/');
    if trimmed.is_empty() {
        return vec![];
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    let mut crumbs = vec![];
    let mut href = String::new();

    for (i, segment) in segments.iter().enumerate() {
        href.push('/');
        href.push_str(segment);
        let is_last = i == segments.len() - 1;
        crumbs.push(Breadcrumb {
            label: slug_to_title(segment),
            href: if is_last { None } else { Some(href.clone()) },
        });
    }
    crumbs
}
