/// slug 最大长度（字符）
pub const MAX_SLUG_LEN: usize = 60;

/// 由标题生成 URL 友好的 slug
///
/// 小写化后，将每段连续的非 `[a-z0-9]` 字符替换为单个 `-`，去掉首尾 `-`，
/// 截断到 60 个字符。截断后若末尾露出 `-` 也一并去掉。
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len().min(MAX_SLUG_LEN * 2));
    let mut pending_hyphen = false;

    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    // 只含 ASCII，按字节截断安全
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Q3 Report: Revenue & Growth!!"), "q3-report-revenue-growth");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ??? ---"), "");
    }

    #[test]
    fn test_leading_trailing_runs() {
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
    }

    #[test]
    fn test_unicode_collapses() {
        assert_eq!(slugify("Café Öffnung 2024"), "caf-ffnung-2024");
        assert_eq!(slugify("项目 Alpha"), "alpha");
    }

    #[test]
    fn test_truncation_never_ends_with_hyphen() {
        let title = format!("{} {}", "a".repeat(59), "bbbb");
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(59));
        assert!(slug.len() <= MAX_SLUG_LEN);

        let long = "word ".repeat(40);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }
}
