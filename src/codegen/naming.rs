//! Identifier normalization: `snake_case` SQL names to Go identifiers.

/// Known initialisms, sorted, kept fully upper-case in generated identifiers.
pub const INITIALISMS: [&str; 38] = [
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Longest segment that is treated as a standalone initialism candidate.
const SHORT_SEGMENT: usize = 3;

/// Converts a SQL identifier into an exported Go identifier.
///
/// Segments between underscores are concatenated. Short segments that spell
/// a known initialism are upper-cased, everything else is title-cased. A
/// final pass restores initialisms found at the very start or end of the
/// result; occurrences in the middle are left as they are.
///
/// ```
/// use pgstructgen::codegen::naming::normalize;
///
/// assert_eq!(normalize("user_id"), "UserID");
/// assert_eq!(normalize("created_at"), "CreatedAt");
/// ```
#[must_use]
pub fn normalize(sql_name: &str) -> String {
    let mut draft = String::with_capacity(sql_name.len());
    for segment in sql_name.split('_').filter(|s| !s.is_empty()) {
        push_segment(&mut draft, segment);
    }
    correct_initialisms(draft)
}

/// Returns `true` if `word` (already upper-cased) is a known initialism.
#[must_use]
pub fn is_initialism(word: &str) -> bool {
    INITIALISMS.binary_search(&word).is_ok()
}

fn push_segment(out: &mut String, segment: &str) {
    let upper = segment.to_ascii_uppercase();
    if segment.chars().count() <= SHORT_SEGMENT && is_initialism(&upper) {
        out.push_str(&upper);
        return;
    }
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(&chars.as_str().to_ascii_lowercase());
    }
}

/// Rewrites leading and trailing initialisms in upper case.
///
/// Every check runs against the upper-cased form of the draft as it was
/// before any rewrite, so corrections never feed into one another.
fn correct_initialisms(mut draft: String) -> String {
    let upper = draft.to_ascii_uppercase();
    for initialism in INITIALISMS {
        if upper.ends_with(initialism) {
            let start = upper.len() - initialism.len();
            draft.replace_range(start.., initialism);
        }
        if upper.starts_with(initialism) {
            draft.replace_range(..initialism.len(), initialism);
        }
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialism_table_is_sorted_and_unique() {
        assert!(INITIALISMS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn lone_initialism_is_upper_cased() {
        assert_eq!(normalize("id"), "ID");
        assert_eq!(normalize("url"), "URL");
        assert_eq!(normalize("uuid"), "UUID");
    }

    #[test]
    fn trailing_initialism_is_restored() {
        assert_eq!(normalize("user_id"), "UserID");
        assert_eq!(normalize("user_uuid"), "UserUUID");
        assert_eq!(normalize("avatar_url"), "AvatarURL");
    }

    #[test]
    fn leading_initialism_is_restored() {
        assert_eq!(normalize("api_key"), "APIKey");
        assert_eq!(normalize("json_payload"), "JSONPayload");
    }

    #[test]
    fn adjacent_initialisms_both_fire() {
        assert_eq!(normalize("http_url"), "HTTPURL");
        assert_eq!(normalize("vm_ip"), "VMIP");
    }

    #[test]
    fn same_initialism_at_both_ends_fires_twice() {
        assert_eq!(normalize("http_http"), "HTTPHTTP");
        assert_eq!(normalize("idid"), "IDID");
    }

    #[test]
    fn plain_words_are_title_cased() {
        assert_eq!(normalize("created_at"), "CreatedAt");
        assert_eq!(normalize("user_accounts"), "UserAccounts");
        assert_eq!(normalize("zip_code"), "ZipCode");
    }

    #[test]
    fn interior_initialism_is_left_alone() {
        assert_eq!(normalize("get_http_url"), "GetHttpURL");
    }

    #[test]
    fn suffix_match_ignores_segment_boundaries() {
        assert_eq!(normalize("valid"), "ValID");
    }

    #[test]
    fn longer_initialism_wins_over_its_prefix() {
        assert_eq!(normalize("https"), "HTTPS");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(normalize("__user__id_"), "UserID");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("___"), "");
    }

    #[test]
    fn non_ascii_input_is_preserved() {
        assert_eq!(normalize("größe"), "Größe");
    }

    #[test]
    fn normalize_is_deterministic() {
        for name in ["id", "user_id", "http_url", "created_at", "tags"] {
            assert_eq!(normalize(name), normalize(name));
        }
    }
}
