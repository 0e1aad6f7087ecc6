use super::utils::{RuleContext, strings_at};
use crate::model::Node;
use crate::params::{ContainsKeywordsParams, KeywordMode};
use confguard_types::Finding;

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &ContainsKeywordsParams,
    out: &mut Vec<Finding>,
) {
    for (at, value) in strings_at(root, &p.path) {
        let matched = first_keyword(value, &p.keywords, p.case_sensitive);
        match (p.mode, matched) {
            (KeywordMode::Forbidden, Some(keyword)) => out.push(ctx.finding(
                at,
                format!("{} (contains keyword: {keyword})", ctx.message()),
            )),
            (KeywordMode::Required, None) => out.push(ctx.finding(at, ctx.message())),
            _ => {}
        }
    }
}

/// First keyword (in list order) contained in `value`.
fn first_keyword<'k>(value: &str, keywords: &'k [String], case_sensitive: bool) -> Option<&'k str> {
    if case_sensitive {
        return keywords
            .iter()
            .find(|kw| value.contains(kw.as_str()))
            .map(String::as_str);
    }
    let haystack = value.to_lowercase();
    keywords
        .iter()
        .find(|kw| haystack.contains(&kw.to_lowercase()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::first_keyword;

    #[test]
    fn case_folding_is_optional() {
        let keywords = vec!["Debug".to_string(), "internal".to_string()];
        assert_eq!(first_keyword("/DEBUG/x", &keywords, false), Some("Debug"));
        assert_eq!(first_keyword("/DEBUG/x", &keywords, true), None);
        assert_eq!(first_keyword("/internal/debug", &keywords, false), Some("Debug"));
        assert_eq!(first_keyword("/public", &keywords, false), None);
    }
}
