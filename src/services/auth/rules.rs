//! URL パターン → role 要求のルール表。
//!
//! - パターンは path-segment 単位の glob: `*` は 1 セグメント、`**` は残り全部。
//! - method は完全一致 or any。
//! - 上から順に評価して最初にマッチしたルールが勝つ。
//! - どのルールにもマッチしなければ既定は `Authenticated` (何らかの認証が必要)。

use axum::http::Method;

/// ルールが要求するもの。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// 認証不要。認証フィルタもスキップする。
    Public,
    /// 何らかの認証済み Identity があればよい。
    Authenticated,
    /// いずれかの role を持つ認証済み Identity が必要。
    AnyRole(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AuthorizationRule {
    pattern: PathPattern,
    method: Option<Method>,
    requirement: Requirement,
}

impl AuthorizationRule {
    pub fn new(method: Option<Method>, pattern: &str, requirement: Requirement) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            method,
            requirement,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        if let Some(m) = &self.method
            && m != method
        {
            return false;
        }
        self.pattern.matches(path)
    }
}

/// 順序付きルール表。登録順がそのまま評価順。
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<AuthorizationRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// method 指定なし (any) のルールを追加する。
    pub fn route(self, pattern: &str, requirement: Requirement) -> Self {
        self.push(AuthorizationRule::new(None, pattern, requirement))
    }

    /// method 指定ありのルールを追加する。
    pub fn route_method(self, method: Method, pattern: &str, requirement: Requirement) -> Self {
        self.push(AuthorizationRule::new(Some(method), pattern, requirement))
    }

    fn push(mut self, rule: AuthorizationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// 最初にマッチしたルールの要求を返す。マッチなしは `Authenticated`。
    pub fn requirement(&self, method: &Method, path: &str) -> &Requirement {
        self.rules
            .iter()
            .find(|r| r.matches(method, path))
            .map(|r| &r.requirement)
            .unwrap_or(&Requirement::Authenticated)
    }

    pub fn is_public(&self, method: &Method, path: &str) -> bool {
        *self.requirement(method, path) == Requirement::Public
    }
}

#[derive(Debug, Clone)]
struct PathPattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    // `*`
    AnyOne,
    // `**` (パターン末尾のみ意味を持つ。残り全セグメントにマッチ)
    Rest,
}

impl PathPattern {
    fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s {
                "**" => Segment::Rest,
                "*" => Segment::AnyOne,
                lit => Segment::Literal(lit.to_string()),
            })
            .collect();
        Self { segments }
    }

    fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut i = 0;
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::AnyOne => {
                    if i >= parts.len() {
                        return false;
                    }
                    i += 1;
                }
                Segment::Literal(lit) => {
                    if parts.get(i) != Some(&lit.as_str()) {
                        return false;
                    }
                    i += 1;
                }
            }
        }

        i == parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_matches_exact_path_only() {
        let p = PathPattern::parse("/login");
        assert!(p.matches("/login"));
        assert!(!p.matches("/login/extra"));
        assert!(!p.matches("/logout"));
    }

    #[test]
    fn root_pattern_matches_root() {
        let p = PathPattern::parse("/");
        assert!(p.matches("/"));
        assert!(!p.matches("/anything"));
    }

    #[test]
    fn single_star_matches_exactly_one_segment() {
        let p = PathPattern::parse("/api/v1/orders/*");
        assert!(p.matches("/api/v1/orders/42"));
        assert!(!p.matches("/api/v1/orders"));
        assert!(!p.matches("/api/v1/orders/42/lines"));
    }

    #[test]
    fn double_star_matches_any_remainder_including_empty() {
        let p = PathPattern::parse("/api/v1/orders/**");
        assert!(p.matches("/api/v1/orders"));
        assert!(p.matches("/api/v1/orders/42"));
        assert!(p.matches("/api/v1/orders/42/lines/7"));
        assert!(!p.matches("/api/v1/users"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = RuleSet::new()
            .route_method(Method::GET, "/api/v1/orders/**", Requirement::Public)
            .route(
                "/api/v1/orders/**",
                Requirement::AnyRole(vec!["ADMIN".into()]),
            );

        assert_eq!(
            *rules.requirement(&Method::GET, "/api/v1/orders/42"),
            Requirement::Public
        );
        assert_eq!(
            *rules.requirement(&Method::DELETE, "/api/v1/orders/42"),
            Requirement::AnyRole(vec!["ADMIN".into()])
        );
    }

    #[test]
    fn method_rule_only_matches_that_verb() {
        let rules = RuleSet::new().route_method(Method::GET, "/reports/**", Requirement::Public);

        assert!(rules.is_public(&Method::GET, "/reports/2024"));
        assert!(!rules.is_public(&Method::POST, "/reports/2024"));
    }

    #[test]
    fn unmatched_path_defaults_to_authenticated() {
        let rules = RuleSet::new().route("/login", Requirement::Public);
        assert_eq!(
            *rules.requirement(&Method::GET, "/api/v1/secret"),
            Requirement::Authenticated
        );
    }
}
