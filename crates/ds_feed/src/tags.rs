/// Keyword vocabulary, in output order.
pub const VOCABULARY: [&str; 17] = [
    "javascript",
    "react",
    "typescript",
    "node",
    "nextjs",
    "css",
    "html",
    "python",
    "webdev",
    "frontend",
    "backend",
    "programming",
    "coding",
    "development",
    "software",
    "tech",
    "technology",
];

/// Every vocabulary keyword appearing in `content` as a case-insensitive
/// substring, in vocabulary order. Pure function.
pub fn extract_tags(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
