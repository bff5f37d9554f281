use crate::error::RuleError;
use crate::ir::rule::Rule;

/// Trait for rule frontends that parse rule definitions from various formats.
///
/// Implementations provide parsing from specific file formats (JSON, YAML,
/// etc.) into the intermediate rule representation. The parsed rules are not
/// yet compiled; callers hand them to
/// [`RuleSet::compile`](crate::RuleSet::compile).
pub trait RuleFrontend: Send + Sync {
    /// Return the file extensions this frontend supports (e.g., `["json"]`).
    fn extensions(&self) -> &[&str];

    /// Parse rules from string content.
    fn parse(&self, content: &str) -> Result<Vec<Rule>, RuleError>;

    /// Parse rules from a file path.
    ///
    /// The default implementation reads the file and delegates to
    /// [`parse`](Self::parse).
    fn parse_file(&self, path: &std::path::Path) -> Result<Vec<Rule>, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::MalformedRuleSet(format!("cannot read {}: {e}", path.display()))
        })?;
        self.parse(&content)
    }
}
