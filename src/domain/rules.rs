use crate::domain::SweepError;
use regex::{Regex, RegexBuilder};

/// A protection rule compiled from one `--exclude` argument.
///
/// A group name is protected when it equals the raw pattern
/// (case-insensitive) or when the compiled regex finds a match anywhere in
/// the name. Compilation happens once, before any group is classified.
#[derive(Debug, Clone)]
pub struct ProtectionRule {
    pattern: String,
    regex: Regex,
}

impl ProtectionRule {
    pub fn compile(pattern: &str) -> Result<Self, SweepError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| SweepError::Configuration {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, group_name: &str) -> bool {
        group_name.eq_ignore_ascii_case(&self.pattern) || self.regex.is_match(group_name)
    }
}

/// Compiles every pattern up front. Um padrão malformado aborta a
/// classificação inteira: ou todos os grupos são classificados, ou nenhum.
pub fn compile_rules(patterns: &[String]) -> Result<Vec<ProtectionRule>, SweepError> {
    patterns
        .iter()
        .map(|pattern| ProtectionRule::compile(pattern))
        .collect()
}
