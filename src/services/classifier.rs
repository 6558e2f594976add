use crate::domain::{ProtectionRule, ResourceGroup};

/// Result of partitioning the candidate set against the protection rules.
///
/// Invariante: `to_delete` e `to_keep` são disjuntos, a união é igual à
/// entrada e cada metade preserva a ordem de enumeração original.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub to_delete: Vec<ResourceGroup>,
    pub to_keep: Vec<ResourceGroup>,
}

impl Classified {
    pub fn total(&self) -> usize {
        self.to_delete.len() + self.to_keep.len()
    }
}

/// Stable partition of `groups` into delete/keep sets.
///
/// A group is kept when ANY rule matches its name; rules have no precedence
/// among themselves. Pure function, no side effects.
pub fn classify(groups: Vec<ResourceGroup>, rules: &[ProtectionRule]) -> Classified {
    let mut classified = Classified::default();

    for group in groups {
        if rules.iter().any(|rule| rule.matches(&group.name)) {
            classified.to_keep.push(group);
        } else {
            classified.to_delete.push(group);
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compile_rules;

    fn group(name: &str) -> ResourceGroup {
        ResourceGroup::new(name, "sub-1", "Assinatura Teste")
    }

    fn rules(patterns: &[&str]) -> Vec<ProtectionRule> {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        compile_rules(&patterns).unwrap()
    }

    fn names(groups: &[ResourceGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        let input = vec![group("rg-a"), group("rg-prod"), group("rg-b")];
        let classified = classify(input.clone(), &rules(&["prod"]));

        assert_eq!(classified.total(), input.len());
        for g in &input {
            let in_delete = classified.to_delete.contains(g);
            let in_keep = classified.to_keep.contains(g);
            assert!(in_delete != in_keep, "{} deve estar em exatamente um lado", g.name);
        }
    }

    #[test]
    fn partition_preserves_input_order() {
        let input = vec![
            group("rg-c"),
            group("rg-prod-1"),
            group("rg-a"),
            group("rg-prod-2"),
            group("rg-b"),
        ];
        let classified = classify(input, &rules(&["prod"]));

        assert_eq!(names(&classified.to_delete), vec!["rg-c", "rg-a", "rg-b"]);
        assert_eq!(names(&classified.to_keep), vec!["rg-prod-1", "rg-prod-2"]);
    }

    #[test]
    fn no_rules_protects_nothing() {
        let input = vec![group("rg-a"), group("rg-b")];
        let classified = classify(input, &[]);

        assert_eq!(classified.to_delete.len(), 2);
        assert!(classified.to_keep.is_empty());
    }

    #[test]
    fn exact_match_protects_case_insensitively() {
        let input = vec![group("RG-Prod"), group("rg-dev")];
        let classified = classify(input, &rules(&["rg-prod"]));

        assert_eq!(names(&classified.to_keep), vec!["RG-Prod"]);
        assert_eq!(names(&classified.to_delete), vec!["rg-dev"]);
    }

    #[test]
    fn anchored_regex_protects_only_full_shape() {
        let input = vec![group("rg-app-prod"), group("rg-prod-app")];
        let classified = classify(input, &rules(&["^rg-.*-prod$"]));

        assert_eq!(names(&classified.to_keep), vec!["rg-app-prod"]);
        assert_eq!(names(&classified.to_delete), vec!["rg-prod-app"]);
    }

    #[test]
    fn any_matching_rule_protects() {
        let input = vec![group("rg-x"), group("rg-y"), group("rg-z")];
        let classified = classify(input, &rules(&["rg-x", "rg-z"]));

        assert_eq!(names(&classified.to_keep), vec!["rg-x", "rg-z"]);
        assert_eq!(names(&classified.to_delete), vec!["rg-y"]);
    }

    #[test]
    fn empty_input_yields_empty_partition() {
        let classified = classify(Vec::new(), &rules(&["prod"]));
        assert_eq!(classified.total(), 0);
    }
}
