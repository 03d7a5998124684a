use {
    derive_builder::Builder,
    lazy_static::lazy_static,
    log::debug,
    regex::{Captures, Regex},
};

lazy_static! {
    /// Matches a `${Name}` placeholder in an ARN or condition-key template.
    pub(crate) static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([0-9A-Za-z]+)\}").unwrap();
}

/// Returns true if `s` still contains unsubstituted template placeholders.
#[inline]
pub(crate) fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER.is_match(s)
}

/// The partition, region, and account applied to ARN templates when the
/// caller supplies no per-call override.
///
/// This is the embedding context's "set once, used everywhere" configuration:
/// build one value at process start and thread it through the statement
/// constructors. An unset region or account resolves to the wildcard `*`; the
/// partition defaults to `aws`.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct ArnDefaults {
    #[builder(setter(into), default = r#""aws".to_string()"#)]
    partition: String,

    #[builder(setter(into, strip_option), default)]
    region: Option<String>,

    #[builder(setter(into, strip_option), default)]
    account: Option<String>,
}

impl Default for ArnDefaults {
    fn default() -> Self {
        Self {
            partition: "aws".to_string(),
            region: None,
            account: None,
        }
    }
}

impl ArnDefaults {
    #[inline]
    pub fn builder() -> ArnDefaultsBuilder {
        ArnDefaultsBuilder::default()
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[inline]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Substitutes the placeholders in an ARN template.
    ///
    /// Resource-specific placeholders are taken from `values` by name.
    /// `${Account}` and `${Region}` fall back to the per-call override, then
    /// to this configuration, then to `*`; `${Partition}` falls back to this
    /// configuration's partition. A resource-specific placeholder with no
    /// value in `values` is left in place (a defect in the service's data
    /// table, not a runtime error). Resolving a string with no remaining
    /// placeholders returns it unchanged.
    pub fn resolve(
        &self,
        template: &str,
        values: &[(&str, &str)],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| match &caps[1] {
                "Partition" => partition.unwrap_or(self.partition()).to_string(),
                "Region" => region.or(self.region()).unwrap_or("*").to_string(),
                "Account" => account.or(self.account()).unwrap_or("*").to_string(),
                name => match values.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => value.to_string(),
                    None => {
                        debug!("No value supplied for placeholder ${{{}}} in template {}", name, template);
                        caps[0].to_string()
                    }
                },
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use {crate::ArnDefaults, pretty_assertions::assert_eq};

    const REPOSITORY_TEMPLATE: &str = "arn:${Partition}:codecommit:${Region}:${Account}:${RepositoryName}";

    #[test_log::test]
    fn test_resolve_with_defaults() {
        let defaults = ArnDefaults::default();
        let arn = defaults.resolve(REPOSITORY_TEMPLATE, &[("RepositoryName", "my-repo")], None, None, None);
        assert_eq!(arn, "arn:aws:codecommit:*:*:my-repo");
    }

    #[test_log::test]
    fn test_resolve_idempotent() {
        let defaults = ArnDefaults::default();
        let arn = defaults.resolve(REPOSITORY_TEMPLATE, &[("RepositoryName", "my-repo")], None, None, None);
        let again = defaults.resolve(&arn, &[], None, None, None);
        assert_eq!(arn, again);
    }

    #[test_log::test]
    fn test_resolve_with_overrides() {
        let defaults = ArnDefaults::default();
        let arn = defaults.resolve(
            REPOSITORY_TEMPLATE,
            &[("RepositoryName", "my-repo")],
            Some("123456789012"),
            Some("us-east-1"),
            Some("aws-us-gov"),
        );
        assert_eq!(arn, "arn:aws-us-gov:codecommit:us-east-1:123456789012:my-repo");
    }

    #[test_log::test]
    fn test_resolve_with_configured_defaults() {
        let defaults =
            ArnDefaults::builder().partition("aws-cn").region("cn-north-1").account("123456789012").build().unwrap();
        assert_eq!(defaults.partition(), "aws-cn");
        assert_eq!(defaults.region(), Some("cn-north-1"));
        assert_eq!(defaults.account(), Some("123456789012"));

        let arn = defaults.resolve(REPOSITORY_TEMPLATE, &[("RepositoryName", "my-repo")], None, None, None);
        assert_eq!(arn, "arn:aws-cn:codecommit:cn-north-1:123456789012:my-repo");

        // Per-call overrides still win over the configured defaults.
        let arn = defaults.resolve(REPOSITORY_TEMPLATE, &[("RepositoryName", "my-repo")], None, Some("cn-northwest-1"), None);
        assert_eq!(arn, "arn:aws-cn:codecommit:cn-northwest-1:123456789012:my-repo");
    }

    #[test_log::test]
    fn test_missing_value_left_in_place() {
        let defaults = ArnDefaults::default();
        let arn = defaults.resolve(REPOSITORY_TEMPLATE, &[], None, None, None);
        assert_eq!(arn, "arn:aws:codecommit:*:*:${RepositoryName}");
    }

    #[test_log::test]
    fn test_builder_defaults() {
        let built = ArnDefaults::builder().build().unwrap();
        assert_eq!(built, ArnDefaults::default());
    }
}
