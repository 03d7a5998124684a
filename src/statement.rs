use {
    crate::{
        arn::has_placeholders,
        condition::{ConditionClause, ConditionMap, ConditionOp, ConditionValues},
        display_json,
        serutil::StringSet,
        ArnDefaults, Effect, ServiceSpec,
    },
    log::debug,
    serde::{ser::SerializeMap, Serialize, Serializer},
};

/// Accumulates one IAM policy statement for a single service and serializes
/// it as the canonical statement document.
///
/// A statement starts as an `Allow` with no actions, resources, or
/// conditions, and grows monotonically through the fluent mutators; there
/// are no removal operations. Build a fresh instance to start over. A
/// statement is intended for single-threaded construction by one call chain.
///
/// ```
/// use scratchstack_aspen_builder::{PolicyStatement, services::CODECOMMIT};
///
/// let mut statement = PolicyStatement::new(CODECOMMIT);
/// statement.to("CreateRepository").if_aws_request_tag("Team", ["payments"], None);
/// assert_eq!(
///     statement.to_json().unwrap(),
///     r#"{"Effect":"Allow","Action":"codecommit:CreateRepository","Resource":"*","Condition":{"StringLike":{"aws:RequestTag/Team":["payments"]}}}"#
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyStatement {
    sid: Option<String>,
    effect: Effect,
    actions: StringSet,
    resources: StringSet,
    conditions: ConditionMap,
    service: ServiceSpec,
    arn_defaults: ArnDefaults,
}

impl PolicyStatement {
    /// Creates an empty `Allow` statement for `service` with the stock
    /// [ArnDefaults].
    pub fn new(service: ServiceSpec) -> Self {
        Self::with_arn_defaults(service, ArnDefaults::default())
    }

    /// Creates an empty `Allow` statement carrying the embedding context's
    /// ARN defaults.
    pub fn with_arn_defaults(service: ServiceSpec, arn_defaults: ArnDefaults) -> Self {
        Self {
            sid: None,
            effect: Effect::default(),
            actions: StringSet::new(),
            resources: StringSet::new(),
            conditions: ConditionMap::new(),
            service,
            arn_defaults,
        }
    }

    #[inline]
    pub fn service(&self) -> &ServiceSpec {
        &self.service
    }

    #[inline]
    pub fn service_prefix(&self) -> &'static str {
        self.service.prefix
    }

    #[inline]
    pub fn arn_defaults(&self) -> &ArnDefaults {
        &self.arn_defaults
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn set_sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.sid = Some(sid.into());
        self
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn allow(&mut self) -> &mut Self {
        self.effect = Effect::Allow;
        self
    }

    pub fn deny(&mut self) -> &mut Self {
        self.effect = Effect::Deny;
        self
    }

    /// Adds an action by its bare name, qualified with the service prefix.
    /// Re-adding an action is a no-op.
    pub fn to(&mut self, action: &str) -> &mut Self {
        self.actions.insert(format!("{}:{}", self.service.prefix, action));
        self
    }

    /// Adds an already-qualified action string unchanged, e.g. the service
    /// wildcard `codecommit:*`.
    pub fn to_qualified<S: Into<String>>(&mut self, action: S) -> &mut Self {
        self.actions.insert(action.into());
        self
    }

    /// Adds a resource ARN (or `*`). Re-adding a resource is a no-op. If no
    /// resource is ever added, serialization emits the wildcard.
    pub fn on<S: Into<String>>(&mut self, arn: S) -> &mut Self {
        let arn = arn.into();
        if has_placeholders(&arn) {
            debug!("Resource {} still contains unsubstituted placeholders", arn);
        }

        self.resources.insert(arn);
        self
    }

    /// Resolves one of the service's resource-type ARN templates and adds
    /// the result. An unknown resource type is ignored (and logged); the
    /// generated service layer is expected to name only types from its own
    /// table.
    pub fn on_resource_type(
        &mut self,
        resource_type: &str,
        values: &[(&str, &str)],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        match self.service.resource_type(resource_type) {
            Some(spec) => {
                let arn = self.arn_defaults.resolve(spec.arn_template, values, account, region, partition);
                self.on(arn)
            }
            None => {
                debug!("Service {} has no resource type {}", self.service.prefix, resource_type);
                self
            }
        }
    }

    /// Merges a prebuilt condition clause into the statement.
    pub fn if_clause(&mut self, clause: ConditionClause) -> &mut Self {
        self.conditions.insert(clause);
        self
    }

    /// Adds a condition on `key`. A bare key (no `:`) is qualified with the
    /// service prefix. When `op` is None the key's documented default
    /// operator is taken from the service table, falling back to
    /// `StringLike`; an explicit operator always wins.
    pub fn if_key<V: Into<ConditionValues>>(&mut self, key: &str, values: V, op: Option<ConditionOp>) -> &mut Self {
        let key = if !key.contains(':') && !self.service.prefix.is_empty() {
            format!("{}:{}", self.service.prefix, key)
        } else {
            key.to_string()
        };

        let op = op
            .or_else(|| self.service.default_op_for(&key))
            .unwrap_or(crate::condop::StringLike);

        self.if_clause(ConditionClause::with_op(key, values, op))
    }

    #[inline]
    pub fn actions(&self) -> &StringSet {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &StringSet {
        &self.resources
    }

    #[inline]
    pub fn conditions(&self) -> &ConditionMap {
        &self.conditions
    }

    /// Renders the statement document as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

display_json!(PolicyStatement);

impl Serialize for PolicyStatement {
    /// Emits the canonical statement document: `Sid` (when set), `Effect`,
    /// `Action`, `Resource` (the wildcard when no resource was added), and
    /// `Condition` (omitted when empty). Serialization reads the
    /// accumulated state without mutating it, so repeated calls yield
    /// identical output.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.sid.is_some()) + usize::from(!self.conditions.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;

        if let Some(sid) = &self.sid {
            map.serialize_entry("Sid", sid)?;
        }

        map.serialize_entry("Effect", &self.effect)?;
        map.serialize_entry("Action", &self.actions)?;

        if self.resources.is_empty() {
            map.serialize_entry("Resource", "*")?;
        } else {
            map.serialize_entry("Resource", &self.resources)?;
        }

        if !self.conditions.is_empty() {
            map.serialize_entry("Condition", &self.conditions)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, services::CODECOMMIT, ArnDefaults, ConditionClause, Effect, PolicyStatement},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_new_statement_defaults() {
        let statement = PolicyStatement::new(CODECOMMIT);
        assert_eq!(statement.effect(), Effect::Allow);
        assert_eq!(statement.service_prefix(), "codecommit");
        assert!(statement.sid().is_none());
        assert!(statement.actions().is_empty());
        assert!(statement.resources().is_empty());
        assert!(statement.conditions().is_empty());
    }

    #[test_log::test]
    fn test_single_action_with_condition() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("CreateRepository").if_key("aws:RequestTag/Team", ["payments"], None);

        assert_eq!(
            statement.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":"codecommit:CreateRepository","Resource":"*","#,
                r#""Condition":{"StringLike":{"aws:RequestTag/Team":["payments"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_actions_dedup_and_qualify() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPull").to("GitPush").to("GitPull");

        assert_eq!(statement.actions().to_vec(), vec!["codecommit:GitPull", "codecommit:GitPush"]);
        assert_eq!(
            statement.to_json().unwrap(),
            r#"{"Effect":"Allow","Action":["codecommit:GitPull","codecommit:GitPush"],"Resource":"*"}"#
        );
    }

    #[test_log::test]
    fn test_multiple_actions_and_resources_serialize_as_arrays() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement
            .to("GitPull")
            .to("GitPush")
            .on("arn:aws:codecommit:*:*:repo-one")
            .on("arn:aws:codecommit:*:*:repo-two");

        assert_eq!(
            statement.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":["codecommit:GitPull","codecommit:GitPush"],"#,
                r#""Resource":["arn:aws:codecommit:*:*:repo-one","arn:aws:codecommit:*:*:repo-two"]}"#
            )
        );
    }

    #[test_log::test]
    fn test_sid_and_deny() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.set_sid("DenyDeletes").deny().to("DeleteRepository");

        assert_eq!(statement.sid(), Some("DenyDeletes"));
        assert_eq!(
            statement.to_json().unwrap(),
            r#"{"Sid":"DenyDeletes","Effect":"Deny","Action":"codecommit:DeleteRepository","Resource":"*"}"#
        );
    }

    #[test_log::test]
    fn test_serialization_is_repeatable() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPull").on("arn:aws:codecommit:*:*:my-repo").if_key(
            "aws:RequestTag/Team",
            ["payments"],
            None,
        );

        let first = statement.to_json().unwrap();
        let second = statement.to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test_log::test]
    fn test_empty_action_set_is_surfaced_as_is() {
        let statement = PolicyStatement::new(CODECOMMIT);
        assert_eq!(statement.to_json().unwrap(), r#"{"Effect":"Allow","Action":[],"Resource":"*"}"#);
    }

    #[test_log::test]
    fn test_bare_condition_key_is_service_qualified() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPush").if_key("References", ["refs/heads/main"], None);

        assert_eq!(
            statement.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":"codecommit:GitPush","Resource":"*","#,
                r#""Condition":{"StringLike":{"codecommit:References":["refs/heads/main"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_explicit_operator_overrides_default() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPush").if_key("References", ["refs/heads/main"], Some(condop::StringNotEquals));

        assert!(statement
            .conditions()
            .get(&condop::StringNotEquals, "codecommit:References")
            .is_some());
        assert!(statement.conditions().get(&condop::StringLike, "codecommit:References").is_none());
    }

    #[test_log::test]
    fn test_conditions_append_across_calls() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement
            .to("CreateRepository")
            .if_key("aws:RequestTag/Team", ["payments"], None)
            .if_key("aws:RequestTag/Team", ["billing"], None);

        assert_eq!(
            statement.conditions().get(&condop::StringLike, "aws:RequestTag/Team").unwrap().to_vec(),
            vec!["payments", "billing"]
        );
    }

    #[test_log::test]
    fn test_if_clause_passthrough_operator() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPull").if_clause(ConditionClause::with_op(
            "codecommit:References",
            ["refs/heads/*"],
            crate::ConditionOp::from("StringLikeIgnoringPrefix"),
        ));

        assert_eq!(
            statement.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":"codecommit:GitPull","Resource":"*","#,
                r#""Condition":{"StringLikeIgnoringPrefix":{"codecommit:References":["refs/heads/*"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_on_resource_type() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPull").on_resource_type(
            "repository",
            &[("RepositoryName", "my-repo")],
            None,
            None,
            None,
        );

        assert_eq!(statement.resources().to_vec(), vec!["arn:aws:codecommit:*:*:my-repo"]);

        // Unknown types are ignored.
        statement.on_resource_type("pipeline", &[], None, None, None);
        assert_eq!(statement.resources().len(), 1);
    }

    #[test_log::test]
    fn test_configured_arn_defaults_flow_through() {
        let defaults = ArnDefaults::builder().region("us-east-1").account("123456789012").build().unwrap();
        let mut statement = PolicyStatement::with_arn_defaults(CODECOMMIT, defaults);
        statement.to("GitPull").on_resource_type("repository", &[("RepositoryName", "my-repo")], None, None, None);

        assert_eq!(statement.resources().to_vec(), vec!["arn:aws:codecommit:us-east-1:123456789012:my-repo"]);
    }

    #[test_log::test]
    fn test_display_pretty_prints() {
        let mut statement = PolicyStatement::new(CODECOMMIT);
        statement.to("GitPull");

        assert_eq!(
            statement.to_string(),
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "codecommit:GitPull",
                "Resource": "*"
            }"# }
        );
    }
}
