use crate::{AccessLevel, ConditionOp};

/// One action from a service's authorization reference table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionSpec {
    pub name: &'static str,
    pub access_level: AccessLevel,
    pub resource_types: &'static [&'static str],
    pub condition_keys: &'static [&'static str],
}

/// One resource type and its ARN template.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceTypeSpec {
    pub name: &'static str,
    pub arn_template: &'static str,
    pub condition_keys: &'static [&'static str],
}

/// One condition key (possibly templated with `${TagKey}`) and the name of
/// its documented default operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConditionKeySpec {
    pub key: &'static str,
    pub default_op: &'static str,
}

impl ConditionKeySpec {
    /// True if `key` is this descriptor's key, treating a `${TagKey}`
    /// segment in the descriptor as matching any caller-supplied tag key.
    fn matches(&self, key: &str) -> bool {
        match self.key.find("${") {
            None => self.key == key,
            Some(idx) => key.starts_with(&self.key[..idx]) && key.len() > idx,
        }
    }
}

/// The static description of one AWS service's authorization surface:
/// its IAM prefix plus the generated action, resource-type, and
/// condition-key tables. The builder core consumes these tables read-only
/// and does not validate their internal consistency.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceSpec {
    pub prefix: &'static str,
    pub actions: &'static [ActionSpec],
    pub resource_types: &'static [ResourceTypeSpec],
    pub condition_keys: &'static [ConditionKeySpec],
}

impl ServiceSpec {
    pub fn action(&self, name: &str) -> Option<&'static ActionSpec> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTypeSpec> {
        self.resource_types.iter().find(|r| r.name == name)
    }

    /// The access level of `action`, or None if the action is not in the
    /// table. Lookup misses are not an error; unknown actions simply have
    /// no classification.
    pub fn access_level(&self, action: &str) -> Option<AccessLevel> {
        self.action(action).map(|a| a.access_level)
    }

    /// The names of every action classified at `level`, in table order.
    pub fn actions_with_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.iter().filter(move |a| a.access_level == level).map(|a| a.name)
    }

    /// The documented default operator for `key`, if the service's table
    /// declares one.
    pub fn default_op_for(&self, key: &str) -> Option<ConditionOp> {
        self.condition_keys.iter().find(|c| c.matches(key)).map(|c| ConditionOp::from(c.default_op))
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, AccessLevel, ActionSpec, ConditionKeySpec, ResourceTypeSpec, ServiceSpec},
        pretty_assertions::assert_eq,
    };

    const TEST_SPEC: ServiceSpec = ServiceSpec {
        prefix: "example",
        actions: &[
            ActionSpec {
                name: "GetWidget",
                access_level: AccessLevel::Read,
                resource_types: &["widget"],
                condition_keys: &[],
            },
            ActionSpec {
                name: "CreateWidget",
                access_level: AccessLevel::Write,
                resource_types: &["widget"],
                condition_keys: &["aws:RequestTag/${TagKey}"],
            },
            ActionSpec {
                name: "DeleteWidget",
                access_level: AccessLevel::Write,
                resource_types: &["widget"],
                condition_keys: &[],
            },
            ActionSpec {
                name: "ListWidgets",
                access_level: AccessLevel::List,
                resource_types: &[],
                condition_keys: &[],
            },
            ActionSpec {
                name: "PutWidgetPolicy",
                access_level: AccessLevel::PermissionsManagement,
                resource_types: &["widget"],
                condition_keys: &[],
            },
        ],
        resource_types: &[ResourceTypeSpec {
            name: "widget",
            arn_template: "arn:${Partition}:example:${Region}:${Account}:widget/${WidgetId}",
            condition_keys: &[],
        }],
        condition_keys: &[
            ConditionKeySpec {
                key: "example:WidgetCount",
                default_op: "NumericLessThanEquals",
            },
            ConditionKeySpec {
                key: "aws:RequestTag/${TagKey}",
                default_op: "StringLike",
            },
        ],
    };

    #[test_log::test]
    fn test_access_level_lookup() {
        assert_eq!(TEST_SPEC.access_level("GetWidget"), Some(AccessLevel::Read));
        assert_eq!(TEST_SPEC.access_level("PutWidgetPolicy"), Some(AccessLevel::PermissionsManagement));
        assert_eq!(TEST_SPEC.access_level("NoSuchAction"), None);
    }

    #[test_log::test]
    fn test_actions_with_level() {
        let write: Vec<_> = TEST_SPEC.actions_with_level(AccessLevel::Write).collect();
        assert_eq!(write, vec!["CreateWidget", "DeleteWidget"]);

        let tagging: Vec<_> = TEST_SPEC.actions_with_level(AccessLevel::Tagging).collect();
        assert!(tagging.is_empty());
    }

    #[test_log::test]
    fn test_resource_type_lookup() {
        let widget = TEST_SPEC.resource_type("widget").unwrap();
        assert_eq!(widget.arn_template, "arn:${Partition}:example:${Region}:${Account}:widget/${WidgetId}");
        assert!(TEST_SPEC.resource_type("gadget").is_none());
    }

    #[test_log::test]
    fn test_default_op_lookup() {
        assert_eq!(TEST_SPEC.default_op_for("example:WidgetCount"), Some(condop::NumericLessThanEquals));
        assert_eq!(TEST_SPEC.default_op_for("aws:RequestTag/Team"), Some(condop::StringLike));
        assert_eq!(TEST_SPEC.default_op_for("aws:RequestTag/"), None);
        assert_eq!(TEST_SPEC.default_op_for("example:Unknown"), None);
    }
}
