use {
    crate::{
        AccessLevel, ActionSpec, ArnDefaults, ConditionKeySpec, ConditionOp, ConditionValues, PolicyStatement,
        ResourceTypeSpec, ServiceSpec,
    },
    std::ops::{Deref, DerefMut},
};

/// The `codecommit` authorization table: a representative subset of the
/// service's action catalog, its repository resource type, and its
/// condition keys.
pub const CODECOMMIT: ServiceSpec = ServiceSpec {
    prefix: "codecommit",
    actions: &[
        ActionSpec {
            name: "BatchGetRepositories",
            access_level: AccessLevel::Read,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "CreateBranch",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["codecommit:References"],
        },
        ActionSpec {
            name: "CreateCommit",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["codecommit:References"],
        },
        ActionSpec {
            name: "CreateRepository",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        ActionSpec {
            name: "DeleteBranch",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["codecommit:References"],
        },
        ActionSpec {
            name: "DeleteRepository",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "GetBranch",
            access_level: AccessLevel::Read,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "GetCommit",
            access_level: AccessLevel::Read,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "GetRepository",
            access_level: AccessLevel::Read,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "GitPull",
            access_level: AccessLevel::Read,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "GitPush",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["codecommit:References"],
        },
        ActionSpec {
            name: "ListBranches",
            access_level: AccessLevel::List,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "ListRepositories",
            access_level: AccessLevel::List,
            resource_types: &[],
            condition_keys: &[],
        },
        ActionSpec {
            name: "ListTagsForResource",
            access_level: AccessLevel::List,
            resource_types: &["repository"],
            condition_keys: &[],
        },
        ActionSpec {
            name: "PutFile",
            access_level: AccessLevel::Write,
            resource_types: &["repository"],
            condition_keys: &["codecommit:References"],
        },
        ActionSpec {
            name: "TagResource",
            access_level: AccessLevel::Tagging,
            resource_types: &["repository"],
            condition_keys: &["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        ActionSpec {
            name: "UntagResource",
            access_level: AccessLevel::Tagging,
            resource_types: &["repository"],
            condition_keys: &["aws:TagKeys"],
        },
    ],
    resource_types: &[ResourceTypeSpec {
        name: "repository",
        arn_template: "arn:${Partition}:codecommit:${Region}:${Account}:${RepositoryName}",
        condition_keys: &["aws:ResourceTag/${TagKey}"],
    }],
    condition_keys: &[
        ConditionKeySpec {
            key: "codecommit:References",
            default_op: "StringLike",
        },
        ConditionKeySpec {
            key: "aws:RequestTag/${TagKey}",
            default_op: "StringLike",
        },
        ConditionKeySpec {
            key: "aws:ResourceTag/${TagKey}",
            default_op: "StringLike",
        },
        ConditionKeySpec {
            key: "aws:TagKeys",
            default_op: "StringLike",
        },
    ],
};

/// Statement provider for AWS CodeCommit.
///
/// Wraps a [PolicyStatement] bound to the [CODECOMMIT] table and exposes
/// one method per action plus a typed method per resource type. The wrapper
/// derefs to the statement, so the shared mutators and the `aws:` condition
/// helpers chain freely with the service-specific ones.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeCommit {
    statement: PolicyStatement,
}

impl CodeCommit {
    pub fn new() -> Self {
        Self {
            statement: PolicyStatement::new(CODECOMMIT),
        }
    }

    /// Creates a provider whose statement carries `sid`.
    pub fn with_sid<S: Into<String>>(sid: S) -> Self {
        let mut provider = Self::new();
        provider.statement.set_sid(sid);
        provider
    }

    /// Creates a provider resolving ARNs against the embedding context's
    /// defaults.
    pub fn with_arn_defaults(arn_defaults: ArnDefaults) -> Self {
        Self {
            statement: PolicyStatement::with_arn_defaults(CODECOMMIT, arn_defaults),
        }
    }

    /// Grants permission to get information about multiple repositories.
    pub fn to_batch_get_repositories(&mut self) -> &mut Self {
        self.statement.to("BatchGetRepositories");
        self
    }

    /// Grants permission to create a branch in a repository.
    pub fn to_create_branch(&mut self) -> &mut Self {
        self.statement.to("CreateBranch");
        self
    }

    /// Grants permission to add, copy, move or update files in a repository
    /// in a single commit.
    pub fn to_create_commit(&mut self) -> &mut Self {
        self.statement.to("CreateCommit");
        self
    }

    /// Grants permission to create a repository.
    pub fn to_create_repository(&mut self) -> &mut Self {
        self.statement.to("CreateRepository");
        self
    }

    /// Grants permission to delete a branch.
    pub fn to_delete_branch(&mut self) -> &mut Self {
        self.statement.to("DeleteBranch");
        self
    }

    /// Grants permission to delete a repository.
    pub fn to_delete_repository(&mut self) -> &mut Self {
        self.statement.to("DeleteRepository");
        self
    }

    /// Grants permission to get information about a branch.
    pub fn to_get_branch(&mut self) -> &mut Self {
        self.statement.to("GetBranch");
        self
    }

    /// Grants permission to get information about a commit.
    pub fn to_get_commit(&mut self) -> &mut Self {
        self.statement.to("GetCommit");
        self
    }

    /// Grants permission to get information about a repository.
    pub fn to_get_repository(&mut self) -> &mut Self {
        self.statement.to("GetRepository");
        self
    }

    /// Grants permission to pull from a repository.
    pub fn to_git_pull(&mut self) -> &mut Self {
        self.statement.to("GitPull");
        self
    }

    /// Grants permission to push to a repository.
    pub fn to_git_push(&mut self) -> &mut Self {
        self.statement.to("GitPush");
        self
    }

    /// Grants permission to list the branches of a repository.
    pub fn to_list_branches(&mut self) -> &mut Self {
        self.statement.to("ListBranches");
        self
    }

    /// Grants permission to list the repositories in the account.
    pub fn to_list_repositories(&mut self) -> &mut Self {
        self.statement.to("ListRepositories");
        self
    }

    /// Grants permission to list the tags on a resource.
    pub fn to_list_tags_for_resource(&mut self) -> &mut Self {
        self.statement.to("ListTagsForResource");
        self
    }

    /// Grants permission to add or update a file in a repository.
    pub fn to_put_file(&mut self) -> &mut Self {
        self.statement.to("PutFile");
        self
    }

    /// Grants permission to tag a resource.
    pub fn to_tag_resource(&mut self) -> &mut Self {
        self.statement.to("TagResource");
        self
    }

    /// Grants permission to remove tags from a resource.
    pub fn to_untag_resource(&mut self) -> &mut Self {
        self.statement.to("UntagResource");
        self
    }

    /// Adds the repository resource type to the statement. The repository
    /// name is required; account, region, and partition fall back to the
    /// statement's ARN defaults.
    pub fn on_repository(
        &mut self,
        repository_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.statement.on_resource_type(
            "repository",
            &[("RepositoryName", repository_name)],
            account,
            region,
            partition,
        );
        self
    }

    /// Filters by Git reference, e.g. `refs/heads/main`. Default operator:
    /// `StringLike`.
    pub fn if_references<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.statement.if_key("References", values, operator);
        self
    }

    #[inline]
    pub fn statement(&self) -> &PolicyStatement {
        &self.statement
    }

    pub fn into_statement(self) -> PolicyStatement {
        self.statement
    }
}

impl Default for CodeCommit {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CodeCommit {
    type Target = PolicyStatement;

    fn deref(&self) -> &Self::Target {
        &self.statement
    }
}

impl DerefMut for CodeCommit {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.statement
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, services::CodeCommit, AccessLevel, ArnDefaults},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_tagged_create_repository() {
        let mut cc = CodeCommit::new();
        cc.to_create_repository().if_aws_request_tag("Team", ["payments"], None);

        assert_eq!(
            cc.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":"codecommit:CreateRepository","Resource":"*","#,
                r#""Condition":{"StringLike":{"aws:RequestTag/Team":["payments"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_repository_scoped_push() {
        let mut cc = CodeCommit::with_sid("AllowMainlinePush");
        cc.to_git_push()
            .on_repository("my-repo", Some("123456789012"), Some("us-east-1"), None)
            .if_references(["refs/heads/main"], None);

        assert_eq!(
            cc.to_json().unwrap(),
            concat!(
                r#"{"Sid":"AllowMainlinePush","Effect":"Allow","Action":"codecommit:GitPush","#,
                r#""Resource":"arn:aws:codecommit:us-east-1:123456789012:my-repo","#,
                r#""Condition":{"StringLike":{"codecommit:References":["refs/heads/main"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_arn_defaults_apply_to_resources() {
        let defaults = ArnDefaults::builder().region("eu-west-1").account("123456789012").build().unwrap();
        let mut cc = CodeCommit::with_arn_defaults(defaults);
        cc.to_git_pull().on_repository("docs", None, None, None);

        assert_eq!(cc.resources().to_vec(), vec!["arn:aws:codecommit:eu-west-1:123456789012:docs"]);
    }

    #[test_log::test]
    fn test_deny_with_mixed_helpers() {
        let mut cc = CodeCommit::new();
        cc.deny();
        cc.to_delete_repository().if_aws_multi_factor_auth_present(None);

        let statement = cc.into_statement();
        assert_eq!(
            statement.to_json().unwrap(),
            concat!(
                r#"{"Effect":"Deny","Action":"codecommit:DeleteRepository","Resource":"*","#,
                r#""Condition":{"Bool":{"aws:MultiFactorAuthPresent":["true"]}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_access_level_queries() {
        let cc = CodeCommit::new();
        let spec = cc.service();

        assert_eq!(spec.access_level("GitPush"), Some(AccessLevel::Write));
        assert_eq!(spec.access_level("GitPull"), Some(AccessLevel::Read));
        assert_eq!(spec.access_level("NoSuchAction"), None);

        let tagging: Vec<_> = spec.actions_with_level(AccessLevel::Tagging).collect();
        assert_eq!(tagging, vec!["TagResource", "UntagResource"]);

        let list: Vec<_> = spec.actions_with_level(AccessLevel::List).collect();
        assert_eq!(list, vec!["ListBranches", "ListRepositories", "ListTagsForResource"]);
    }

    #[test_log::test]
    fn test_references_default_comes_from_the_table() {
        let mut cc = CodeCommit::new();
        cc.to_create_branch().if_references(["refs/heads/release-*"], None);

        assert!(cc.conditions().get(&condop::StringLike, "codecommit:References").is_some());
    }
}
