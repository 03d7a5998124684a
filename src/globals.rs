//! Helpers for the cross-service `aws:` condition keys.
//!
//! Each helper fixes the key name and applies the key's documented default
//! operator when the caller does not supply one. Keys that take a tag key
//! accept it as a separate argument; boolean keys take an optional value
//! defaulting to true.

use crate::{
    condition::{op, ConditionOp, ConditionValues},
    PolicyStatement,
};

impl PolicyStatement {
    /// `aws:CalledVia`: services that made requests on the principal's
    /// behalf. Default operator: `ForAnyValue:StringEquals`.
    pub fn if_aws_called_via<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::StringEquals.for_any_value());
        self.if_key("aws:CalledVia", values, Some(operator))
    }

    /// `aws:CalledViaFirst`: the first service in the chain. Default
    /// operator: `StringLike`.
    pub fn if_aws_called_via_first<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:CalledViaFirst", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:CalledViaLast`: the last service in the chain. Default
    /// operator: `StringLike`.
    pub fn if_aws_called_via_last<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:CalledViaLast", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:CurrentTime`: the date and time of the request. Default
    /// operator: `DateLessThanEquals`.
    pub fn if_aws_current_time<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:CurrentTime", values, Some(operator.unwrap_or(op::DateLessThanEquals)))
    }

    /// `aws:EpochTime`: the request time in Unix time. Default operator:
    /// `DateLessThanEquals`.
    pub fn if_aws_epoch_time<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:EpochTime", values, Some(operator.unwrap_or(op::DateLessThanEquals)))
    }

    /// `aws:MultiFactorAuthAge`: seconds since MFA authorization. Default
    /// operator: `NumericLessThan`.
    pub fn if_aws_multi_factor_auth_age<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:MultiFactorAuthAge", values, Some(operator.unwrap_or(op::NumericLessThan)))
    }

    /// `aws:MultiFactorAuthPresent`: whether MFA validated the request's
    /// credentials. The value defaults to true.
    pub fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.if_key("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(op::Bool))
    }

    /// `aws:PrincipalAccount`: the requesting principal's account. Default
    /// operator: `StringLike`.
    pub fn if_aws_principal_account<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:PrincipalAccount", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:PrincipalArn`: the ARN of the requesting principal. Default
    /// operator: `ArnLike`.
    pub fn if_aws_principal_arn<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:PrincipalArn", values, Some(operator.unwrap_or(op::ArnLike)))
    }

    /// `aws:PrincipalOrgID`: the principal's organization. Default
    /// operator: `StringLike`.
    pub fn if_aws_principal_org_id<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:PrincipalOrgID", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:PrincipalOrgPaths`: the principal's organization path. Default
    /// operator: `StringEquals`.
    pub fn if_aws_principal_org_paths<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:PrincipalOrgPaths", values, Some(operator.unwrap_or(op::StringEquals)))
    }

    /// `aws:PrincipalTag/<key>`: a tag attached to the requesting
    /// principal. Default operator: `StringLike`.
    pub fn if_aws_principal_tag<V: Into<ConditionValues>>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key(&format!("aws:PrincipalTag/{}", tag_key), values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:PrincipalType`: Account, User, FederatedUser, AssumedRole, or
    /// Anonymous. Default operator: `StringEquals`.
    pub fn if_aws_principal_type<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:PrincipalType", values, Some(operator.unwrap_or(op::StringEquals)))
    }

    /// `aws:Referer`: the HTTP referer header. Default operator:
    /// `StringLike`.
    pub fn if_aws_referer<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:Referer", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:RequestedRegion`: the region the request was made to. Default
    /// operator: `StringEquals`.
    pub fn if_aws_requested_region<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:RequestedRegion", values, Some(operator.unwrap_or(op::StringEquals)))
    }

    /// `aws:RequestTag/<key>`: a tag passed in the request. Default
    /// operator: `StringLike`.
    pub fn if_aws_request_tag<V: Into<ConditionValues>>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key(&format!("aws:RequestTag/{}", tag_key), values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:ResourceTag/<key>`: a tag attached to the requested resource.
    /// Default operator: `StringLike`.
    pub fn if_aws_resource_tag<V: Into<ConditionValues>>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key(&format!("aws:ResourceTag/{}", tag_key), values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:SecureTransport`: whether the request used SSL. The value
    /// defaults to true.
    pub fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.if_key("aws:SecureTransport", value.unwrap_or(true), Some(op::Bool))
    }

    /// `aws:SourceAccount`: the account of the resource making a
    /// service-to-service request. Default operator: `StringLike`.
    pub fn if_aws_source_account<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:SourceAccount", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:SourceArn`: the ARN of the source resource. Default operator:
    /// `ArnLike`.
    pub fn if_aws_source_arn<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:SourceArn", values, Some(operator.unwrap_or(op::ArnLike)))
    }

    /// `aws:SourceIp`: the requester's IP address or CIDR range. Default
    /// operator: `IpAddress`.
    pub fn if_aws_source_ip<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:SourceIp", values, Some(operator.unwrap_or(op::IpAddress)))
    }

    /// `aws:SourceVpc`: the VPC the request came from. Default operator:
    /// `StringEquals`.
    pub fn if_aws_source_vpc<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:SourceVpc", values, Some(operator.unwrap_or(op::StringEquals)))
    }

    /// `aws:SourceVpce`: the VPC endpoint of the request. Default
    /// operator: `StringLike`.
    pub fn if_aws_source_vpce<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:SourceVpce", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:TagKeys`: the tag keys present in the request. Default
    /// operator: `StringLike`.
    pub fn if_aws_tag_keys<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:TagKeys", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:TokenIssueTime`: when the temporary credentials were issued.
    /// Default operator: `DateGreaterThanEquals`.
    pub fn if_aws_token_issue_time<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:TokenIssueTime", values, Some(operator.unwrap_or(op::DateGreaterThanEquals)))
    }

    /// `aws:UserAgent`: the requester's client application. Default
    /// operator: `StringLike`.
    pub fn if_aws_user_agent<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:UserAgent", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:userid`: the requester's principal identifier. Default
    /// operator: `StringLike`.
    pub fn if_aws_userid<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:userid", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:username`: the requester's user name. Default operator:
    /// `StringLike`.
    pub fn if_aws_username<V: Into<ConditionValues>>(&mut self, values: V, operator: Option<ConditionOp>) -> &mut Self {
        self.if_key("aws:username", values, Some(operator.unwrap_or(op::StringLike)))
    }

    /// `aws:ViaAWSService`: whether an AWS service made the request on the
    /// principal's behalf. The value defaults to true.
    pub fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.if_key("aws:ViaAWSService", value.unwrap_or(true), Some(op::Bool))
    }

    /// `aws:VpcSourceIp`: the requester's IP address through a VPC
    /// endpoint. Default operator: `IpAddress`.
    pub fn if_aws_vpc_source_ip<V: Into<ConditionValues>>(
        &mut self,
        values: V,
        operator: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_key("aws:VpcSourceIp", values, Some(operator.unwrap_or(op::IpAddress)))
    }
}
