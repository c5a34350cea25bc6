//! `DependsOn` derivation from the effective execution role.

use cirrus_cfn::{DependsOn, EXECUTION_ROLE_LOGICAL_ID};
use cirrus_service::RoleSpec;

/// The creation-order dependency of a mapping under the given role.
///
/// A mapping polls with the function's role attached, so it must wait
/// for an in-template role resource; roles living outside the template
/// (external ARNs, imports) leave nothing to depend on.
pub fn depends_on(role: &RoleSpec) -> DependsOn {
    match role {
        RoleSpec::Default => DependsOn::Resource(EXECUTION_ROLE_LOGICAL_ID.to_owned()),
        RoleSpec::Arn(_) | RoleSpec::Import => DependsOn::None,
        RoleSpec::GetAtt(logical_id) | RoleSpec::LogicalId(logical_id) => {
            DependsOn::Resource(logical_id.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_table() {
        let cases = [
            (
                RoleSpec::Default,
                DependsOn::Resource("IamRoleLambdaExecution".to_owned()),
            ),
            (
                RoleSpec::Arn("arn:aws:iam::account:role/foo".to_owned()),
                DependsOn::None,
            ),
            (
                RoleSpec::GetAtt("RoleLogicalId".to_owned()),
                DependsOn::Resource("RoleLogicalId".to_owned()),
            ),
            (RoleSpec::Import, DependsOn::None),
            (
                RoleSpec::LogicalId("RoleLogicalId".to_owned()),
                DependsOn::Resource("RoleLogicalId".to_owned()),
            ),
        ];
        for (role, expected) in cases {
            assert_eq!(depends_on(&role), expected, "role {role:?}");
        }
    }
}
