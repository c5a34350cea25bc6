//! Cluster-name extraction from ARN references.

use cirrus_cfn::ArnReference;

/// The cluster name a reference points at, used for logical-id synthesis.
///
/// Literal MSK ARNs encode `cluster/<name>/<uuid>` in their resource
/// part, so the name is the second `/`-delimited segment. ARN syntax is
/// not validated: a malformed literal yields whatever sits in that
/// position, or the empty string.
pub fn cluster_name(cluster: &ArnReference) -> &str {
    match cluster {
        ArnReference::Arn(arn) => arn.split('/').nth(1).unwrap_or_default(),
        ArnReference::GetAtt { logical_id, .. } => logical_id,
        ArnReference::ImportValue(name) => name,
    }
}
