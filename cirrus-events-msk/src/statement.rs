//! Per-function permission aggregation.

use cirrus_cfn::{ArnReference, PolicyStatement};

/// Actions a mapping needs to discover brokers, attach to the cluster's
/// VPC, and write its logs.
pub const MSK_STATEMENT_ACTIONS: [&str; 11] = [
    "kafka:DescribeCluster",
    "kafka:GetBootstrapBrokers",
    "ec2:CreateNetworkInterface",
    "ec2:DeleteNetworkInterface",
    "ec2:DescribeNetworkInterfaces",
    "ec2:DescribeSecurityGroups",
    "ec2:DescribeSubnets",
    "ec2:DescribeVpcs",
    "logs:CreateLogGroup",
    "logs:CreateLogStream",
    "logs:PutLogEvents",
];

/// Accumulates the distinct cluster ARNs one function's events touch.
///
/// Several events commonly share a cluster (one event per subscribed
/// topic); the statement lists each cluster once, in first-seen order.
/// Equality is structural: an `Fn::GetAtt` and an `Fn::ImportValue`
/// naming the same cluster stay distinct entries.
#[derive(Debug, Default)]
pub struct ClusterPermissions {
    clusters: Vec<ArnReference>,
}

impl ClusterPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cluster reference unless an equal one is already present.
    pub fn record(&mut self, cluster: &ArnReference) {
        if !self.clusters.contains(cluster) {
            self.clusters.push(cluster.clone());
        }
    }

    /// The function's permission statement, if any cluster was recorded.
    pub fn into_statement(self) -> Option<PolicyStatement> {
        if self.clusters.is_empty() {
            return None;
        }
        Some(PolicyStatement::allow(
            MSK_STATEMENT_ACTIONS
                .iter()
                .map(|action| (*action).to_owned())
                .collect(),
            self.clusters,
        ))
    }
}
