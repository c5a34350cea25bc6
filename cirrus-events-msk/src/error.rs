//! Configuration errors raised while compiling kafka events.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for the kafka event compiler.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// An invalid `kafka` event declaration.
///
/// Raised synchronously by the validator; the first invalid event aborts
/// the whole pass. Every variant names the owning function so the
/// message points at the declaration to fix.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("kafka event of function \"{function}\" is not an object")]
    #[diagnostic(
        code(cirrus::msk::event_not_an_object),
        help("declare the event as an object with a \"clusterArn\" and a \"topic\" property")
    )]
    EventNotAnObject { function: String },

    #[error("missing \"clusterArn\" property for kafka event in function \"{function}\"")]
    #[diagnostic(
        code(cirrus::msk::missing_cluster_arn),
        help("declare the event as an object with a \"clusterArn\" and a \"topic\" property")
    )]
    MissingClusterArn { function: String },

    #[error("bad dynamic ARN property on kafka event in function \"{function}\"")]
    #[diagnostic(
        code(cirrus::msk::invalid_cluster_reference),
        help(
            "a dynamic \"clusterArn\" must be an object with exactly one key, either Fn::GetAtt or Fn::ImportValue"
        )
    )]
    InvalidClusterReference { function: String },

    #[error("missing \"topic\" property for kafka event in function \"{function}\"")]
    #[diagnostic(
        code(cirrus::msk::missing_topic),
        help("declare the event as an object with a \"clusterArn\" and a \"topic\" property")
    )]
    MissingTopic { function: String },

    #[error("bad topic name on kafka event in function \"{function}\"")]
    #[diagnostic(code(cirrus::msk::invalid_topic), help("the topic must be a string"))]
    InvalidTopic { function: String },
}

impl ConfigurationError {
    pub fn event_not_an_object(function: impl Into<String>) -> Self {
        ConfigurationError::EventNotAnObject {
            function: function.into(),
        }
    }

    pub fn missing_cluster_arn(function: impl Into<String>) -> Self {
        ConfigurationError::MissingClusterArn {
            function: function.into(),
        }
    }

    pub fn invalid_cluster_reference(function: impl Into<String>) -> Self {
        ConfigurationError::InvalidClusterReference {
            function: function.into(),
        }
    }

    pub fn missing_topic(function: impl Into<String>) -> Self {
        ConfigurationError::MissingTopic {
            function: function.into(),
        }
    }

    pub fn invalid_topic(function: impl Into<String>) -> Self {
        ConfigurationError::InvalidTopic {
            function: function.into(),
        }
    }
}
