use crate::configuration::YarnConfiguration;
use confdrift_contract::domain::exemption::ExemptionRule;
use confdrift_contract::{ContractError, FixtureConfig, VerifierBootstrap};

/// Resource name of the shipped defaults document.
pub const DEFAULTS_DOCUMENT: &str = "yarn-default.xml";

/// Compares [`YarnConfiguration`] with `yarn-default.xml`.
///
/// Drift in either direction is fatal, and no two `_PORT` constants may share a default.
#[derive(Debug, Clone, Copy, Default)]
pub struct YarnConfigurationFields;

impl VerifierBootstrap for YarnConfigurationFields {
    #[allow(deprecated)]
    fn initialize() -> Result<FixtureConfig, ContractError> {
        let builder = FixtureConfig::builder()
            .document(DEFAULTS_DOCUMENT)
            .class(YarnConfiguration)
            .strict()
            // Service-level ACLs live in hadoop-policy.xml
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_APPLICATIONCLIENT_PROTOCOL,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_APPLICATIONMASTER_PROTOCOL,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_CONTAINER_MANAGEMENT_PROTOCOL,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCE_LOCALIZER,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCEMANAGER_ADMINISTRATION_PROTOCOL,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCETRACKER_PROTOCOL,
            ))
            .exempt(ExemptionRule::code_exact(YarnConfiguration::CURATOR_LEADER_ELECTOR))
            // Federation state-store defaults are set programmatically
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::DEFAULT_FEDERATION_STATESTORE_CLIENT_CLASS,
            ))
            .exempt(ExemptionRule::code_exact(YarnConfiguration::FEDERATION_FAILOVER_ENABLED))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::FEDERATION_STATESTORE_HEARTBEAT_INTERVAL_SECS,
            ))
            .exempt(ExemptionRule::code_exact(YarnConfiguration::RM_EPOCH))
            // AM node blacklisting is not released yet
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::AM_SCHEDULING_NODE_BLACKLISTING_ENABLED,
            ))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::AM_SCHEDULING_NODE_BLACKLISTING_DISABLE_THRESHOLD,
            ))
            // Timeline service v1
            .exempt(ExemptionRule::code_prefix("yarn.timeline-service."))
            .exempt(ExemptionRule::doc_prefix("yarn.timeline-service"))
            .exempt(ExemptionRule::code_exact(
                YarnConfiguration::RM_SYSTEM_METRICS_PUBLISHER_ENABLED,
            ))
            // JVM command-line properties of containers, never read from XML
            .exempt(ExemptionRule::code_prefix("yarn.app.container"))
            // Experimental node manager resource enforcement
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_NETWORK_RESOURCE_ENABLED))
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_NETWORK_RESOURCE_INTERFACE))
            .exempt(ExemptionRule::code_prefix(
                YarnConfiguration::NM_NETWORK_RESOURCE_OUTBOUND_BANDWIDTH_MBIT,
            ))
            .exempt(ExemptionRule::code_prefix(
                YarnConfiguration::NM_NETWORK_RESOURCE_OUTBOUND_BANDWIDTH_YARN_MBIT,
            ))
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_DISK_RESOURCE_ENABLED))
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_MEMORY_RESOURCE_PREFIX))
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_CPU_RESOURCE_ENABLED))
            // Set by container-executor.cfg
            .exempt(ExemptionRule::code_prefix(YarnConfiguration::NM_USER_HOME_DIR))
            .exempt(ExemptionRule::code_prefix(
                YarnConfiguration::YARN_CLIENT_APP_SUBMISSION_POLL_INTERVAL_MS,
            ))
            // Document-only entries
            .exempt(ExemptionRule::doc_exact(
                "yarn.nodemanager.aux-services.mapreduce_shuffle.class",
            ))
            .exempt(ExemptionRule::doc_exact(
                "yarn.resourcemanager.container.liveness-monitor.interval-ms",
            ))
            // Substituted into other values as ${yarn.nodemanager.hostname}
            .exempt(ExemptionRule::doc_exact("yarn.nodemanager.hostname"))
            // Owned by RegistryConstants and core-site.xml
            .exempt(ExemptionRule::doc_prefix("hadoop.registry"))
            .collision_filter("_PORT");

        builder.build()
    }
}
