//! Symbolic names for every YARN configuration key, plus the compiled-in defaults.
//!
//! Names starting with `DEFAULT_` hold default values. Values ending in `.` are key prefixes
//! and values ending in `.xml` are resource names; neither is a key.

confdrift_contract::constants_class! {
    /// Constants class of the YARN API.
    pub struct YarnConfiguration {
        // Resource files and prefixes
        pub const YARN_SITE_CONFIGURATION_FILE: &'static str = "yarn-site.xml";
        pub const CORE_SITE_CONFIGURATION_FILE: &'static str = "core-site.xml";
        pub const RESOURCE_TYPES_CONFIGURATION_FILE: &'static str = "resource-types.xml";
        pub const YARN_PREFIX: &'static str = "yarn.";
        pub const RM_PREFIX: &'static str = "yarn.resourcemanager.";
        pub const NM_PREFIX: &'static str = "yarn.nodemanager.";
        pub const TIMELINE_SERVICE_PREFIX: &'static str = "yarn.timeline-service.";
        pub const SHARED_CACHE_PREFIX: &'static str = "yarn.sharedcache.";
        pub const FEDERATION_PREFIX: &'static str = "yarn.federation.";
        pub const ROUTER_PREFIX: &'static str = "yarn.router.";
        pub const YARN_CLIENT_PREFIX: &'static str = "yarn.client.";

        // General
        pub const IPC_CLIENT_FACTORY_CLASS: &'static str = "yarn.ipc.client.factory.class";
        pub const IPC_RPC_IMPL: &'static str = "yarn.ipc.rpc.class";
        pub const DEFAULT_IPC_RPC_IMPL: &'static str =
            "org.apache.hadoop.yarn.ipc.HadoopYarnProtoRPC";
        pub const YARN_ACL_ENABLE: &'static str = "yarn.acl.enable";
        pub const DEFAULT_YARN_ACL_ENABLE: bool = false;
        pub const YARN_ADMIN_ACL: &'static str = "yarn.admin.acl";
        pub const DEFAULT_YARN_ADMIN_ACL: &'static str = "*";
        pub const LOG_AGGREGATION_ENABLED: &'static str = "yarn.log-aggregation-enable";
        pub const DEFAULT_LOG_AGGREGATION_ENABLED: bool = false;
        pub const LOG_AGGREGATION_RETAIN_SECONDS: &'static str =
            "yarn.log-aggregation.retain-seconds";
        pub const DEFAULT_LOG_AGGREGATION_RETAIN_SECONDS: i64 = -1;

        // Service-level authorization, documented in hadoop-policy.xml
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_APPLICATIONCLIENT_PROTOCOL: &'static str =
            "security.applicationclient.protocol.acl";
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_APPLICATIONMASTER_PROTOCOL: &'static str =
            "security.applicationmaster.protocol.acl";
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_CONTAINER_MANAGEMENT_PROTOCOL: &'static str =
            "security.containermanagement.protocol.acl";
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCE_LOCALIZER: &'static str =
            "security.resourcelocalizer.protocol.acl";
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCEMANAGER_ADMINISTRATION_PROTOCOL: &'static str =
            "security.resourcemanager-administration.protocol.acl";
        pub const YARN_SECURITY_SERVICE_AUTHORIZATION_RESOURCETRACKER_PROTOCOL: &'static str =
            "security.resourcetracker.protocol.acl";

        // Resource manager
        pub const RM_HOSTNAME: &'static str = "yarn.resourcemanager.hostname";
        pub const RM_ADDRESS: &'static str = "yarn.resourcemanager.address";
        pub const DEFAULT_RM_PORT: i32 = 8032;
        pub const DEFAULT_RM_ADDRESS: &'static str = "0.0.0.0:8032";
        pub const RM_SCHEDULER_ADDRESS: &'static str = "yarn.resourcemanager.scheduler.address";
        pub const DEFAULT_RM_SCHEDULER_PORT: i32 = 8030;
        pub const DEFAULT_RM_SCHEDULER_ADDRESS: &'static str = "0.0.0.0:8030";
        pub const RM_RESOURCE_TRACKER_ADDRESS: &'static str =
            "yarn.resourcemanager.resource-tracker.address";
        pub const DEFAULT_RM_RESOURCE_TRACKER_PORT: i32 = 8031;
        pub const DEFAULT_RM_RESOURCE_TRACKER_ADDRESS: &'static str = "0.0.0.0:8031";
        pub const RM_ADMIN_ADDRESS: &'static str = "yarn.resourcemanager.admin.address";
        pub const DEFAULT_RM_ADMIN_PORT: i32 = 8033;
        pub const DEFAULT_RM_ADMIN_ADDRESS: &'static str = "0.0.0.0:8033";
        pub const RM_WEBAPP_ADDRESS: &'static str = "yarn.resourcemanager.webapp.address";
        pub const DEFAULT_RM_WEBAPP_PORT: i32 = 8088;
        pub const DEFAULT_RM_WEBAPP_ADDRESS: &'static str = "0.0.0.0:8088";
        pub const RM_WEBAPP_HTTPS_ADDRESS: &'static str =
            "yarn.resourcemanager.webapp.https.address";
        pub const DEFAULT_RM_WEBAPP_HTTPS_PORT: i32 = 8090;
        pub const DEFAULT_RM_WEBAPP_HTTPS_ADDRESS: &'static str = "0.0.0.0:8090";
        pub const RM_AM_MAX_ATTEMPTS: &'static str = "yarn.resourcemanager.am.max-attempts";
        pub const DEFAULT_RM_AM_MAX_ATTEMPTS: i32 = 2;
        pub const RM_SCHEDULER: &'static str = "yarn.resourcemanager.scheduler.class";
        pub const RM_SCHEDULER_MINIMUM_ALLOCATION_MB: &'static str =
            "yarn.scheduler.minimum-allocation-mb";
        pub const DEFAULT_RM_SCHEDULER_MINIMUM_ALLOCATION_MB: i32 = 1024;
        pub const RM_SCHEDULER_MAXIMUM_ALLOCATION_MB: &'static str =
            "yarn.scheduler.maximum-allocation-mb";
        pub const DEFAULT_RM_SCHEDULER_MAXIMUM_ALLOCATION_MB: i32 = 8192;
        pub const RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES: &'static str =
            "yarn.scheduler.minimum-allocation-vcores";
        pub const DEFAULT_RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES: i32 = 1;
        pub const RM_SCHEDULER_MAXIMUM_ALLOCATION_VCORES: &'static str =
            "yarn.scheduler.maximum-allocation-vcores";
        pub const DEFAULT_RM_SCHEDULER_MAXIMUM_ALLOCATION_VCORES: i32 = 4;
        pub const RM_NM_EXPIRY_INTERVAL_MS: &'static str =
            "yarn.nm.liveness-monitor.expiry-interval-ms";
        pub const DEFAULT_RM_NM_EXPIRY_INTERVAL_MS: i32 = 600000;
        pub const RM_HA_ENABLED: &'static str = "yarn.resourcemanager.ha.enabled";
        pub const DEFAULT_RM_HA_ENABLED: bool = false;
        pub const RM_HA_IDS: &'static str = "yarn.resourcemanager.ha.rm-ids";
        pub const RM_HA_ID: &'static str = "yarn.resourcemanager.ha.id";
        /// Injected at runtime.
        pub const CURATOR_LEADER_ELECTOR: &'static str =
            "yarn.resourcemanager.ha.curator-leader-elector.enabled";
        pub const RECOVERY_ENABLED: &'static str = "yarn.resourcemanager.recovery.enabled";
        pub const DEFAULT_RM_RECOVERY_ENABLED: bool = false;
        pub const RM_STORE: &'static str = "yarn.resourcemanager.store.class";
        #[deprecated]
        pub const RM_ZK_ADDRESS: &'static str = "yarn.resourcemanager.zk-address";
        pub const RM_EPOCH: &'static str = "yarn.resourcemanager.epoch";
        pub const DEFAULT_RM_EPOCH: i64 = 0;
        pub const SYSTEM_METRICS_PUBLISHER_ENABLED: &'static str =
            "yarn.system-metrics-publisher.enabled";
        pub const DEFAULT_SYSTEM_METRICS_PUBLISHER_ENABLED: bool = false;
        #[deprecated]
        pub const RM_SYSTEM_METRICS_PUBLISHER_ENABLED: &'static str =
            "yarn.resourcemanager.system-metrics-publisher.enabled";
        pub const AM_SCHEDULING_NODE_BLACKLISTING_ENABLED: &'static str =
            "yarn.am.blacklisting.enabled";
        pub const DEFAULT_AM_SCHEDULING_NODE_BLACKLISTING_ENABLED: bool = true;
        pub const AM_SCHEDULING_NODE_BLACKLISTING_DISABLE_THRESHOLD: &'static str =
            "yarn.am.blacklisting.disable-failure-threshold";

        // Node manager
        pub const NM_ADDRESS: &'static str = "yarn.nodemanager.address";
        pub const DEFAULT_NM_PORT: i32 = 0;
        pub const DEFAULT_NM_ADDRESS: &'static str = "0.0.0.0:0";
        pub const NM_LOCALIZER_ADDRESS: &'static str = "yarn.nodemanager.localizer.address";
        pub const DEFAULT_NM_LOCALIZER_PORT: i32 = 8040;
        pub const DEFAULT_NM_LOCALIZER_ADDRESS: &'static str = "0.0.0.0:8040";
        pub const NM_WEBAPP_ADDRESS: &'static str = "yarn.nodemanager.webapp.address";
        pub const DEFAULT_NM_WEBAPP_PORT: i32 = 8042;
        pub const DEFAULT_NM_WEBAPP_ADDRESS: &'static str = "0.0.0.0:8042";
        pub const NM_WEBAPP_HTTPS_ADDRESS: &'static str = "yarn.nodemanager.webapp.https.address";
        pub const DEFAULT_NM_WEBAPP_HTTPS_PORT: i32 = 8044;
        pub const DEFAULT_NM_WEBAPP_HTTPS_ADDRESS: &'static str = "0.0.0.0:8044";
        pub const NM_COLLECTOR_SERVICE_ADDRESS: &'static str =
            "yarn.nodemanager.collector-service.address";
        pub const DEFAULT_NM_COLLECTOR_SERVICE_PORT: i32 = 8048;
        pub const DEFAULT_NM_COLLECTOR_SERVICE_ADDRESS: &'static str = "0.0.0.0:8048";
        pub const NM_LOCAL_DIRS: &'static str = "yarn.nodemanager.local-dirs";
        pub const NM_LOG_DIRS: &'static str = "yarn.nodemanager.log-dirs";
        pub const DEFAULT_NM_LOG_DIRS: &'static str = "/tmp/logs";
        pub const NM_PMEM_MB: &'static str = "yarn.nodemanager.resource.memory-mb";
        pub const DEFAULT_NM_PMEM_MB: i32 = 8192;
        pub const NM_VCORES: &'static str = "yarn.nodemanager.resource.cpu-vcores";
        pub const DEFAULT_NM_VCORES: i32 = 8;
        pub const NM_VMEM_PMEM_RATIO: &'static str = "yarn.nodemanager.vmem-pmem-ratio";
        pub const NM_CONTAINER_MON_INTERVAL_MS: &'static str =
            "yarn.nodemanager.container-monitor.interval-ms";
        pub const DEFAULT_NM_CONTAINER_MON_INTERVAL_MS: i32 = 3000;
        pub const NM_CONTAINER_EXECUTOR: &'static str = "yarn.nodemanager.container-executor.class";
        pub const NM_LINUX_CONTAINER_EXECUTOR_PATH: &'static str =
            "yarn.nodemanager.linux-container-executor.path";
        pub const NM_AUX_SERVICES: &'static str = "yarn.nodemanager.aux-services";
        /// Set by container-executor.cfg.
        pub const NM_USER_HOME_DIR: &'static str = "yarn.nodemanager.user-home-dir";
        pub const DEFAULT_NM_USER_HOME_DIR: &'static str = "/home/";
        pub const NM_NETWORK_RESOURCE_PREFIX: &'static str = "yarn.nodemanager.resource.network.";
        pub const NM_NETWORK_RESOURCE_ENABLED: &'static str =
            "yarn.nodemanager.resource.network.enabled";
        pub const DEFAULT_NM_NETWORK_RESOURCE_ENABLED: bool = false;
        pub const NM_NETWORK_RESOURCE_INTERFACE: &'static str =
            "yarn.nodemanager.resource.network.interface";
        pub const DEFAULT_NM_NETWORK_RESOURCE_INTERFACE: &'static str = "eth0";
        pub const NM_NETWORK_RESOURCE_OUTBOUND_BANDWIDTH_MBIT: &'static str =
            "yarn.nodemanager.resource.network.outbound-bandwidth-mbit";
        pub const DEFAULT_NM_NETWORK_RESOURCE_OUTBOUND_BANDWIDTH_MBIT: i32 = 1000;
        pub const NM_NETWORK_RESOURCE_OUTBOUND_BANDWIDTH_YARN_MBIT: &'static str =
            "yarn.nodemanager.resource.network.outbound-bandwidth-yarn-mbit";
        pub const NM_DISK_RESOURCE_PREFIX: &'static str = "yarn.nodemanager.resource.disk.";
        pub const NM_DISK_RESOURCE_ENABLED: &'static str = "yarn.nodemanager.resource.disk.enabled";
        pub const DEFAULT_NM_DISK_RESOURCE_ENABLED: bool = false;
        pub const NM_MEMORY_RESOURCE_PREFIX: &'static str = "yarn.nodemanager.resource.memory.";
        pub const NM_MEMORY_RESOURCE_ENABLED: &'static str =
            "yarn.nodemanager.resource.memory.enabled";
        pub const DEFAULT_NM_MEMORY_RESOURCE_ENABLED: bool = false;
        pub const NM_MEMORY_RESOURCE_ENFORCED: &'static str =
            "yarn.nodemanager.resource.memory.enforced";
        pub const NM_CPU_RESOURCE_PREFIX: &'static str = "yarn.nodemanager.resource.cpu.";
        pub const NM_CPU_RESOURCE_ENABLED: &'static str = "yarn.nodemanager.resource.cpu.enabled";
        pub const DEFAULT_NM_CPU_RESOURCE_ENABLED: bool = false;

        // Container JVM options, passed on the command line
        pub const YARN_APP_CONTAINER_LOG_DIR: &'static str = "yarn.app.container.log.dir";
        pub const YARN_APP_CONTAINER_LOG_SIZE: &'static str = "yarn.app.container.log.filesize";
        pub const YARN_APP_CONTAINER_LOG_BACKUPS: &'static str = "yarn.app.container.log.backups";

        // Client
        #[deprecated]
        pub const YARN_CLIENT_APP_SUBMISSION_POLL_INTERVAL_MS: &'static str =
            "yarn.client.app-submission.poll-interval";
        pub const YARN_CLIENT_APPLICATION_CLIENT_PROTOCOL_POLL_INTERVAL_MS: &'static str =
            "yarn.client.application-client-protocol.poll-interval-ms";
        pub const DEFAULT_YARN_CLIENT_APPLICATION_CLIENT_PROTOCOL_POLL_INTERVAL_MS: i64 = 200;
        pub const YARN_CLIENT_APPLICATION_CLIENT_PROTOCOL_POLL_TIMEOUT_MS: &'static str =
            "yarn.client.application-client-protocol.poll-timeout-ms";
        pub const CLIENT_FAILOVER_MAX_ATTEMPTS: &'static str = "yarn.client.failover-max-attempts";
        pub const NM_CLIENT_MAX_NM_PROXIES: &'static str =
            "yarn.client.max-cached-nodemanagers-proxies";
        pub const DEFAULT_NM_CLIENT_MAX_NM_PROXIES: i32 = 0;

        // Timeline service v1
        pub const TIMELINE_SERVICE_ENABLED: &'static str = "yarn.timeline-service.enabled";
        pub const DEFAULT_TIMELINE_SERVICE_ENABLED: bool = false;
        pub const TIMELINE_SERVICE_ADDRESS: &'static str = "yarn.timeline-service.address";
        pub const DEFAULT_TIMELINE_SERVICE_PORT: i32 = 10200;
        pub const DEFAULT_TIMELINE_SERVICE_ADDRESS: &'static str = "0.0.0.0:10200";
        pub const TIMELINE_SERVICE_WEBAPP_ADDRESS: &'static str =
            "yarn.timeline-service.webapp.address";
        pub const DEFAULT_TIMELINE_SERVICE_WEBAPP_PORT: i32 = 8188;
        pub const DEFAULT_TIMELINE_SERVICE_WEBAPP_ADDRESS: &'static str = "0.0.0.0:8188";
        pub const TIMELINE_SERVICE_WEBAPP_HTTPS_ADDRESS: &'static str =
            "yarn.timeline-service.webapp.https.address";
        pub const DEFAULT_TIMELINE_SERVICE_WEBAPP_HTTPS_PORT: i32 = 8190;
        pub const DEFAULT_TIMELINE_SERVICE_WEBAPP_HTTPS_ADDRESS: &'static str = "0.0.0.0:8190";
        pub const TIMELINE_SERVICE_TTL_MS: &'static str = "yarn.timeline-service.ttl-ms";

        // Shared cache
        pub const SHARED_CACHE_ENABLED: &'static str = "yarn.sharedcache.enabled";
        pub const DEFAULT_SHARED_CACHE_ENABLED: bool = false;
        pub const SCM_ADMIN_ADDRESS: &'static str = "yarn.sharedcache.admin.address";
        pub const DEFAULT_SCM_ADMIN_PORT: i32 = 8047;
        pub const DEFAULT_SCM_ADMIN_ADDRESS: &'static str = "0.0.0.0:8047";
        pub const SCM_CLIENT_SERVER_ADDRESS: &'static str =
            "yarn.sharedcache.client-server.address";
        pub const DEFAULT_SCM_CLIENT_SERVER_PORT: i32 = 8045;
        pub const DEFAULT_SCM_CLIENT_SERVER_ADDRESS: &'static str = "0.0.0.0:8045";
        pub const SCM_UPLOADER_SERVER_ADDRESS: &'static str =
            "yarn.sharedcache.uploader.server.address";
        pub const DEFAULT_SCM_UPLOADER_SERVER_PORT: i32 = 8046;
        pub const DEFAULT_SCM_UPLOADER_SERVER_ADDRESS: &'static str = "0.0.0.0:8046";
        pub const SCM_WEBAPP_ADDRESS: &'static str = "yarn.sharedcache.webapp.address";
        pub const DEFAULT_SCM_WEBAPP_PORT: i32 = 8788;
        pub const DEFAULT_SCM_WEBAPP_ADDRESS: &'static str = "0.0.0.0:8788";

        // Federation and router
        pub const FEDERATION_ENABLED: &'static str = "yarn.federation.enabled";
        pub const DEFAULT_FEDERATION_ENABLED: bool = false;
        pub const FEDERATION_STATESTORE_CLIENT_CLASS: &'static str =
            "yarn.federation.state-store.class";
        pub const DEFAULT_FEDERATION_STATESTORE_CLIENT_CLASS: &'static str =
            "org.apache.hadoop.yarn.server.federation.store.impl.MemoryFederationStateStore";
        pub const FEDERATION_FAILOVER_ENABLED: &'static str = "yarn.federation.failover.enabled";
        pub const DEFAULT_FEDERATION_FAILOVER_ENABLED: bool = true;
        pub const FEDERATION_STATESTORE_HEARTBEAT_INTERVAL_SECS: &'static str =
            "yarn.federation.state-store.heartbeat-interval-secs";
        pub const DEFAULT_FEDERATION_STATESTORE_HEARTBEAT_INTERVAL_SECS: i32 = 60;
        pub const FEDERATION_CACHE_TIME_TO_LIVE_SECS: &'static str =
            "yarn.federation.cache-ttl.secs";
        pub const DEFAULT_FEDERATION_CACHE_TIME_TO_LIVE_SECS: i32 = 300;
        pub const AMRM_PROXY_ENABLED: &'static str = "yarn.nodemanager.amrmproxy.enabled";
        pub const DEFAULT_AMRM_PROXY_ENABLED: bool = false;
        pub const AMRM_PROXY_ADDRESS: &'static str = "yarn.nodemanager.amrmproxy.address";
        pub const DEFAULT_AMRM_PROXY_PORT: i32 = 8049;
        pub const DEFAULT_AMRM_PROXY_ADDRESS: &'static str = "0.0.0.0:8049";
        pub const ROUTER_CLIENTRM_ADDRESS: &'static str = "yarn.router.clientrm.address";
        pub const DEFAULT_ROUTER_CLIENTRM_PORT: i32 = 8050;
        pub const DEFAULT_ROUTER_CLIENTRM_ADDRESS: &'static str = "0.0.0.0:8050";
        pub const ROUTER_RMADMIN_ADDRESS: &'static str = "yarn.router.rmadmin.address";
        pub const DEFAULT_ROUTER_RMADMIN_PORT: i32 = 8052;
        pub const DEFAULT_ROUTER_RMADMIN_ADDRESS: &'static str = "0.0.0.0:8052";
        pub const ROUTER_WEBAPP_ADDRESS: &'static str = "yarn.router.webapp.address";
        pub const DEFAULT_ROUTER_WEBAPP_PORT: i32 = 8089;
        pub const DEFAULT_ROUTER_WEBAPP_ADDRESS: &'static str = "0.0.0.0:8089";

        // Registry
    }
}
