// NetworkManager SSID reader via D-Bus

//! Associated-network snapshots via D-Bus
//!
//! This module reads the SSIDs of every active wireless connection from
//! NetworkManager's D-Bus interface, optionally restricted to one interface.

use crate::types::Snapshot;
use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use zbus::zvariant::OwnedObjectPath;
use zbus::{proxy, Connection};

/// NetworkManager connection type for Wi-Fi
const WIRELESS_CONNECTION_TYPE: &str = "802-11-wireless";

/// Source of the current set of associated networks
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    /// Read the networks the host is currently associated with
    async fn current_snapshot(&self) -> Result<Snapshot>;
}

/// D-Bus proxy for NetworkManager
#[proxy(
    interface = "org.freedesktop.NetworkManager",
    default_service = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager"
)]
trait NetworkManager {
    /// Get all active connections
    #[zbus(property)]
    fn active_connections(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}

/// D-Bus proxy for active connection
#[proxy(
    interface = "org.freedesktop.NetworkManager.Connection.Active",
    default_service = "org.freedesktop.NetworkManager"
)]
trait ActiveConnection {
    /// Get the connection type
    #[zbus(property, name = "Type")]
    fn connection_type(&self) -> zbus::Result<String>;

    /// Get the devices associated with this connection
    #[zbus(property)]
    fn devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}

/// D-Bus proxy for a network device
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device",
    default_service = "org.freedesktop.NetworkManager"
)]
trait Device {
    /// Kernel interface name
    #[zbus(property)]
    fn interface(&self) -> zbus::Result<String>;
}

/// D-Bus proxy for wireless device
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device.Wireless",
    default_service = "org.freedesktop.NetworkManager"
)]
trait WirelessDevice {
    /// Get the active access point object path
    #[zbus(property)]
    fn active_access_point(&self) -> zbus::Result<OwnedObjectPath>;
}

/// D-Bus proxy for access point
#[proxy(
    interface = "org.freedesktop.NetworkManager.AccessPoint",
    default_service = "org.freedesktop.NetworkManager"
)]
trait AccessPoint {
    /// Get the SSID as raw bytes
    #[zbus(property)]
    fn ssid(&self) -> zbus::Result<Vec<u8>>;
}

/// SSID monitor
pub struct SsidMonitor {
    interface: Option<String>,
    connection: OnceCell<Connection>,
}

impl SsidMonitor {
    /// Create a monitor, optionally restricted to one wireless interface
    ///
    /// The system bus is only contacted on the first snapshot, so a missing
    /// bus surfaces as a failed poll rather than a startup error.
    pub fn new(interface: Option<String>) -> Self {
        Self {
            interface,
            connection: OnceCell::new(),
        }
    }

    /// Interface filter, if any
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    async fn connection(&self) -> Result<&Connection> {
        self.connection
            .get_or_try_init(|| async {
                Connection::system()
                    .await
                    .context("Failed to connect to system D-Bus")
            })
            .await
    }

    /// SSID of the access point a wireless device is associated with
    async fn device_ssid(
        &self,
        connection: &Connection,
        device: &OwnedObjectPath,
    ) -> Result<Option<String>> {
        if let Some(wanted) = &self.interface {
            let dev = DeviceProxy::builder(connection)
                .path(device)?
                .build()
                .await?;
            if dev.interface().await? != *wanted {
                return Ok(None);
            }
        }

        let wireless_dev = WirelessDeviceProxy::builder(connection)
            .path(device)?
            .build()
            .await?;

        let ap_path = wireless_dev.active_access_point().await?;
        if ap_path.as_str() == "/" {
            return Ok(None);
        }

        let ap = AccessPointProxy::builder(connection)
            .path(&ap_path)?
            .build()
            .await?;

        let ssid_bytes = ap.ssid().await?;
        Ok(Some(decode_ssid(&ssid_bytes)))
    }
}

impl SnapshotSource for SsidMonitor {
    async fn current_snapshot(&self) -> Result<Snapshot> {
        let connection = self.connection().await?;
        let nm = NetworkManagerProxy::new(connection)
            .await
            .context("Failed to create NetworkManager proxy")?;

        let active = nm
            .active_connections()
            .await
            .context("Failed to list active connections")?;

        let mut ssids = Vec::new();
        for path in &active {
            let active_conn = ActiveConnectionProxy::builder(connection)
                .path(path)?
                .build()
                .await?;

            // Connections can vanish between listing and inspection
            let conn_type = match active_conn.connection_type().await {
                Ok(t) => t,
                Err(e) => {
                    log::debug!("Skipping active connection {}: {}", path.as_str(), e);
                    continue;
                }
            };
            if conn_type != WIRELESS_CONNECTION_TYPE {
                continue;
            }

            for device in active_conn.devices().await? {
                if let Some(ssid) = self.device_ssid(connection, &device).await? {
                    ssids.push(ssid);
                }
            }
        }

        Ok(Snapshot::new(ssids))
    }
}

/// SSIDs are raw bytes; invalid UTF-8 is replaced rather than rejected
fn decode_ssid(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
