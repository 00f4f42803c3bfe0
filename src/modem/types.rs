// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Record types returned by the modem management API

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// One vendor object instance, field name to string value
pub type Record = BTreeMap<String, String>;

/// Records keyed by a join key (object path or a chosen field value)
pub type RecordSet = BTreeMap<String, Record>;

/// Body of a `cgi_get` response
#[derive(Debug, Default, Deserialize)]
pub struct Data {
    #[serde(rename = "Objects", default)]
    pub objects: Vec<Object>,
}

/// One object of a `cgi_get` response
#[derive(Debug, Default, Deserialize)]
pub struct Object {
    #[serde(rename = "ObjName", default)]
    pub name: String,
    #[serde(rename = "Param", default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Deserialize)]
pub struct Param {
    #[serde(rename = "ParamName")]
    pub name: String,
    #[serde(rename = "ParamValue", default)]
    pub value: String,
}

impl Object {
    /// Folds the parameter list into a record; a repeated name keeps the last value
    #[must_use]
    pub fn to_record(&self) -> Record {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

/// Converts a decoded response into a record set.
///
/// With an empty `key_field` every record is keyed by its object name, otherwise
/// by the value of `key_field` inside the record (empty when absent).
#[must_use]
pub fn data_to_map(data: &Data, key_field: &str) -> RecordSet {
    let mut map = RecordSet::new();
    for object in &data.objects {
        let record = object.to_record();
        let key = if key_field.is_empty() {
            object.name.clone()
        } else {
            record.get(key_field).cloned().unwrap_or_default()
        };
        map.insert(key, record);
    }
    map
}

/// Object domains queried on every scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Hosts,
    AccessPoint,
    Ssid,
    Radio,
    Ethernet,
    TemperatureStatus,
}

impl Domain {
    /// All domains, in fetch order
    pub const ALL: [Domain; 6] = [
        Domain::Hosts,
        Domain::AccessPoint,
        Domain::Ssid,
        Domain::Radio,
        Domain::Ethernet,
        Domain::TemperatureStatus,
    ];

    /// Vendor object path passed as `Object=`
    #[must_use]
    pub fn object(self) -> &'static str {
        match self {
            Domain::Hosts => "Device.Hosts.Host",
            Domain::AccessPoint => "Device.WiFi.AccessPoint",
            Domain::Ssid => "Device.WiFi.SSID.",
            Domain::Radio => "Device.WiFi.Radio",
            Domain::Ethernet => "Device.Ethernet.",
            Domain::TemperatureStatus => "Device.DeviceInfo.TemperatureStatus.TemperatureSensor.",
        }
    }

    /// Field filters appended to the query, each sent as `Name=`
    #[must_use]
    pub fn filters(self) -> &'static [&'static str] {
        match self {
            Domain::Hosts => &[
                "PhysAddress",
                "HostName",
                "Layer1Interface",
                "Active",
                "IPAddress",
            ],
            Domain::Radio => &["Channel", "OperatingFrequencyBand"],
            _ => &[],
        }
    }

    /// Field used as the join key, empty for the object name
    #[must_use]
    pub fn key_field(self) -> &'static str {
        match self {
            Domain::Hosts => "PhysAddress",
            _ => "",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Hosts => "Hosts",
            Domain::AccessPoint => "WiFi AccessPoint",
            Domain::Ssid => "WiFi SSID",
            Domain::Radio => "WiFi Radio",
            Domain::Ethernet => "Ethernet Interfaces",
            Domain::TemperatureStatus => "Temperature Sensors",
        };
        f.write_str(name)
    }
}

/// The six record sets fetched in one scrape cycle
#[derive(Debug, Clone, Default)]
pub struct Scrape {
    pub hosts: RecordSet,
    pub access_points: RecordSet,
    pub ssids: RecordSet,
    pub radios: RecordSet,
    pub ethernet: RecordSet,
    pub temperature: RecordSet,
}
