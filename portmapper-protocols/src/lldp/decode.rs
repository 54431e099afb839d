//! Topology extraction from a captured LLDP frame
//!
//! A registration run needs exactly three facts out of a neighbor's LLDPDU:
//! the switch's system name, the port we are plugged into, and whether the
//! port naming says it is gigabit-capable (`Gi...` vs `Fa...`).

use tracing::debug;

use portmapper_core::{Error, Result};

use super::packet::{LldpFrame, LldpTlvType, LLDP_ETHERTYPE, LLDP_MULTICAST_MAC};

/// TLV position of the system-name field on the reference deployment's
/// switches
const SYSTEM_NAME_INDEX: usize = 3;

/// TLV position of the port-ID field on the reference deployment's switches
const PORT_ID_INDEX: usize = 6;

/// Characters of sub-type/format prefix the reference deployment strips
/// from positionally-located TLV payloads
const POSITIONAL_PREFIX_CHARS: usize = 2;

/// How the system-name and port-ID TLVs are located within a frame.
///
/// Standard type codes are the robust choice; positional indexing matches
/// the fixed TLV ordering of the hardware the original deployment was
/// tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlvLookup {
    /// Locate TLVs by their IEEE 802.1AB type codes
    #[default]
    ByType,
    /// Locate TLVs by fixed position (system name at index 3, port ID at
    /// index 6) and strip a two-character payload prefix from each
    Positional,
}

/// Topology facts extracted from one LLDP frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTopology {
    /// System name of the upstream switch
    pub switch_name: String,
    /// Port number/name reported upstream (third `/`-segment of the port
    /// string, e.g. `24` for `Gi1/0/24`)
    pub port: String,
    /// Whether the port naming convention marks the port gigabit-capable
    pub gigabit: bool,
}

/// Decode an Ethernet frame into the switch topology facts.
///
/// The frame must be addressed to the LLDP nearest-bridge multicast address
/// and carry the LLDP ethertype; anything else is `Error::NotLldp`. A frame
/// that is LLDP but lacks the expected fields, carries non-UTF-8 payloads,
/// or names a port with fewer than three `/`-separated segments fails with
/// `Error::MalformedLldp` - expected conditions given real-world switch
/// variability, never a panic.
pub fn decode_topology(frame: &[u8], lookup: TlvLookup) -> Result<SwitchTopology> {
    if frame.len() < 14 {
        return Err(Error::NotLldp);
    }
    if frame[..6] != LLDP_MULTICAST_MAC {
        return Err(Error::NotLldp);
    }
    let ethertype = u16::from_be_bytes([frame[12], frame[13]]);
    if ethertype != LLDP_ETHERTYPE {
        return Err(Error::NotLldp);
    }

    let lldpdu = LldpFrame::from_bytes(&frame[14..]).ok_or(Error::NotLldp)?;

    if let Some(chassis) = lldpdu.find(LldpTlvType::ChassisId) {
        debug!(chassis_id = %hex::encode(&chassis.value), "decoding LLDP neighbor");
    }

    let (switch_name, port_string) = match lookup {
        TlvLookup::ByType => extract_by_type(&lldpdu)?,
        TlvLookup::Positional => extract_positional(&lldpdu)?,
    };

    if switch_name.is_empty() {
        return Err(Error::malformed("empty system name"));
    }

    let gigabit = port_string
        .chars()
        .next()
        .map(|c| c == 'g' || c == 'G')
        .unwrap_or(false);

    let segments: Vec<&str> = port_string.split('/').collect();
    if segments.len() < 3 {
        return Err(Error::malformed(format!(
            "port string '{port_string}' has fewer than 3 segments"
        )));
    }
    let port = segments[2].to_string();

    debug!(switch = %switch_name, port = %port, gigabit, "extracted switch topology");

    Ok(SwitchTopology {
        switch_name,
        port,
        gigabit,
    })
}

/// Standard lookup: System Name TLV payload verbatim, Port ID TLV payload
/// with its one-byte subtype stripped
fn extract_by_type(lldpdu: &LldpFrame) -> Result<(String, String)> {
    let name_tlv = lldpdu
        .find(LldpTlvType::SystemName)
        .ok_or_else(|| Error::malformed("missing system-name TLV"))?;
    let switch_name = utf8_payload(&name_tlv.value, "system name")?;

    let port_tlv = lldpdu
        .find(LldpTlvType::PortId)
        .ok_or_else(|| Error::malformed("missing port-ID TLV"))?;
    if port_tlv.value.len() < 2 {
        return Err(Error::malformed("port-ID TLV too short"));
    }
    let port_string = utf8_payload(&port_tlv.value[1..], "port ID")?;

    Ok((switch_name, port_string))
}

/// Reference-deployment lookup: fixed TLV positions, two-character prefix
/// stripped from each payload
fn extract_positional(lldpdu: &LldpFrame) -> Result<(String, String)> {
    let name_tlv = lldpdu
        .at(SYSTEM_NAME_INDEX)
        .ok_or_else(|| Error::malformed("no TLV at system-name position"))?;
    let name_raw = utf8_payload(&name_tlv.value, "system name")?;
    let switch_name = strip_prefix_chars(&name_raw, POSITIONAL_PREFIX_CHARS)
        .ok_or_else(|| Error::malformed("system-name payload too short"))?
        .to_string();

    let port_tlv = lldpdu
        .at(PORT_ID_INDEX)
        .ok_or_else(|| Error::malformed("no TLV at port-ID position"))?;
    let port_raw = utf8_payload(&port_tlv.value, "port ID")?;
    let port_string = strip_prefix_chars(&port_raw, POSITIONAL_PREFIX_CHARS)
        .ok_or_else(|| Error::malformed("port-ID payload too short"))?
        .to_string();

    Ok((switch_name, port_string))
}

fn utf8_payload(bytes: &[u8], field: &str) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| Error::malformed(format!("{field} payload is not UTF-8")))
}

/// Drop the first `n` characters of `s`, respecting UTF-8 boundaries;
/// `None` when fewer than `n + 1` characters remain
fn strip_prefix_chars(s: &str, n: usize) -> Option<&str> {
    s.char_indices().nth(n).map(|(i, _)| &s[i..])
}
