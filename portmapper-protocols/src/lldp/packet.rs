//! LLDP frame structures and TLV parsing

use bytes::{BufMut, BytesMut};

use portmapper_core::MacAddr;

/// LLDP multicast MAC address (nearest bridge)
pub const LLDP_MULTICAST_MAC: [u8; 6] = [0x01, 0x80, 0xC2, 0x00, 0x00, 0x0E];

/// LLDP Ethertype
pub const LLDP_ETHERTYPE: u16 = 0x88CC;

/// LLDP TLV Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LldpTlvType {
    EndOfLldpdu,
    ChassisId,
    PortId,
    Ttl,
    PortDescription,
    SystemName,
    SystemDescription,
    SystemCapabilities,
    ManagementAddress,
    OrganizationallySpecific,
    /// Reserved or vendor-specific type codes are carried, not dropped
    Unknown(u8),
}

impl From<u8> for LldpTlvType {
    fn from(value: u8) -> Self {
        match value {
            0 => LldpTlvType::EndOfLldpdu,
            1 => LldpTlvType::ChassisId,
            2 => LldpTlvType::PortId,
            3 => LldpTlvType::Ttl,
            4 => LldpTlvType::PortDescription,
            5 => LldpTlvType::SystemName,
            6 => LldpTlvType::SystemDescription,
            7 => LldpTlvType::SystemCapabilities,
            8 => LldpTlvType::ManagementAddress,
            127 => LldpTlvType::OrganizationallySpecific,
            other => LldpTlvType::Unknown(other),
        }
    }
}

impl LldpTlvType {
    /// Wire code of this TLV type
    pub fn code(self) -> u8 {
        match self {
            LldpTlvType::EndOfLldpdu => 0,
            LldpTlvType::ChassisId => 1,
            LldpTlvType::PortId => 2,
            LldpTlvType::Ttl => 3,
            LldpTlvType::PortDescription => 4,
            LldpTlvType::SystemName => 5,
            LldpTlvType::SystemDescription => 6,
            LldpTlvType::SystemCapabilities => 7,
            LldpTlvType::ManagementAddress => 8,
            LldpTlvType::OrganizationallySpecific => 127,
            LldpTlvType::Unknown(code) => code,
        }
    }
}

/// Chassis ID subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChassisIdSubtype {
    ChassisComponent = 1,
    InterfaceAlias = 2,
    PortComponent = 3,
    MacAddress = 4,
    NetworkAddress = 5,
    InterfaceName = 6,
    LocallyAssigned = 7,
}

/// Port ID subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PortIdSubtype {
    InterfaceAlias = 1,
    PortComponent = 2,
    MacAddress = 3,
    NetworkAddress = 4,
    InterfaceName = 5,
    AgentCircuitId = 6,
    LocallyAssigned = 7,
}

/// LLDP TLV (Type-Length-Value)
#[derive(Debug, Clone)]
pub struct LldpTlv {
    pub tlv_type: LldpTlvType,
    pub value: Vec<u8>,
}

impl LldpTlv {
    pub fn new(tlv_type: LldpTlvType, value: Vec<u8>) -> Self {
        Self { tlv_type, value }
    }

    pub fn chassis_id_mac(mac: MacAddr) -> Self {
        let mut value = Vec::with_capacity(7);
        value.push(ChassisIdSubtype::MacAddress as u8);
        value.extend_from_slice(mac.as_bytes());
        Self::new(LldpTlvType::ChassisId, value)
    }

    pub fn port_id(subtype: PortIdSubtype, id: &[u8]) -> Self {
        let mut value = Vec::with_capacity(id.len() + 1);
        value.push(subtype as u8);
        value.extend_from_slice(id);
        Self::new(LldpTlvType::PortId, value)
    }

    pub fn port_id_interface(name: &str) -> Self {
        Self::port_id(PortIdSubtype::InterfaceName, name.as_bytes())
    }

    pub fn ttl(seconds: u16) -> Self {
        Self::new(LldpTlvType::Ttl, seconds.to_be_bytes().to_vec())
    }

    pub fn system_name(name: &str) -> Self {
        Self::new(LldpTlvType::SystemName, name.as_bytes().to_vec())
    }

    pub fn system_description(desc: &str) -> Self {
        Self::new(LldpTlvType::SystemDescription, desc.as_bytes().to_vec())
    }

    pub fn end_of_lldpdu() -> Self {
        Self::new(LldpTlvType::EndOfLldpdu, vec![])
    }

    /// Encode TLV to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.value.len();
        let mut bytes = Vec::with_capacity(2 + len);

        // Type (7 bits) | Length (9 bits)
        let type_length = ((self.tlv_type.code() as u16) << 9) | (len as u16 & 0x1FF);
        bytes.extend_from_slice(&type_length.to_be_bytes());
        bytes.extend_from_slice(&self.value);

        bytes
    }

    /// Parse one TLV from the front of `data`, returning it and the number
    /// of bytes consumed
    pub fn from_bytes(data: &[u8]) -> Option<(Self, usize)> {
        if data.len() < 2 {
            return None;
        }

        let type_length = u16::from_be_bytes([data[0], data[1]]);
        let tlv_type = LldpTlvType::from((type_length >> 9) as u8);
        let length = (type_length & 0x1FF) as usize;

        if data.len() < 2 + length {
            return None;
        }

        let value = data[2..2 + length].to_vec();
        Some((Self::new(tlv_type, value), 2 + length))
    }
}

/// A decoded LLDP data unit: the TLV sequence of one frame
#[derive(Debug, Clone, Default)]
pub struct LldpFrame {
    pub tlvs: Vec<LldpTlv>,
}

impl LldpFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tlv(&mut self, tlv: LldpTlv) {
        self.tlvs.push(tlv);
    }

    /// Parse a TLV sequence from the LLDP payload of a frame.
    ///
    /// Unknown TLV types are kept in place (positional lookups depend on
    /// them); parsing stops at End-of-LLDPDU or at the first truncated TLV.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let mut frame = Self::new();
        let mut offset = 0;

        while offset < data.len() {
            match LldpTlv::from_bytes(&data[offset..]) {
                Some((tlv, consumed)) => {
                    let is_end = matches!(tlv.tlv_type, LldpTlvType::EndOfLldpdu);
                    frame.add_tlv(tlv);
                    offset += consumed;
                    if is_end {
                        break;
                    }
                }
                None => break,
            }
        }

        if frame.tlvs.is_empty() {
            None
        } else {
            Some(frame)
        }
    }

    /// Encode the TLV sequence to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = BytesMut::new();
        for tlv in &self.tlvs {
            bytes.put_slice(&tlv.to_bytes());
        }
        bytes.to_vec()
    }

    /// Encode a complete Ethernet frame carrying this LLDPDU
    pub fn to_ethernet_bytes(&self, src_mac: MacAddr) -> Vec<u8> {
        let payload = self.to_bytes();
        let mut bytes = Vec::with_capacity(14 + payload.len());
        bytes.extend_from_slice(&LLDP_MULTICAST_MAC);
        bytes.extend_from_slice(src_mac.as_bytes());
        bytes.extend_from_slice(&LLDP_ETHERTYPE.to_be_bytes());
        bytes.extend_from_slice(&payload);
        bytes
    }

    /// First TLV of the given type
    pub fn find(&self, tlv_type: LldpTlvType) -> Option<&LldpTlv> {
        self.tlvs.iter().find(|tlv| tlv.tlv_type == tlv_type)
    }

    /// TLV at a fixed position in the sequence
    pub fn at(&self, index: usize) -> Option<&LldpTlv> {
        self.tlvs.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlv_encoding() {
        let tlv = LldpTlv::system_name("TestSwitch");
        let bytes = tlv.to_bytes();

        // Type 5 (SystemName) in the upper 7 bits, length 10 in the lower 9
        assert_eq!(bytes[0], 0x0A);
        assert_eq!(bytes[1], 0x0A);
        assert_eq!(&bytes[2..], b"TestSwitch");
    }

    #[test]
    fn test_tlv_parse_truncated() {
        assert!(LldpTlv::from_bytes(&[0x0A]).is_none());

        // Header claims 10 bytes of value, only 3 present
        assert!(LldpTlv::from_bytes(&[0x0A, 0x0A, b'a', b'b', b'c']).is_none());
    }

    #[test]
    fn test_frame_parse_keeps_unknown_tlvs() {
        let mut frame = LldpFrame::new();
        frame.add_tlv(LldpTlv::chassis_id_mac(MacAddr::zero()));
        frame.add_tlv(LldpTlv::new(LldpTlvType::Unknown(9), vec![0xAB, 0xCD]));
        frame.add_tlv(LldpTlv::system_name("sw"));
        frame.add_tlv(LldpTlv::end_of_lldpdu());

        let parsed = LldpFrame::from_bytes(&frame.to_bytes()).unwrap();
        assert_eq!(parsed.tlvs.len(), 4);
        assert_eq!(parsed.tlvs[1].tlv_type, LldpTlvType::Unknown(9));
        assert_eq!(parsed.tlvs[1].value, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_frame_parse_stops_at_end() {
        let mut frame = LldpFrame::new();
        frame.add_tlv(LldpTlv::system_name("sw"));
        frame.add_tlv(LldpTlv::end_of_lldpdu());
        let mut bytes = frame.to_bytes();
        // Trailing garbage after End-of-LLDPDU must be ignored
        bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF]);

        let parsed = LldpFrame::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.tlvs.len(), 2);
    }

    #[test]
    fn test_ethernet_encoding() {
        let src: MacAddr = "00:11:22:33:44:55".parse().unwrap();
        let mut frame = LldpFrame::new();
        frame.add_tlv(LldpTlv::ttl(120));
        let bytes = frame.to_ethernet_bytes(src);

        assert_eq!(&bytes[..6], &LLDP_MULTICAST_MAC);
        assert_eq!(&bytes[6..12], src.as_bytes());
        assert_eq!(&bytes[12..14], &[0x88, 0xCC]);
    }

    #[test]
    fn test_find_and_at() {
        let mut frame = LldpFrame::new();
        frame.add_tlv(LldpTlv::chassis_id_mac(MacAddr::zero()));
        frame.add_tlv(LldpTlv::port_id_interface("Gi1/0/24"));
        frame.add_tlv(LldpTlv::ttl(120));

        assert!(frame.find(LldpTlvType::PortId).is_some());
        assert!(frame.find(LldpTlvType::SystemName).is_none());
        assert_eq!(frame.at(2).unwrap().tlv_type, LldpTlvType::Ttl);
        assert!(frame.at(3).is_none());
    }
}
