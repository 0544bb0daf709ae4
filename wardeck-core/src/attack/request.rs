//! Attack request types

/// Attack kinds, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttackType {
    Passive = 0,
    Handshake = 1,
    Pmkid = 2,
    Dos = 3,
}

const HANDSHAKE_METHODS: [&str; 3] = ["ROGUE_AP", "BROADCAST", "PASSIVE"];
const DOS_METHODS: [&str; 3] = ["ROGUE_AP", "BROADCAST", "COMBINE"];

impl AttackType {
    pub const ALL: [AttackType; 4] = [
        AttackType::Passive,
        AttackType::Handshake,
        AttackType::Pmkid,
        AttackType::Dos,
    ];

    /// Highest discriminant
    pub const MAX_INDEX: u8 = 3;

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AttackType::Passive => "PASSIVE",
            AttackType::Handshake => "HANDSHAKE",
            AttackType::Pmkid => "PMKID",
            AttackType::Dos => "DOS",
        }
    }

    /// Parse a type name as written in configuration, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Named method table, for types that have one
    pub fn methods(self) -> Option<&'static [&'static str; 3]> {
        match self {
            AttackType::Handshake => Some(&HANDSHAKE_METHODS),
            AttackType::Dos => Some(&DOS_METHODS),
            AttackType::Passive | AttackType::Pmkid => None,
        }
    }

    /// Display name of a method counter value
    ///
    /// Only Handshake and DOS have named methods; the counter is reduced
    /// modulo the table size.
    pub fn method_name(self, method: u8) -> Option<&'static str> {
        self.methods()
            .map(|table| table[method as usize % table.len()])
    }
}

/// Snapshot of a confirmed selection handed to the attack subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRequest {
    pub ap_index: u8,
    pub attack_type: AttackType,
    pub method: u8,
    pub timeout_s: u8,
}

impl AttackRequest {
    /// Encoded size
    pub const WIRE_LEN: usize = 4;

    /// `[ap, type, method, timeout]`
    pub fn to_bytes(&self) -> [u8; Self::WIRE_LEN] {
        [
            self.ap_index,
            self.attack_type.index(),
            self.method,
            self.timeout_s,
        ]
    }

    pub fn from_bytes(bytes: &[u8; Self::WIRE_LEN]) -> Option<Self> {
        Some(Self {
            ap_index: bytes[0],
            attack_type: AttackType::from_index(bytes[1])?,
            method: bytes[2],
            timeout_s: bytes[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_indices() {
        for (i, t) in AttackType::ALL.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(AttackType::from_index(i as u8), Some(*t));
        }
        assert_eq!(AttackType::from_index(4), None);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(AttackType::Handshake.method_name(1), Some("BROADCAST"));
        assert_eq!(AttackType::Handshake.method_name(5), Some("PASSIVE"));
        assert_eq!(AttackType::Dos.method_name(2), Some("COMBINE"));
        assert_eq!(AttackType::Pmkid.method_name(0), None);
        assert_eq!(AttackType::Passive.method_name(9), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AttackType::from_name("handshake"), Some(AttackType::Handshake));
        assert_eq!(AttackType::from_name("DOS"), Some(AttackType::Dos));
        assert_eq!(AttackType::from_name("deauth"), None);
    }

    #[test]
    fn test_wire_layout() {
        let req = AttackRequest {
            ap_index: 2,
            attack_type: AttackType::Dos,
            method: 1,
            timeout_s: 45,
        };
        assert_eq!(req.to_bytes(), [2, 3, 1, 45]);
        assert_eq!(AttackRequest::from_bytes(&[2, 3, 1, 45]), Some(req));
        assert_eq!(AttackRequest::from_bytes(&[2, 7, 1, 45]), None);
    }
}
