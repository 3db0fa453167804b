//! Door kinds and the pluggable styling step
//!
//! Carved doors carry no kind unless a styler assigns one. The weighted
//! styler rolls a percentile against a cumulative table, then locks
//! lockable kinds with a fixed chance.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::rng::GameRng;

/// Chance, in percent, that a lockable door is locked
pub const LOCKED_CHANCE: u32 = 25;

/// Physical kind of a door
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DoorKind {
    Archway,
    Brass,
    Concealed,
    Hole,
    Iron,
    Mechanical,
    Passageway,
    Portal,
    Portcullis,
    Secret,
    Steel,
    Stone,
    Wooden,
}

impl DoorKind {
    /// Check if this kind of door can be locked
    pub const fn is_lockable(self) -> bool {
        matches!(
            self,
            DoorKind::Brass
                | DoorKind::Iron
                | DoorKind::Mechanical
                | DoorKind::Portcullis
                | DoorKind::Steel
                | DoorKind::Stone
                | DoorKind::Wooden
        )
    }

    /// Check if this door is hidden from view
    pub const fn is_hidden(self) -> bool {
        matches!(self, DoorKind::Concealed | DoorKind::Secret)
    }
}

bitflags! {
    /// Door state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DoorFlags: u8 {
        const LOCKED = 0x01;
        const HIDDEN = 0x02;
    }
}

impl Serialize for DoorFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DoorFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(DoorFlags::from_bits_truncate(bits))
    }
}

/// Kind and state assigned to a carved door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorStyle {
    pub kind: DoorKind,
    pub flags: DoorFlags,
}

impl DoorStyle {
    pub fn new(kind: DoorKind, locked: bool) -> Self {
        let mut flags = DoorFlags::empty();
        flags.set(DoorFlags::LOCKED, locked);
        flags.set(DoorFlags::HIDDEN, kind.is_hidden());
        Self { kind, flags }
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(DoorFlags::LOCKED)
    }
}

/// Cumulative percentile table
///
/// Each entry is `(threshold, value)`; a roll of 1..=100 selects the first
/// entry whose threshold is at least the roll.
#[derive(Debug, Clone)]
pub struct Probability<T> {
    entries: Vec<(u32, T)>,
}

impl<T: Copy> Probability<T> {
    pub fn new(entries: Vec<(u32, T)>) -> Self {
        Self { entries }
    }

    /// Value for a given percentile roll, if the table covers it
    pub fn lookup(&self, roll: u32) -> Option<T> {
        self.entries
            .iter()
            .find(|(threshold, _)| roll <= *threshold)
            .map(|(_, value)| *value)
    }

    /// Roll a percentile and look it up
    pub fn roll(&self, rng: &mut GameRng) -> Option<T> {
        self.lookup(rng.percentile())
    }
}

/// Regular door kinds by cumulative percentile
pub fn door_probability() -> Probability<DoorKind> {
    Probability::new(vec![
        (20, DoorKind::Passageway),
        (40, DoorKind::Archway),
        (55, DoorKind::Hole),
        (60, DoorKind::Mechanical),
        (65, DoorKind::Portcullis),
        (75, DoorKind::Wooden),
        (80, DoorKind::Steel),
        (85, DoorKind::Iron),
        (90, DoorKind::Brass),
        (95, DoorKind::Stone),
        (100, DoorKind::Portal),
    ])
}

/// Hidden door kinds; rolls above 30 fall through to a regular door
pub fn secret_probability() -> Probability<DoorKind> {
    Probability::new(vec![(15, DoorKind::Concealed), (30, DoorKind::Secret)])
}

/// Assigns a style to each carved door
pub trait DoorStyler {
    fn style(&mut self, rng: &mut GameRng) -> Option<DoorStyle>;
}

/// Leaves doors without a kind
#[derive(Debug, Clone, Copy, Default)]
pub struct Unstyled;

impl DoorStyler for Unstyled {
    fn style(&mut self, _rng: &mut GameRng) -> Option<DoorStyle> {
        None
    }
}

/// Rolls door kinds from the weighted tables
#[derive(Debug, Clone)]
pub struct WeightedDoorStyles {
    doors: Probability<DoorKind>,
    secrets: Option<Probability<DoorKind>>,
}

impl WeightedDoorStyles {
    /// Regular doors only
    pub fn new() -> Self {
        Self {
            doors: door_probability(),
            secrets: None,
        }
    }

    /// Regular doors, with a chance of concealed and secret doors
    pub fn with_secrets() -> Self {
        Self {
            doors: door_probability(),
            secrets: Some(secret_probability()),
        }
    }
}

impl Default for WeightedDoorStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorStyler for WeightedDoorStyles {
    fn style(&mut self, rng: &mut GameRng) -> Option<DoorStyle> {
        let hidden = self.secrets.as_ref().and_then(|table| table.roll(rng));
        let kind = hidden.or_else(|| self.doors.roll(rng))?;
        let locked = kind.is_lockable() && rng.percent(LOCKED_CHANCE);
        Some(DoorStyle::new(kind, locked))
    }
}

/// Which styler a generation run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DoorStyleMode {
    /// Doors carry no kind
    #[default]
    Unstyled,
    Weighted,
    WeightedWithSecrets,
}

impl DoorStyleMode {
    pub fn styler(self) -> Box<dyn DoorStyler> {
        match self {
            DoorStyleMode::Unstyled => Box::new(Unstyled),
            DoorStyleMode::Weighted => Box::new(WeightedDoorStyles::new()),
            DoorStyleMode::WeightedWithSecrets => Box::new(WeightedDoorStyles::with_secrets()),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;

    #[test]
    fn test_door_table_boundaries() {
        let table = door_probability();
        assert_eq!(table.lookup(1), Some(DoorKind::Passageway));
        assert_eq!(table.lookup(20), Some(DoorKind::Passageway));
        assert_eq!(table.lookup(21), Some(DoorKind::Archway));
        assert_eq!(table.lookup(55), Some(DoorKind::Hole));
        assert_eq!(table.lookup(56), Some(DoorKind::Mechanical));
        assert_eq!(table.lookup(100), Some(DoorKind::Portal));
        assert_eq!(table.lookup(101), None);
    }

    #[test]
    fn test_secret_table_falls_through() {
        let table = secret_probability();
        assert_eq!(table.lookup(15), Some(DoorKind::Concealed));
        assert_eq!(table.lookup(30), Some(DoorKind::Secret));
        assert_eq!(table.lookup(31), None);
    }

    #[test]
    fn test_lockable_kinds() {
        assert!(DoorKind::Wooden.is_lockable());
        assert!(DoorKind::Portcullis.is_lockable());
        assert!(!DoorKind::Archway.is_lockable());
        assert!(!DoorKind::Hole.is_lockable());
    }

    #[test]
    fn test_unstyled() {
        let mut rng = GameRng::new(1);
        assert!(Unstyled.style(&mut rng).is_none());
    }

    #[test]
    fn test_weighted_styles_only_lock_lockable() {
        let mut styler = WeightedDoorStyles::new();
        let mut rng = GameRng::new(42);
        let mut kinds = HashSet::new();
        let mut locked = 0;

        for _ in 0..2000 {
            let style = styler.style(&mut rng).unwrap();
            assert!(!style.kind.is_hidden());
            if style.is_locked() {
                assert!(style.kind.is_lockable());
                locked += 1;
            }
            kinds.insert(style.kind);
        }
        assert_eq!(kinds.len(), 11);
        assert!(locked > 0);
    }

    #[test]
    fn test_secret_styles_appear() {
        let mut styler = WeightedDoorStyles::with_secrets();
        let mut rng = GameRng::new(5);
        let hidden = (0..500)
            .filter_map(|_| styler.style(&mut rng))
            .filter(|s| s.flags.contains(DoorFlags::HIDDEN))
            .count();
        assert!(hidden > 0);
    }

    #[test]
    fn test_flags_serialize_as_bits() {
        let style = DoorStyle::new(DoorKind::Iron, true);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"kind":"iron","flags":1}"#);
    }
}
